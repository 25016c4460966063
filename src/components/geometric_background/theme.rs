//! Visual configuration for the background.
//!
//! Every value here is fixed once the component is constructed. The defaults
//! reproduce the portfolio's cyan/emerald look; any subset can be overridden
//! from JSON (see [`Theme::from_json`]).

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `0.0..=1.0`.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Fully opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a replaced alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string: `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

const CYAN: Color = Color::rgb(6, 182, 212);
const EMERALD: Color = Color::rgb(16, 185, 129);
const BLUE: Color = Color::rgb(59, 130, 246);

/// Diagonal gradient painted behind everything else.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BackgroundStyle {
	/// `(offset, color)` stops from the top-left to the bottom-right corner.
	pub gradient: Vec<(f64, Color)>,
}

impl Default for BackgroundStyle {
	fn default() -> Self {
		Self {
			gradient: vec![
				(0.0, Color::rgb(10, 10, 15)),
				(0.5, Color::rgb(10, 16, 21)),
				(1.0, Color::rgb(10, 15, 20)),
			],
		}
	}
}

/// Particle population configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Number of particles (re)generated on every resize.
	pub count: usize,
	/// Minimum particle radius in pixels.
	pub size_min: f64,
	/// Maximum particle radius in pixels.
	pub size_max: f64,
	/// Each velocity component is drawn from `[-speed / 2, speed / 2]`.
	pub speed: f64,
	/// A particle is an accent particle when a uniform draw exceeds this.
	pub accent_threshold: f64,
	/// Fill for normal particles.
	pub color: Color,
	/// Fill for accent particles.
	pub accent_color: Color,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 80,
			size_min: 1.0,
			size_max: 3.0,
			speed: 0.3,
			accent_threshold: 0.8,
			color: CYAN.with_alpha(0.6),
			accent_color: EMERALD.with_alpha(0.4),
		}
	}
}

/// Proximity line ("constellation") configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LinkStyle {
	/// Pairs closer than this (in pixels) are connected.
	pub distance: f64,
	/// Alpha of a line between coincident particles.
	pub opacity: f64,
	/// Stroke width in pixels.
	pub width: f64,
	/// Line color; its alpha is replaced per line.
	pub color: Color,
}

impl Default for LinkStyle {
	fn default() -> Self {
		Self {
			distance: 150.0,
			opacity: 0.15,
			width: 0.5,
			color: CYAN,
		}
	}
}

/// Pointer proximity force configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PointerStyle {
	/// Particles within this distance of the pointer are displaced.
	pub radius: f64,
	/// Fraction of the particle-to-pointer offset applied at full force.
	pub strength: f64,
}

impl Default for PointerStyle {
	fn default() -> Self {
		Self {
			radius: 100.0,
			strength: 0.02,
		}
	}
}

/// Outline drawn by a motif.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotifShape {
	/// Six-sided polygon with a vertex on the positive x axis.
	Hexagon,
	/// Three-sided polygon pointing up.
	Triangle,
	/// Plain circle outline, never rotated.
	Circle,
}

/// One decorative shape, placed relative to the viewport.
#[derive(Clone, Debug, Deserialize)]
pub struct Motif {
	/// Outline kind.
	pub shape: MotifShape,
	/// Horizontal position as a fraction of the viewport width.
	pub fx: f64,
	/// Vertical position as a fraction of the viewport height.
	pub fy: f64,
	/// Circumradius in pixels.
	pub size: f64,
	/// Rotation multiplier applied to the shared motif clock. Ignored for circles.
	#[serde(default)]
	pub spin: f64,
	/// Stroke color.
	pub color: Color,
	/// Stroke width in pixels.
	pub line_width: f64,
}

impl Motif {
	const fn new(
		shape: MotifShape,
		fx: f64,
		fy: f64,
		size: f64,
		spin: f64,
		color: Color,
		line_width: f64,
	) -> Self {
		Self {
			shape,
			fx,
			fy,
			size,
			spin,
			color,
			line_width,
		}
	}
}

/// Ambient motif layer configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MotifStyle {
	/// Radians of motif clock per millisecond of wall-clock time.
	pub time_scale: f64,
	/// Shapes drawn every frame, back to front.
	pub motifs: Vec<Motif>,
}

impl Default for MotifStyle {
	fn default() -> Self {
		use MotifShape::*;

		Self {
			time_scale: 0.0005,
			motifs: vec![
				Motif::new(Hexagon, 0.15, 0.2, 80.0, 1.0, CYAN.with_alpha(0.03), 2.0),
				Motif::new(Hexagon, 0.85, 0.7, 120.0, -0.7, EMERALD.with_alpha(0.03), 2.0),
				Motif::new(Hexagon, 0.7, 0.15, 60.0, 1.2, BLUE.with_alpha(0.03), 2.0),
				Motif::new(Triangle, 0.2, 0.8, 100.0, 0.5, CYAN.with_alpha(0.02), 2.0),
				Motif::new(Triangle, 0.9, 0.3, 70.0, -0.8, EMERALD.with_alpha(0.02), 2.0),
				Motif::new(Circle, 0.1, 0.5, 150.0, 0.0, CYAN.with_alpha(0.02), 1.0),
				Motif::new(Circle, 0.8, 0.9, 100.0, 0.0, EMERALD.with_alpha(0.02), 1.0),
			],
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
	/// Gradient fill.
	pub background: BackgroundStyle,
	/// Particle population.
	pub particles: ParticleStyle,
	/// Proximity lines.
	pub links: LinkStyle,
	/// Pointer force.
	pub pointer: PointerStyle,
	/// Rotating motifs.
	pub motifs: MotifStyle,
}

impl Theme {
	/// Parse a theme from JSON. Missing fields keep their default values.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}
