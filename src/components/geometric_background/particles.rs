//! Drifting particles and their per-frame motion.

use rand::Rng;

use super::theme::{ParticleStyle, PointerStyle};
use super::types::{Pointer, Viewport};

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Horizontal velocity in pixels per frame.
	pub speed_x: f64,
	/// Vertical velocity in pixels per frame.
	pub speed_y: f64,
	/// Drawn with the accent color instead of the normal one.
	pub accent: bool,
}

impl Particle {
	/// Draw a particle uniformly inside `viewport`.
	pub fn random<R: Rng + ?Sized>(style: &ParticleStyle, viewport: Viewport, rng: &mut R) -> Self {
		Self {
			x: rng.r#gen::<f64>() * viewport.width,
			y: rng.r#gen::<f64>() * viewport.height,
			size: rng.r#gen::<f64>() * (style.size_max - style.size_min) + style.size_min,
			speed_x: (rng.r#gen::<f64>() - 0.5) * style.speed,
			speed_y: (rng.r#gen::<f64>() - 0.5) * style.speed,
			accent: rng.r#gen::<f64>() > style.accent_threshold,
		}
	}

	/// Advance one frame: move, bounce off the viewport edges, then apply the
	/// pointer force.
	///
	/// The edge test runs after the move, so a particle may sit outside the
	/// viewport by up to one step before its velocity brings it back.
	pub fn update(&mut self, viewport: Viewport, pointer: Option<Pointer>, style: &PointerStyle) {
		self.x += self.speed_x;
		self.y += self.speed_y;

		if self.x < 0.0 || self.x > viewport.width {
			self.speed_x = -self.speed_x;
		}
		if self.y < 0.0 || self.y > viewport.height {
			self.speed_y = -self.speed_y;
		}

		if let Some(pointer) = pointer {
			let (dx, dy) = (pointer.x - self.x, pointer.y - self.y);
			let distance = (dx * dx + dy * dy).sqrt();

			if distance < style.radius {
				// Offset is scaled per axis, not normalized.
				let force = (style.radius - distance) / style.radius;
				self.x -= dx * force * style.strength;
				self.y -= dy * force * style.strength;
			}
		}
	}
}

/// The full particle population for one viewport size.
#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
	/// Particles in creation order. Order only matters for pairing links.
	pub particles: Vec<Particle>,
}

impl ParticleSystem {
	/// Generate `style.count` independently randomized particles.
	pub fn new<R: Rng + ?Sized>(style: &ParticleStyle, viewport: Viewport, rng: &mut R) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle::random(style, viewport, rng))
			.collect();

		Self { particles }
	}

	/// Update every particle against the same viewport and pointer snapshot.
	pub fn update(&mut self, viewport: Viewport, pointer: Option<Pointer>, style: &PointerStyle) {
		for p in &mut self.particles {
			p.update(viewport, pointer, style);
		}
	}
}
