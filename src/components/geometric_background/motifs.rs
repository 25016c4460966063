//! Slowly rotating decorative outlines.
//!
//! A motif's angle is derived from the absolute timestamp on every frame, so
//! there is no angular state to drift or accumulate.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::theme::{Color, Motif, MotifShape, MotifStyle};
use super::types::Viewport;

impl MotifShape {
	/// Vertex count for polygons, `None` for circles.
	pub fn sides(self) -> Option<usize> {
		match self {
			MotifShape::Hexagon => Some(6),
			MotifShape::Triangle => Some(3),
			MotifShape::Circle => None,
		}
	}

	/// Angle of the first vertex before rotation.
	fn phase(self) -> f64 {
		match self {
			MotifShape::Triangle => -FRAC_PI_2,
			_ => 0.0,
		}
	}
}

/// A motif resolved against a viewport and a timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct MotifPose {
	/// Outline kind.
	pub shape: MotifShape,
	/// Center in canvas pixels.
	pub x: f64,
	/// Center in canvas pixels.
	pub y: f64,
	/// Circumradius in pixels.
	pub size: f64,
	/// Rotation in radians. Always 0 for circles.
	pub rotation: f64,
	/// Stroke color.
	pub color: Color,
	/// Stroke width.
	pub line_width: f64,
}

impl MotifPose {
	/// Place `motif` in `viewport` at motif clock `time`.
	pub fn new(motif: &Motif, viewport: Viewport, time: f64) -> Self {
		let rotation = match motif.shape {
			MotifShape::Circle => 0.0,
			_ => time * motif.spin,
		};

		Self {
			shape: motif.shape,
			x: viewport.width * motif.fx,
			y: viewport.height * motif.fy,
			size: motif.size,
			rotation,
			color: motif.color,
			line_width: motif.line_width,
		}
	}

	/// Polygon corners in canvas pixels, empty for circles.
	pub fn vertices(&self) -> Vec<(f64, f64)> {
		let Some(sides) = self.shape.sides() else {
			return Vec::new();
		};

		(0..sides)
			.map(|i| {
				let angle = i as f64 * TAU / sides as f64 + self.shape.phase() + self.rotation;
				(
					self.x + angle.cos() * self.size,
					self.y + angle.sin() * self.size,
				)
			})
			.collect()
	}
}

/// Motif clock for a wall-clock timestamp in milliseconds.
pub fn motif_time(now_ms: f64, style: &MotifStyle) -> f64 {
	now_ms * style.time_scale
}

/// Resolve every configured motif for this frame.
pub fn poses(style: &MotifStyle, viewport: Viewport, now_ms: f64) -> Vec<MotifPose> {
	let time = motif_time(now_ms, style);
	style
		.motifs
		.iter()
		.map(|motif| MotifPose::new(motif, viewport, time))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	const VIEWPORT: Viewport = Viewport::new(1000.0, 800.0);

	fn close(a: (f64, f64), b: (f64, f64)) -> bool {
		(a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
	}

	#[test]
	fn same_timestamp_same_poses() {
		let style = MotifStyle::default();
		let now = 1_700_000_123_456.0;
		assert_eq!(poses(&style, VIEWPORT, now), poses(&style, VIEWPORT, now));
	}

	#[test]
	fn positions_follow_viewport_fractions() {
		let all = poses(&MotifStyle::default(), VIEWPORT, 0.0);
		assert_eq!(all.len(), 7);
		assert!(close((all[0].x, all[0].y), (150.0, 160.0)));
		assert!(close((all[1].x, all[1].y), (850.0, 560.0)));
		assert!(close((all[6].x, all[6].y), (800.0, 720.0)));
	}

	#[test]
	fn rotation_multipliers_and_direction() {
		let style = MotifStyle::default();
		let all = poses(&style, VIEWPORT, 2000.0);
		let time = 1.0;

		assert!((all[0].rotation - time).abs() < 1e-12);
		assert!((all[1].rotation + 0.7 * time).abs() < 1e-12);
		assert!((all[2].rotation - 1.2 * time).abs() < 1e-12);
		assert!((all[3].rotation - 0.5 * time).abs() < 1e-12);
		assert!((all[4].rotation + 0.8 * time).abs() < 1e-12);
	}

	#[test]
	fn circles_never_rotate() {
		let all = poses(&MotifStyle::default(), VIEWPORT, 987_654.0);
		for pose in all.iter().filter(|p| p.shape == MotifShape::Circle) {
			assert_eq!(pose.rotation, 0.0);
			assert!(pose.vertices().is_empty());
		}
	}

	#[test]
	fn unrotated_vertices() {
		let style = MotifStyle::default();
		let all = poses(&style, VIEWPORT, 0.0);

		let hexagon = all[0].vertices();
		assert_eq!(hexagon.len(), 6);
		assert!(close(hexagon[0], (230.0, 160.0)));
		assert!(close(hexagon[3], (70.0, 160.0)));

		let triangle = all[3].vertices();
		assert_eq!(triangle.len(), 3);
		assert!(close(triangle[0], (200.0, 540.0)));
	}

	#[test]
	fn rotation_moves_first_vertex() {
		let motif = Motif {
			shape: MotifShape::Hexagon,
			fx: 0.5,
			fy: 0.5,
			size: 10.0,
			spin: 1.0,
			color: Color::rgb(0, 0, 0),
			line_width: 1.0,
		};
		let pose = MotifPose::new(&motif, VIEWPORT, FRAC_PI_2);
		assert!(close(pose.vertices()[0], (500.0, 410.0)));
	}
}
