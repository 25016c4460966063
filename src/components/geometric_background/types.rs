//! Immutable per-frame inputs to the simulation.

/// Drawable surface dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
}

impl Viewport {
	/// A viewport of the given size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Last known pointer position in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
}
