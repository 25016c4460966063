//! Simulation state shared between the frame loop and the window listeners.

use log::debug;
use rand::Rng;

use super::particles::ParticleSystem;
use super::theme::Theme;
use super::types::{Pointer, Viewport};

/// Everything one frame needs: configuration, surface size, pointer, particles.
///
/// Created once when the component mounts. Listeners mutate the viewport and
/// pointer between frames; [`BackgroundState::tick`] advances the particles.
pub struct BackgroundState {
	/// Fixed visual configuration.
	pub theme: Theme,
	/// Current canvas size.
	pub viewport: Viewport,
	/// Pointer position, `None` while the pointer is outside the window.
	pub pointer: Option<Pointer>,
	/// Current particle population.
	pub particles: ParticleSystem,
}

impl BackgroundState {
	/// Build the state and its initial population for a `width` x `height` surface.
	pub fn new<R: Rng + ?Sized>(theme: Theme, width: f64, height: f64, rng: &mut R) -> Self {
		let viewport = Viewport::new(width, height);
		let particles = ParticleSystem::new(&theme.particles, viewport, rng);

		Self {
			theme,
			viewport,
			pointer: None,
			particles,
		}
	}

	/// Adopt a new surface size and regenerate the whole population inside it.
	pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.viewport = Viewport::new(width, height);
		self.particles = ParticleSystem::new(&self.theme.particles, self.viewport, rng);
		debug!(
			"portfolio-bg: resized to {}x{}, regenerated {} particles",
			width,
			height,
			self.particles.particles.len()
		);
	}

	/// Record the pointer position.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some(Pointer { x, y });
	}

	/// Forget the pointer (it left the window).
	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	/// Advance every particle by one frame.
	pub fn tick(&mut self) {
		self.particles
			.update(self.viewport, self.pointer, &self.theme.pointer);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn resize_regenerates_population() {
		let mut rng = StdRng::seed_from_u64(1);
		let mut state = BackgroundState::new(Theme::default(), 1920.0, 1080.0, &mut rng);
		let before = state.particles.particles.clone();

		state.resize(320.0, 240.0, &mut rng);

		assert_eq!(state.viewport, Viewport::new(320.0, 240.0));
		assert_eq!(state.particles.particles.len(), 80);
		assert_ne!(state.particles.particles, before);
		for p in &state.particles.particles {
			assert!((0.0..320.0).contains(&p.x));
			assert!((0.0..240.0).contains(&p.y));
		}
	}

	#[test]
	fn one_frame_without_pointer_moves_at_most_one_step() {
		let mut rng = StdRng::seed_from_u64(42);
		let mut state = BackgroundState::new(Theme::default(), 1000.0, 800.0, &mut rng);
		let before = state.particles.particles.clone();

		state.tick();

		assert_eq!(state.particles.particles.len(), 80);
		for (old, new) in before.iter().zip(&state.particles.particles) {
			assert!((new.x - old.x).abs() <= 0.15 + 1e-12);
			assert!((new.y - old.y).abs() <= 0.15 + 1e-12);
		}
	}

	#[test]
	fn pointer_on_particle_leaves_it_in_place() {
		let mut rng = StdRng::seed_from_u64(5);
		let mut state = BackgroundState::new(Theme::default(), 1000.0, 800.0, &mut rng);
		let target = &mut state.particles.particles[0];
		target.x = 400.0;
		target.y = 300.0;
		target.speed_x = 0.0;
		target.speed_y = 0.0;

		state.set_pointer(400.0, 300.0);
		state.tick();

		let p = &state.particles.particles[0];
		assert_eq!((p.x, p.y), (400.0, 300.0));
	}

	#[test]
	fn pointer_can_be_cleared() {
		let mut rng = StdRng::seed_from_u64(9);
		let mut state = BackgroundState::new(Theme::default(), 1000.0, 800.0, &mut rng);
		assert_eq!(state.pointer, None);

		state.set_pointer(10.0, 20.0);
		assert_eq!(state.pointer, Some(Pointer { x: 10.0, y: 20.0 }));

		state.clear_pointer();
		assert_eq!(state.pointer, None);
	}
}
