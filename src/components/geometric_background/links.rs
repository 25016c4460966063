//! Proximity lines between nearby particles.
//!
//! The graph is implicit: it is rebuilt from current positions on every
//! frame and never cached.

use super::particles::Particle;
use super::theme::LinkStyle;

/// Line alpha for two particles `distance` pixels apart, or `None` when they
/// are too far apart to be connected.
///
/// Fades linearly from `style.opacity` at distance 0 to nothing at
/// `style.distance`.
pub fn link_alpha(distance: f64, style: &LinkStyle) -> Option<f64> {
	if distance < style.distance {
		Some((1.0 - distance / style.distance) * style.opacity)
	} else {
		None
	}
}

/// Visit every connected pair `(i, j)` with `i < j` exactly once, passing the
/// two particles and the line alpha.
pub fn visit_links<F>(particles: &[Particle], style: &LinkStyle, mut f: F)
where
	F: FnMut(&Particle, &Particle, f64),
{
	for (i, p1) in particles.iter().enumerate() {
		for p2 in &particles[i + 1..] {
			let (dx, dy) = (p1.x - p2.x, p1.y - p2.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if let Some(alpha) = link_alpha(distance, style) {
				f(p1, p2, alpha);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			size: 1.0,
			speed_x: 0.0,
			speed_y: 0.0,
			accent: false,
		}
	}

	#[test]
	fn coincident_particles_get_full_opacity() {
		assert_eq!(link_alpha(0.0, &LinkStyle::default()), Some(0.15));
	}

	#[test]
	fn alpha_fades_linearly() {
		let alpha = link_alpha(75.0, &LinkStyle::default()).unwrap();
		assert!((alpha - 0.075).abs() < 1e-12);
	}

	#[test]
	fn threshold_is_exclusive() {
		let style = LinkStyle::default();
		assert_eq!(link_alpha(150.0, &style), None);
		assert_eq!(link_alpha(400.0, &style), None);
		assert!(link_alpha(149.999, &style).is_some());
	}

	#[test]
	fn each_pair_visited_once_in_order() {
		let particles = [at(0.0, 0.0), at(100.0, 0.0), at(200.0, 0.0), at(90.0, 120.0)];
		let mut seen = Vec::new();
		visit_links(&particles, &LinkStyle::default(), |a, b, _| {
			seen.push(((a.x, a.y), (b.x, b.y)));
		});

		// 0-2 (200) and 0-3 (exactly 150) and 2-3 (~162.8) are out of range
		assert_eq!(
			seen,
			vec![
				((0.0, 0.0), (100.0, 0.0)),
				((100.0, 0.0), (200.0, 0.0)),
				((100.0, 0.0), (90.0, 120.0)),
			]
		);
	}

	#[test]
	fn empty_and_single_populations() {
		let mut count = 0;
		visit_links(&[], &LinkStyle::default(), |_, _, _| count += 1);
		visit_links(&[at(1.0, 1.0)], &LinkStyle::default(), |_, _, _| count += 1);
		assert_eq!(count, 0);
	}
}
