//! Canvas rendering for the background.
//!
//! One frame is painted back to front:
//! 1. Diagonal gradient fill
//! 2. Rotating motifs
//! 3. Particles
//! 4. Proximity lines

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::links::visit_links;
use super::motifs::{MotifPose, poses};
use super::state::BackgroundState;

/// Paints a complete frame. `now_ms` drives the motif rotation.
pub fn render(state: &BackgroundState, ctx: &CanvasRenderingContext2d, now_ms: f64) {
	draw_background(state, ctx);
	draw_motifs(state, ctx, now_ms);
	draw_particles(state, ctx);
	// All lines go over all particles rather than after each particle's own pass.
	draw_links(state, ctx);
}

fn draw_background(state: &BackgroundState, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (state.viewport.width, state.viewport.height);
	let gradient = ctx.create_linear_gradient(0.0, 0.0, w, h);

	for (offset, color) in &state.theme.background.gradient {
		let _ = gradient.add_color_stop(*offset as f32, &color.to_css());
	}

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, w, h);
}

fn draw_motifs(state: &BackgroundState, ctx: &CanvasRenderingContext2d, now_ms: f64) {
	for pose in poses(&state.theme.motifs, state.viewport, now_ms) {
		draw_motif(ctx, &pose);
	}
}

fn draw_motif(ctx: &CanvasRenderingContext2d, pose: &MotifPose) {
	ctx.begin_path();

	let vertices = pose.vertices();
	if let Some((&(x0, y0), rest)) = vertices.split_first() {
		ctx.move_to(x0, y0);
		for &(x, y) in rest {
			ctx.line_to(x, y);
		}
		ctx.close_path();
	} else {
		let _ = ctx.arc(pose.x, pose.y, pose.size, 0.0, PI * 2.0);
	}

	ctx.set_stroke_style_str(&pose.color.to_css());
	ctx.set_line_width(pose.line_width);
	ctx.stroke();
}

fn draw_particles(state: &BackgroundState, ctx: &CanvasRenderingContext2d) {
	let style = &state.theme.particles;
	let (normal, accent) = (style.color.to_css(), style.accent_color.to_css());

	for p in &state.particles.particles {
		ctx.set_fill_style_str(if p.accent { &accent } else { &normal });
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_links(state: &BackgroundState, ctx: &CanvasRenderingContext2d) {
	let style = &state.theme.links;
	ctx.set_line_width(style.width);

	visit_links(&state.particles.particles, style, |p1, p2, alpha| {
		ctx.set_stroke_style_str(&style.color.with_alpha(alpha).to_css());
		ctx.begin_path();
		ctx.move_to(p1.x, p1.y);
		ctx.line_to(p2.x, p2.y);
		ctx.stroke();
	});
}
