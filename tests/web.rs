//! Browser smoke tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use portfolio_bg::components::geometric_background::render_frame;
use portfolio_bg::{BackgroundState, Theme, mount_background};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
	let document = web_sys::window().unwrap().document().unwrap();
	let canvas: HtmlCanvasElement = document
		.create_element("canvas")
		.unwrap()
		.dyn_into()
		.unwrap();
	document.body().unwrap().append_child(&canvas).unwrap();
	canvas
}

#[wasm_bindgen_test]
fn renders_a_frame() {
	let canvas = canvas();
	canvas.set_width(400);
	canvas.set_height(300);
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();

	let mut rng = StdRng::seed_from_u64(1);
	let mut state = BackgroundState::new(Theme::default(), 400.0, 300.0, &mut rng);
	state.set_pointer(200.0, 150.0);
	state.tick();
	render_frame(&state, &ctx, 1_000.0);

	// Corner pixel is covered by the gradient's first stop.
	let pixel = ctx.get_image_data(0.0, 0.0, 1.0, 1.0).unwrap().data();
	assert_eq!(pixel[3], 255);
}

#[wasm_bindgen_test]
fn mount_sizes_canvas_to_window() {
	let canvas = canvas();
	let handle = mount_background(&canvas, Theme::default()).unwrap();

	let window = web_sys::window().unwrap();
	let width = window.inner_width().unwrap().as_f64().unwrap();
	assert_eq!(canvas.width(), width as u32);
	assert_eq!(handle.with_state(|s| s.particles.particles.len()), 80);

	handle.destroy();
}
