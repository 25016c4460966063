//! Leptos component wrapping the background canvas.
//!
//! The component creates a fixed, full-window canvas and mounts the
//! simulation on it. Window listeners feed resize and pointer events into the
//! shared state, and an animation loop runs via `requestAnimationFrame`,
//! advancing the particles and repainting each frame.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::BackgroundState;
use super::theme::Theme;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

thread_local! {
	/// Live backgrounds keyed by component instance, torn down on cleanup.
	static MOUNTED: RefCell<HashMap<usize, BackgroundHandle>> = RefCell::new(HashMap::new());
	static NEXT_SLOT: Cell<usize> = const { Cell::new(0) };
}

struct Listener {
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

/// A background running on a canvas.
///
/// Owns the window listeners and the pending animation frame. Dropping the
/// handle (or calling [`BackgroundHandle::destroy`]) cancels the frame and
/// removes every listener.
pub struct BackgroundHandle {
	window: Window,
	state: Rc<RefCell<BackgroundState>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	frame_id: Rc<Cell<Option<i32>>>,
	listeners: Vec<Listener>,
}

impl BackgroundHandle {
	/// Stop the animation and detach from the window.
	pub fn destroy(self) {
		drop(self);
	}

	/// Inspect the current simulation state.
	pub fn with_state<T>(&self, f: impl FnOnce(&BackgroundState) -> T) -> T {
		f(&self.state.borrow())
	}

	fn listen(
		&mut self,
		event: &'static str,
		f: impl FnMut(Event) + 'static,
	) -> Result<(), JsValue> {
		let callback = Closure::<dyn FnMut(Event)>::new(f);
		self.window
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		self.listeners.push(Listener { event, callback });
		Ok(())
	}
}

impl Drop for BackgroundHandle {
	fn drop(&mut self) {
		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		for listener in &self.listeners {
			let _ = self.window.remove_event_listener_with_callback(
				listener.event,
				listener.callback.as_ref().unchecked_ref(),
			);
		}
		// The frame closure keeps a reference to its own slot.
		self.animate.borrow_mut().take();
	}
}

fn window_size(window: &Window) -> Result<(f64, f64), JsValue> {
	Ok((
		window.inner_width()?.as_f64().unwrap_or(0.0),
		window.inner_height()?.as_f64().unwrap_or(0.0),
	))
}

fn prefers_reduced_motion(window: &Window) -> bool {
	window
		.match_media(REDUCED_MOTION_QUERY)
		.ok()
		.flatten()
		.is_some_and(|query| query.matches())
}

/// Size `canvas` to the window and start the background on it.
///
/// When the user prefers reduced motion a single static frame is drawn and no
/// animation loop or pointer listener is installed; resizing repaints that
/// frame.
pub fn mount_background(
	canvas: &HtmlCanvasElement,
	theme: Theme,
) -> Result<BackgroundHandle, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
	mount(canvas, theme, prefers_reduced_motion(&window))
}

fn mount(
	canvas: &HtmlCanvasElement,
	theme: Theme,
	reduced_motion: bool,
) -> Result<BackgroundHandle, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
	let (w, h) = window_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("2d context unavailable"))?
		.dyn_into()?;

	let state = Rc::new(RefCell::new(BackgroundState::new(
		theme,
		w,
		h,
		&mut rand::thread_rng(),
	)));

	let mut handle = BackgroundHandle {
		window: window.clone(),
		state: state.clone(),
		animate: Rc::default(),
		frame_id: Rc::default(),
		listeners: Vec::new(),
	};

	let (state_resize, canvas_resize, ctx_resize) = (state.clone(), canvas.clone(), ctx.clone());
	handle.listen("resize", move |_| {
		let Some(win) = web_sys::window() else {
			return;
		};
		let Ok((nw, nh)) = window_size(&win) else {
			return;
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);

		let mut state = state_resize.borrow_mut();
		state.resize(nw, nh, &mut rand::thread_rng());
		if reduced_motion {
			render::render(&state, &ctx_resize, js_sys::Date::now());
		}
	})?;

	if reduced_motion {
		info!("portfolio-bg: reduced motion requested, drawing a static frame");
		render::render(&state.borrow(), &ctx, js_sys::Date::now());
		return Ok(handle);
	}

	let state_move = state.clone();
	handle.listen("mousemove", move |ev| {
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			state_move
				.borrow_mut()
				.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
		}
	})?;

	let state_out = state.clone();
	handle.listen("mouseout", move |ev| {
		// mouseout bubbles from every element; only leaving the document counts
		let left_window = ev
			.dyn_ref::<MouseEvent>()
			.is_none_or(|ev| ev.related_target().is_none());
		if left_window {
			state_out.borrow_mut().clear_pointer();
		}
	})?;

	let (state_anim, animate_inner, frame_inner) =
		(state.clone(), handle.animate.clone(), handle.frame_id.clone());
	*handle.animate.borrow_mut() = Some(Closure::new(move || {
		{
			let mut state = state_anim.borrow_mut();
			state.tick();
			render::render(&state, &ctx, js_sys::Date::now());
		}
		if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
			frame_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	}));

	let first_frame = {
		let animate = handle.animate.borrow();
		match animate.as_ref() {
			Some(cb) => Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?),
			None => None,
		}
	};
	handle.frame_id.set(first_frame);

	info!(
		"portfolio-bg: animating {} particles on a {}x{} canvas",
		state.borrow().particles.particles.len(),
		w,
		h
	);
	Ok(handle)
}

/// Mount unless disabled; failures are logged and leave the canvas inert.
fn start(canvas: &HtmlCanvasElement, theme: Theme, enabled: bool) -> Option<BackgroundHandle> {
	if !enabled {
		info!("portfolio-bg: disabled by the embedding page");
		return None;
	}
	mount_background(canvas, theme)
		.map_err(|e| warn!("portfolio-bg: background disabled: {:?}", e))
		.ok()
}

/// Renders the animated geometric background on a fixed, full-window canvas.
///
/// The canvas sits behind the page content and ignores pointer events;
/// pointer tracking happens on the window. Set `enabled = false` to render an
/// inert canvas without starting anything. If the canvas cannot be set up
/// the failure is logged and the page carries on without a background.
#[component]
pub fn GeometricBackground(
	#[prop(default = Theme::default())] theme: Theme,
	#[prop(default = true)] enabled: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let slot = NEXT_SLOT.with(|next| {
		let slot = next.get();
		next.set(slot + 1);
		slot
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		if let Some(handle) = start(&canvas, theme.clone(), enabled) {
			MOUNTED.with(|mounted| {
				mounted.borrow_mut().insert(slot, handle);
			});
		}
	});

	on_cleanup(move || {
		let handle = MOUNTED.with(|mounted| mounted.borrow_mut().remove(&slot));
		drop(handle);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="geometric-bg"
			class="geometric-bg"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -1; display: block; pointer-events: none;"
		/>
	}
}
