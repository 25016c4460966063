//! portfolio-bg: animated geometric background for a personal portfolio site.
//!
//! This crate provides a WASM canvas component that draws drifting,
//! pointer-aware particles linked into a constellation, over slowly rotating
//! translucent shapes.

// Enables the browser entropy source that `rand` needs on wasm32.
use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};
#[cfg(test)]
use wasm_bindgen_test as _;

pub mod components;

pub use components::geometric_background::{
	BackgroundHandle, BackgroundState, GeometricBackground, Theme, mount_background,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-bg: logging initialized");
}

/// Load theme overrides from a script element with id="background-config".
/// Expected format: JSON matching [`Theme`]; omitted fields keep their defaults.
fn load_theme() -> Option<Theme> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("background-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match Theme::from_json(&json_text) {
		Ok(theme) => {
			info!(
				"portfolio-bg: loaded theme overrides ({} particles, {} motifs)",
				theme.particles.count,
				theme.motifs.motifs.len()
			);
			Some(theme)
		}
		Err(e) => {
			warn!("portfolio-bg: failed to parse background config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads theme overrides from the DOM and mounts the background behind the page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let theme = load_theme().unwrap_or_default();

	view! {
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<GeometricBackground theme=theme />
	}
}
