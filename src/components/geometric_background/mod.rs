//! Animated geometric background.
//!
//! Renders the portfolio's decorative backdrop on a full-window canvas:
//! - Drifting particles that bounce off the window edges and shy away from the pointer
//! - Faded "constellation" lines between particles that are close together
//! - Slowly rotating translucent hexagons, triangles and circles over a gradient
//!
//! The simulation (`particles`, `links`, `motifs`, `state`) is plain Rust and
//! independent of the browser; `component` and the renderer tie it to a
//! canvas and the window.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_bg::GeometricBackground;
//!
//! view! { <GeometricBackground /> }
//! ```

mod component;
pub mod links;
pub mod motifs;
pub mod particles;
mod render;
pub mod state;
pub mod theme;
pub mod types;

pub use component::{BackgroundHandle, GeometricBackground, mount_background};
pub use render::render as render_frame;
pub use state::BackgroundState;
pub use theme::Theme;
