//! UI components.

pub mod geometric_background;
