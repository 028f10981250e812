//! Terminal "Yes / No" question that celebrates a yes with looping fireworks.

use std::sync::OnceLock;

pub mod canvas;
pub mod cli;
pub mod effects;
pub mod error;
pub mod timer;

pub use error::{Error, Result};

static BG_COLOR: OnceLock<(u8, u8, u8)> = OnceLock::new();

/// Sets the background once at startup; later calls are ignored.
pub fn set_bg_color(color: (u8, u8, u8)) {
    let _ = BG_COLOR.set(color);
}

/// Background color for the canvas, black unless set at startup.
pub fn get_bg_color() -> (u8, u8, u8) {
    *BG_COLOR.get().unwrap_or(&(0, 0, 0))
}
