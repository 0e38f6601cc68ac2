//! Result Layout WASM Module
//!
//! Lays out the attributes of a search result list item on a responsive grid.
//! For every attribute it decides the row, column span and visibility at a
//! wide and a narrow breakpoint, keeping search-matched attributes visible
//! through a small overflow allowance when the grid is full.

pub mod models;
pub mod item_layout;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use item_layout::{assign, layout, AttributeAssignment, AttributeLayoutEngine, ItemLayout, SlotPlacement};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();
    log::info!("Result layout WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    console_log::init_with_level(log::Level::Debug).ok();
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
