//! Result Layout WASM API
//!
//! This module provides the JavaScript-facing API of the attribute layout
//! engine.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error conversion and logging
//! - `layout`: Layout entry points

pub mod helpers;
pub mod layout;

pub use layout::{
    compute_attribute_layout, compute_attribute_layout_for_context, compute_display_list,
    display_list_for, layout_attributes, resolve_column_weight,
};
