//! Models module for the result layout engine
//!
//! This module contains the typed attribute, configuration and breakpoint
//! structures shared by the layout engine and the WASM API.

pub mod attribute;
pub mod breakpoint;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use attribute::{validate_attributes, Attribute, RawAttribute};
pub use breakpoint::{Breakpoint, BreakpointPlan};
pub use config::{ImageFormat, LayoutConfig, PresentationMode, ResultItemContext, DOCUMENT_ATTRIBUTE_CAP};
pub use error::{AttributeError, LayoutError};
