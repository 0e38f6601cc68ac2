//! Utility modules for the result layout engine

pub mod text;

// Re-export commonly used functions
pub use text::raw_value_length;
