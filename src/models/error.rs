//! Error types for the JavaScript boundary
//!
//! The layout engine itself is total. Only turning JavaScript input into typed
//! models, and the results back into JavaScript values, can fail.

use thiserror::Error;

/// A single attribute record could not be accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// Key absent or blank
    #[error("attribute at position {index} has no key")]
    MissingKey { index: usize },
}

/// Top-level error for a layout request
#[derive(Debug, Clone, Error)]
pub enum LayoutError {
    #[error("invalid attribute: {0}")]
    InvalidAttribute(#[from] AttributeError),

    /// Input could not be read from, or output written to, JavaScript
    #[error("serialization failed: {0}")]
    Serialization(String),
}
