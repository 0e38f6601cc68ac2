//! Display List for attribute rendering
//!
//! This module defines the structure returned to JavaScript. It carries the
//! CSS classes the renderer applies to each attribute cell, so JavaScript does
//! no layout decisions of its own.

use serde::{Deserialize, Serialize};

/// Everything the renderer needs to lay out one result item's attributes
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    /// One entry per assignment, in input order
    pub slots: Vec<RenderSlot>,

    /// Row-0 placeholder next to the image
    pub spacer: Option<RenderSlot>,

    /// Some attribute is hidden or only shown as overflow at some breakpoint;
    /// the expand/collapse control is needed
    pub has_overflow: bool,
}

/// A single grid cell with its classes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderSlot {
    /// Attribute key; `None` for the spacer
    pub key: Option<String>,

    /// CSS classes for ordering, column span and visibility
    pub classes: Vec<String>,
}

impl RenderSlot {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
