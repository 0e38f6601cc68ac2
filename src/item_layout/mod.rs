//! Attribute Layout Engine
//!
//! This module decides, for every attribute of a search result item, its row,
//! column weight and visibility at the wide and narrow breakpoints, and turns
//! those decisions into a DisplayList for JavaScript to render.

pub mod weight;
pub mod assignment;
pub mod row_tracker;
pub mod engine;
pub mod slot;
pub mod display_list;

pub use weight::{resolve_weight, ColumnWeight};
pub use assignment::{AttributeAssignment, ItemLayout, SlotPlacement, SpacerAssignment};
pub use row_tracker::RowTracker;
pub use engine::{assign, layout, row_usage, AttributeLayoutEngine};
pub use slot::SlotStyleBuilder;
pub use display_list::{DisplayList, RenderSlot};
