//! Slot-level styling
//!
//! Translates layout decisions into the CSS classes the renderer applies:
//! an order class per breakpoint for the row, a span class for the column
//! weight, and a visibility class for overflow and hidden placements.

use crate::models::Breakpoint;
use super::assignment::{AttributeAssignment, ItemLayout, SlotPlacement, SpacerAssignment};
use super::display_list::{DisplayList, RenderSlot};

/// Builder for slot classes
pub struct SlotStyleBuilder;

impl SlotStyleBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the display list for a complete item layout
    pub fn build_display_list(&self, layout: &ItemLayout) -> DisplayList {
        let slots = layout
            .assignments
            .iter()
            .map(|assignment| self.build_render_slot(assignment))
            .collect();

        let has_overflow = layout.assignments.iter().any(|assignment| {
            Breakpoint::ALL.iter().any(|&breakpoint| {
                let placement = assignment.placement(breakpoint);
                placement.is_overflow() || !placement.is_visible()
            })
        });

        DisplayList {
            slots,
            spacer: layout.spacer.as_ref().map(|spacer| self.build_spacer(spacer)),
            has_overflow,
        }
    }

    pub fn build_render_slot(&self, assignment: &AttributeAssignment) -> RenderSlot {
        let mut classes = vec!["attr-slot".to_string()];
        for breakpoint in Breakpoint::ALL {
            self.push_placement_classes(&mut classes, breakpoint, assignment.placement(breakpoint));
        }

        RenderSlot {
            key: Some(assignment.key.clone()),
            classes,
        }
    }

    pub fn build_spacer(&self, spacer: &SpacerAssignment) -> RenderSlot {
        let mut classes = vec!["attr-slot".to_string(), "attr-spacer".to_string()];
        for breakpoint in Breakpoint::ALL {
            let bp = breakpoint.as_str();
            match spacer.weight(breakpoint) {
                Some(weight) => {
                    classes.push(format!("attr-order-{}-0", bp));
                    classes.push(format!("attr-span-{}-{}", bp, weight));
                }
                None => classes.push(format!("attr-hidden-{}", bp)),
            }
        }

        RenderSlot { key: None, classes }
    }

    fn push_placement_classes(
        &self,
        classes: &mut Vec<String>,
        breakpoint: Breakpoint,
        placement: SlotPlacement,
    ) {
        let bp = breakpoint.as_str();
        match placement {
            SlotPlacement::Row { row, weight } => {
                classes.push(format!("attr-order-{}-{}", bp, row));
                classes.push(format!("attr-span-{}-{}", bp, weight));
            }
            SlotPlacement::Overflow { row, weight } => {
                classes.push(format!("attr-order-{}-{}", bp, row));
                classes.push(format!("attr-span-{}-{}", bp, weight));
                classes.push(format!("attr-overflow-{}", bp));
            }
            SlotPlacement::Hidden => classes.push(format!("attr-hidden-{}", bp)),
        }
    }
}

impl Default for SlotStyleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
