//! Slot assignment for result-item attributes
//!
//! This module contains the main entry point for attribute layout: it walks
//! the attribute list once, in order, and decides row, column weight and
//! visibility for every attribute at the wide and narrow breakpoints.

use crate::models::{Attribute, Breakpoint, LayoutConfig};
use super::assignment::{AttributeAssignment, ItemLayout, SlotPlacement, SpacerAssignment};
use super::row_tracker::RowTracker;
use super::weight::resolve_weight;

/// Layout engine for one configuration
pub struct AttributeLayoutEngine {
    config: LayoutConfig,
}

impl AttributeLayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Compute the complete layout for one result item
    ///
    /// Title attributes never get an assignment. Under the document variant
    /// the walk stops once the attribute cap is reached and later attributes
    /// get no assignment at all. Otherwise every remaining attribute gets one,
    /// possibly hidden at both breakpoints.
    pub fn compute_layout(&self, attributes: &[Attribute]) -> ItemLayout {
        let config = &self.config;
        let mut wide = RowTracker::new(
            Breakpoint::Wide,
            config.plan(Breakpoint::Wide),
            config.include_image_slot,
        );
        let mut narrow = RowTracker::new(
            Breakpoint::Narrow,
            config.plan(Breakpoint::Narrow),
            config.include_image_slot,
        );

        let mut candidates = attributes.iter().filter(|attribute| self.is_candidate(attribute));
        let mut assignments = Vec::new();
        let mut placed = 0;

        while let Some(attribute) = candidates.next() {
            if wide.is_exhausted() && narrow.is_exhausted() {
                log::debug!("grid and overflow exhausted at both breakpoints, hiding the rest");
                assignments.push(AttributeAssignment::hidden(attribute.key.as_str()));
                assignments.extend(
                    candidates
                        .by_ref()
                        .map(|rest| AttributeAssignment::hidden(rest.key.as_str())),
                );
                break;
            }

            let weight = resolve_weight(attribute.is_long_text, attribute.value_length);
            let assignment = AttributeAssignment {
                key: attribute.key.clone(),
                wide: wide.place(attribute, weight.wide),
                narrow: narrow.place(attribute, weight.narrow),
            };

            if assignment.is_placed() {
                placed += 1;
            }
            assignments.push(assignment);

            if let Some(cap) = config.attribute_cap() {
                if placed >= cap {
                    log::debug!("document attribute cap of {} reached", cap);
                    break;
                }
            }
        }

        let spacer = self.spacer(&wide, &narrow);

        log::debug!(
            "laid out {} attributes ({} placed, spacer: {})",
            assignments.len(),
            placed,
            spacer.is_some()
        );

        ItemLayout { assignments, spacer }
    }

    fn is_candidate(&self, attribute: &Attribute) -> bool {
        if attribute.is_title {
            return false;
        }
        !self.config.restrict_to_highlighted_only || attribute.is_why_found
    }

    /// Fill what is left of the image row so row 0 stays balanced
    fn spacer(&self, wide: &RowTracker, narrow: &RowTracker) -> Option<SpacerAssignment> {
        if !self.config.include_image_slot {
            return None;
        }

        let spacer = SpacerAssignment {
            weight_wide: wide.image_row_leftover(),
            weight_narrow: narrow.image_row_leftover(),
        };
        (spacer.weight_wide.is_some() || spacer.weight_narrow.is_some()).then_some(spacer)
    }
}

/// Lay out `attributes` and return one assignment per visited attribute
pub fn assign(attributes: &[Attribute], config: &LayoutConfig) -> Vec<AttributeAssignment> {
    AttributeLayoutEngine::new(*config).compute_layout(attributes).assignments
}

/// Lay out `attributes` including the row-0 spacer
pub fn layout(attributes: &[Attribute], config: &LayoutConfig) -> ItemLayout {
    AttributeLayoutEngine::new(*config).compute_layout(attributes)
}

/// Sum of ordinary weights per row at one breakpoint
pub fn row_usage(assignments: &[AttributeAssignment], breakpoint: Breakpoint, rows: usize) -> Vec<usize> {
    let mut usage = vec![0; rows];
    for assignment in assignments {
        if let SlotPlacement::Row { row, weight } = assignment.placement(breakpoint) {
            if let Some(used) = usage.get_mut(row) {
                *used += weight;
            }
        }
    }
    usage
}
