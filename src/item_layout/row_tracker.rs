//! Per-breakpoint row capacity bookkeeping
//!
//! One `RowTracker` exists for each breakpoint. Trackers share nothing, so
//! the wide and narrow grids fill independently.

use crate::models::{Attribute, Breakpoint, BreakpointPlan};
use super::assignment::SlotPlacement;

/// Column units the image takes from row 0
pub const IMAGE_SLOT_UNITS: usize = 1;

/// Mutable grid state for one breakpoint during one layout call
#[derive(Clone, Debug)]
pub struct RowTracker {
    breakpoint: Breakpoint,
    plan: BreakpointPlan,

    /// Remaining column units per row
    row_remaining: Vec<usize>,

    overflow_remaining: usize,

    /// Whether row 0 holds the image reservation
    has_image: bool,

    /// The first long-text attribute has had its chance to share row 0
    long_text_shared: bool,
}

impl RowTracker {
    pub fn new(breakpoint: Breakpoint, plan: BreakpointPlan, include_image_slot: bool) -> Self {
        let mut row_remaining = vec![plan.columns; plan.rows];
        if include_image_slot {
            if let Some(first) = row_remaining.first_mut() {
                *first = first.saturating_sub(IMAGE_SLOT_UNITS);
            }
        }

        Self {
            breakpoint,
            plan,
            row_remaining,
            overflow_remaining: plan.overflow_allowance,
            has_image: include_image_slot,
            long_text_shared: false,
        }
    }

    pub fn row_remaining(&self) -> &[usize] {
        &self.row_remaining
    }

    /// No further attribute can become visible at this breakpoint
    pub fn is_exhausted(&self) -> bool {
        self.overflow_remaining == 0 && self.row_remaining.iter().all(|&units| units == 0)
    }

    /// Place one attribute with its resolved weight
    ///
    /// A weight wider than every row never gets an ordinary placement.
    pub fn place(&mut self, attribute: &Attribute, weight: usize) -> SlotPlacement {
        if let Some(placement) = self.try_share_image_row(attribute, weight) {
            return placement;
        }

        if let Some(placement) = self.first_fit(weight) {
            return placement;
        }

        if attribute.is_why_found && self.overflow_remaining > 0 {
            self.overflow_remaining -= 1;
            log::trace!(
                "{}: '{}' placed as overflow ({} left)",
                self.breakpoint.as_str(),
                attribute.key,
                self.overflow_remaining
            );
            return SlotPlacement::Overflow {
                row: self.plan.rows,
                weight,
            };
        }

        log::trace!("{}: '{}' hidden", self.breakpoint.as_str(), attribute.key);
        SlotPlacement::Hidden
    }

    /// The first long-text attribute may sit beside the image in row 0
    fn try_share_image_row(&mut self, attribute: &Attribute, weight: usize) -> Option<SlotPlacement> {
        if !self.has_image || !attribute.is_long_text || self.long_text_shared {
            return None;
        }
        if self.row_remaining.first().copied().unwrap_or(0) == 0 {
            return None;
        }

        // First long text wins even if it does not fit beside the image
        self.long_text_shared = true;

        let shared_weight = weight.min(self.plan.columns.saturating_sub(IMAGE_SLOT_UNITS)).max(1);
        let first = self.row_remaining.first_mut()?;
        if *first < shared_weight {
            return None;
        }
        *first -= shared_weight;

        log::trace!(
            "{}: '{}' shares row 0 with the image (weight {})",
            self.breakpoint.as_str(),
            attribute.key,
            shared_weight
        );
        Some(SlotPlacement::Row {
            row: 0,
            weight: shared_weight,
        })
    }

    fn first_fit(&mut self, weight: usize) -> Option<SlotPlacement> {
        let (row, remaining) = self
            .row_remaining
            .iter_mut()
            .enumerate()
            .find(|(_, remaining)| **remaining >= weight)?;
        *remaining -= weight;
        Some(SlotPlacement::Row { row, weight })
    }

    /// Free column units left in the image row, if an image is present
    pub fn image_row_leftover(&self) -> Option<usize> {
        if !self.has_image {
            return None;
        }
        self.row_remaining.first().copied().filter(|&units| units > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(include_image_slot: bool) -> RowTracker {
        RowTracker::new(
            Breakpoint::Wide,
            BreakpointPlan::for_breakpoint(Breakpoint::Wide, false),
            include_image_slot,
        )
    }

    #[test]
    fn test_image_reserves_one_unit() {
        assert_eq!(wide(true).row_remaining(), &[3, 4, 4]);
        assert_eq!(wide(false).row_remaining(), &[4, 4, 4]);
    }

    #[test]
    fn test_first_fit_skips_full_rows() {
        let mut tracker = wide(false);
        let attribute = Attribute::new("A", "A", "a");
        assert_eq!(tracker.place(&attribute, 3), SlotPlacement::Row { row: 0, weight: 3 });
        assert_eq!(tracker.place(&attribute, 2), SlotPlacement::Row { row: 1, weight: 2 });
        assert_eq!(tracker.place(&attribute, 1), SlotPlacement::Row { row: 0, weight: 1 });
        assert_eq!(tracker.row_remaining(), &[0, 2, 4]);
    }

    #[test]
    fn test_overflow_only_for_why_found() {
        let mut tracker = wide(false);
        let plain = Attribute::new("P", "P", "p");
        for _ in 0..12 {
            assert!(!tracker.place(&plain, 1).is_overflow());
        }
        assert_eq!(tracker.place(&plain, 1), SlotPlacement::Hidden);

        let found = Attribute::new("F", "F", "f").why_found();
        assert_eq!(tracker.place(&found, 1), SlotPlacement::Overflow { row: 3, weight: 1 });
        assert_eq!(tracker.place(&found, 1), SlotPlacement::Overflow { row: 3, weight: 1 });
        assert!(tracker.is_exhausted());
        assert_eq!(tracker.place(&found, 1), SlotPlacement::Hidden);
    }

    #[test]
    fn test_long_text_shares_image_row_once() {
        let mut tracker = wide(true);
        let long = Attribute::new("L", "L", "l").long_text(140);
        assert_eq!(tracker.place(&long, 4), SlotPlacement::Row { row: 0, weight: 3 });
        assert_eq!(tracker.image_row_leftover(), None);

        // Second long text goes through first fit
        assert_eq!(tracker.place(&long, 4), SlotPlacement::Row { row: 1, weight: 4 });
    }

    #[test]
    fn test_first_long_text_not_fitting_beside_image_uses_first_fit() {
        let mut tracker = wide(true);
        let short = Attribute::new("S", "S", "s");
        tracker.place(&short, 1);
        tracker.place(&short, 1);
        let long = Attribute::new("L", "L", "l").long_text(90);
        assert_eq!(tracker.place(&long, 3), SlotPlacement::Row { row: 1, weight: 3 });

        // The exception is spent; a later one-column long text also uses first fit
        let small_long = Attribute::new("M", "M", "m").long_text(10);
        assert_eq!(tracker.place(&small_long, 1), SlotPlacement::Row { row: 0, weight: 1 });
    }

    #[test]
    fn test_weight_wider_than_grid_never_fits_a_row() {
        let mut tracker = RowTracker::new(
            Breakpoint::Wide,
            BreakpointPlan::for_breakpoint(Breakpoint::Wide, true),
            false,
        );
        let long = Attribute::new("L", "L", "l").long_text(200);
        assert_eq!(tracker.place(&long, 4), SlotPlacement::Hidden);
        assert_eq!(tracker.row_remaining(), &[2, 2]);

        let found = Attribute::new("F", "F", "f").long_text(100).why_found();
        assert_eq!(tracker.place(&found, 3), SlotPlacement::Overflow { row: 2, weight: 3 });
        assert_eq!(tracker.row_remaining(), &[2, 2]);
    }
}
