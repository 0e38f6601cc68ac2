//! Layout results handed to the renderer

use serde::{Deserialize, Serialize};

use crate::models::Breakpoint;

/// Where an attribute ended up at one breakpoint
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlotPlacement {
    /// Ordinary placement inside the grid
    Row { row: usize, weight: usize },

    /// Forced into view by the why-found allowance.
    /// `row` is one past the last grid row.
    Overflow { row: usize, weight: usize },

    Hidden,
}

impl SlotPlacement {
    pub fn row(&self) -> Option<usize> {
        match self {
            SlotPlacement::Row { row, .. } | SlotPlacement::Overflow { row, .. } => Some(*row),
            SlotPlacement::Hidden => None,
        }
    }

    pub fn weight(&self) -> Option<usize> {
        match self {
            SlotPlacement::Row { weight, .. } | SlotPlacement::Overflow { weight, .. } => {
                Some(*weight)
            }
            SlotPlacement::Hidden => None,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, SlotPlacement::Overflow { .. })
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, SlotPlacement::Hidden)
    }
}

/// Layout decision for one attribute at both breakpoints
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AttributeAssignment {
    /// Key of the attribute this decision belongs to
    pub key: String,
    pub wide: SlotPlacement,
    pub narrow: SlotPlacement,
}

impl AttributeAssignment {
    pub fn hidden(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            wide: SlotPlacement::Hidden,
            narrow: SlotPlacement::Hidden,
        }
    }

    pub fn placement(&self, breakpoint: Breakpoint) -> SlotPlacement {
        match breakpoint {
            Breakpoint::Wide => self.wide,
            Breakpoint::Narrow => self.narrow,
        }
    }

    pub fn row_wide(&self) -> Option<usize> {
        self.wide.row()
    }

    pub fn row_narrow(&self) -> Option<usize> {
        self.narrow.row()
    }

    pub fn weight_wide(&self) -> Option<usize> {
        self.wide.weight()
    }

    pub fn weight_narrow(&self) -> Option<usize> {
        self.narrow.weight()
    }

    pub fn is_overflow_wide(&self) -> bool {
        self.wide.is_overflow()
    }

    pub fn is_overflow_narrow(&self) -> bool {
        self.narrow.is_overflow()
    }

    /// Visible at at least one breakpoint
    pub fn is_placed(&self) -> bool {
        self.wide.is_visible() || self.narrow.is_visible()
    }
}

/// Placeholder filling what the image and attributes left of row 0
///
/// Carries no attribute identity. `None` means row 0 is already full at
/// that breakpoint.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpacerAssignment {
    pub weight_wide: Option<usize>,
    pub weight_narrow: Option<usize>,
}

impl SpacerAssignment {
    pub fn weight(&self, breakpoint: Breakpoint) -> Option<usize> {
        match breakpoint {
            Breakpoint::Wide => self.weight_wide,
            Breakpoint::Narrow => self.weight_narrow,
        }
    }
}

/// Complete layout of one result item
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemLayout {
    /// In input order, one per visited non-title attribute
    pub assignments: Vec<AttributeAssignment>,

    pub spacer: Option<SpacerAssignment>,
}

impl ItemLayout {
    pub fn get(&self, key: &str) -> Option<&AttributeAssignment> {
        self.assignments.iter().find(|assignment| assignment.key == key)
    }

    pub fn overflow_count(&self, breakpoint: Breakpoint) -> usize {
        self.assignments
            .iter()
            .filter(|assignment| assignment.placement(breakpoint).is_overflow())
            .count()
    }
}
