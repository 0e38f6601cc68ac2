//! Responsive breakpoints and their grid geometry

use serde::{Deserialize, Serialize};

/// Rows and columns of the default grid at the wide breakpoint
pub const WIDE_COLUMNS: usize = 4;
pub const WIDE_ROWS: usize = 3;

/// Rows and columns of the default grid at the narrow breakpoint
pub const NARROW_COLUMNS: usize = 3;
pub const NARROW_ROWS: usize = 4;

/// The document variant uses the same small grid at both breakpoints
pub const DOCUMENT_COLUMNS: usize = 2;
pub const DOCUMENT_ROWS: usize = 2;

pub const DEFAULT_OVERFLOW_ALLOWANCE: usize = 2;
pub const DOCUMENT_OVERFLOW_ALLOWANCE: usize = 4;

/// One of the two independent responsive layout contexts
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Breakpoint {
    /// Desktop
    Wide,
    /// Tablet
    Narrow,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 2] = [Breakpoint::Wide, Breakpoint::Narrow];

    /// Name used in CSS class suffixes and log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Wide => "wide",
            Breakpoint::Narrow => "narrow",
        }
    }
}

/// Fixed grid geometry for one breakpoint
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointPlan {
    pub columns: usize,
    pub rows: usize,

    /// Extra why-found attributes that may be forced into view once the
    /// ordinary rows are full
    pub overflow_allowance: usize,
}

impl BreakpointPlan {
    pub fn for_breakpoint(breakpoint: Breakpoint, is_document_variant: bool) -> Self {
        if is_document_variant {
            return Self {
                columns: DOCUMENT_COLUMNS,
                rows: DOCUMENT_ROWS,
                overflow_allowance: DOCUMENT_OVERFLOW_ALLOWANCE,
            };
        }

        match breakpoint {
            Breakpoint::Wide => Self {
                columns: WIDE_COLUMNS,
                rows: WIDE_ROWS,
                overflow_allowance: DEFAULT_OVERFLOW_ALLOWANCE,
            },
            Breakpoint::Narrow => Self {
                columns: NARROW_COLUMNS,
                rows: NARROW_ROWS,
                overflow_allowance: DEFAULT_OVERFLOW_ALLOWANCE,
            },
        }
    }
}
