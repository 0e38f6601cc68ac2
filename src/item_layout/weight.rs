//! Column weights for attribute values
//!
//! Short attributes take one grid column. Long text grows with the length of
//! its plain value, up to 4 columns wide and 3 columns narrow.

use serde::{Deserialize, Serialize};

/// Columns consumed at each breakpoint
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnWeight {
    pub wide: usize,
    pub narrow: usize,
}

impl ColumnWeight {
    pub const SINGLE: ColumnWeight = ColumnWeight { wide: 1, narrow: 1 };
}

/// Minimum value length for each long-text weight, longest first
const LONG_TEXT_WEIGHTS: [(i64, ColumnWeight); 3] = [
    (135, ColumnWeight { wide: 4, narrow: 3 }),
    (85, ColumnWeight { wide: 3, narrow: 3 }),
    (50, ColumnWeight { wide: 2, narrow: 2 }),
];

/// Resolve the column weight of an attribute
///
/// Total over its inputs: negative lengths fall into the shortest bucket.
pub fn resolve_weight(is_long_text: bool, value_length: i64) -> ColumnWeight {
    if !is_long_text {
        return ColumnWeight::SINGLE;
    }

    LONG_TEXT_WEIGHTS
        .iter()
        .find(|(min_length, _)| value_length >= *min_length)
        .map(|(_, weight)| *weight)
        .unwrap_or(ColumnWeight::SINGLE)
}
