//! Result-item attributes
//!
//! An attribute is one labelled value attached to a search result entry.
//! JavaScript hands attributes over as loosely-typed records (`RawAttribute`);
//! they are checked once here and turned into the strict `Attribute` the
//! layout engine works with.

use serde::{Deserialize, Serialize};

use super::error::AttributeError;
use crate::utils::text::raw_value_length;

/// A single attribute of a result item, ready for layout
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Stable identity, unique within one result item
    pub key: String,

    /// Display label (opaque to layout)
    pub label: String,

    /// Display value, possibly containing highlight markup (opaque to layout)
    pub value: String,

    /// Title attributes are rendered in the item header, never in the grid
    pub is_title: bool,

    /// Long text may span several grid columns
    pub is_long_text: bool,

    /// Character length of the non-highlighted value.
    /// Signed so that bad input survives conversion; negatives count as 0.
    pub value_length: i64,

    /// The value matched the search query
    pub is_why_found: bool,
}

impl Attribute {
    /// Create a plain short-text attribute
    pub fn new(key: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value: value.into(),
            is_title: false,
            is_long_text: false,
            value_length: 0,
            is_why_found: false,
        }
    }

    /// Mark as long text with the given raw value length
    pub fn long_text(mut self, value_length: i64) -> Self {
        self.is_long_text = true;
        self.value_length = value_length;
        self
    }

    pub fn why_found(mut self) -> Self {
        self.is_why_found = true;
        self
    }

    pub fn title(mut self) -> Self {
        self.is_title = true;
        self
    }
}

/// Attribute record as it arrives from JavaScript
///
/// Every field except `key` may be missing. Booleans default to false.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAttribute {
    pub key: Option<String>,
    pub label: Option<String>,
    pub value: Option<String>,
    pub is_title: bool,
    pub is_long_text: bool,
    pub value_length: Option<i64>,
    pub is_why_found: bool,
}

impl RawAttribute {
    /// Validate and convert into an `Attribute`
    ///
    /// `index` is the position in the incoming list and only used for error
    /// reporting. A long-text attribute without an explicit length gets one
    /// measured from its value.
    pub fn into_attribute(self, index: usize) -> Result<Attribute, AttributeError> {
        let key = match self.key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(AttributeError::MissingKey { index }),
        };

        let value = self.value.unwrap_or_default();
        let value_length = match self.value_length {
            Some(length) => length,
            None if self.is_long_text => {
                i64::try_from(raw_value_length(&value)).unwrap_or(i64::MAX)
            }
            None => 0,
        };

        Ok(Attribute {
            key,
            label: self.label.unwrap_or_default(),
            value,
            is_title: self.is_title,
            is_long_text: self.is_long_text,
            value_length,
            is_why_found: self.is_why_found,
        })
    }
}

/// Convert a whole incoming list, stopping at the first invalid record
pub fn validate_attributes(raw: Vec<RawAttribute>) -> Result<Vec<Attribute>, AttributeError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, attribute)| attribute.into_attribute(index))
        .collect()
}
