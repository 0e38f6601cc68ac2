//! Layout configuration and its derivation from the result item

use serde::{Deserialize, Serialize};

use super::breakpoint::{Breakpoint, BreakpointPlan};

/// The document variant stops laying out after this many visible attributes
pub const DOCUMENT_ATTRIBUTE_CAP: usize = 4;

/// Per-render layout switches, constant for one invocation
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Use the 2-column document grid instead of the default 4/3-column grid
    pub is_document_variant: bool,

    /// An externally rendered image takes one column unit of row 0
    pub include_image_slot: bool,

    /// Only why-found attributes are laid out (value-help presentation)
    pub restrict_to_highlighted_only: bool,
}

impl LayoutConfig {
    /// Derive the switches from what the result item looks like
    pub fn from_context(context: &ResultItemContext) -> Self {
        let is_document_variant = context.image_format == ImageFormat::DocumentThumbnail;
        let has_image = context
            .image_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());

        Self {
            is_document_variant,
            // The document thumbnail sits outside the attribute grid
            include_image_slot: has_image && !is_document_variant,
            restrict_to_highlighted_only: context.presentation == PresentationMode::ValueHelp,
        }
    }

    pub fn plan(&self, breakpoint: Breakpoint) -> BreakpointPlan {
        BreakpointPlan::for_breakpoint(breakpoint, self.is_document_variant)
    }

    /// Hard limit on visible attributes, if the variant has one
    pub fn attribute_cap(&self) -> Option<usize> {
        self.is_document_variant.then_some(DOCUMENT_ATTRIBUTE_CAP)
    }
}

/// How the result item presents its image
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ImageFormat {
    Round,
    #[default]
    Square,
    DocumentThumbnail,
}

/// Where the result list is shown
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PresentationMode {
    #[default]
    Standard,
    /// Compact value-help dialog: only matching attributes are shown
    ValueHelp,
}

/// The parts of a result item that decide the layout mode
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultItemContext {
    pub image_url: Option<String>,
    pub image_format: ImageFormat,
    pub presentation: PresentationMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_gives_default_config() {
        let config = LayoutConfig::from_context(&ResultItemContext::default());
        assert_eq!(config, LayoutConfig::default());
        assert_eq!(config.attribute_cap(), None);
    }

    #[test]
    fn test_image_url_reserves_slot() {
        let context = ResultItemContext {
            image_url: Some("/img/product.png".to_string()),
            ..Default::default()
        };
        let config = LayoutConfig::from_context(&context);
        assert!(config.include_image_slot);
        assert!(!config.is_document_variant);
    }

    #[test]
    fn test_blank_image_url_is_ignored() {
        let context = ResultItemContext {
            image_url: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(!LayoutConfig::from_context(&context).include_image_slot);
    }

    #[test]
    fn test_document_thumbnail_selects_document_variant() {
        let context = ResultItemContext {
            image_url: Some("/thumbs/report.pdf.png".to_string()),
            image_format: ImageFormat::DocumentThumbnail,
            ..Default::default()
        };
        let config = LayoutConfig::from_context(&context);
        assert!(config.is_document_variant);
        assert!(!config.include_image_slot);
        assert_eq!(config.attribute_cap(), Some(DOCUMENT_ATTRIBUTE_CAP));
        assert_eq!(config.plan(Breakpoint::Wide).columns, 2);
    }

    #[test]
    fn test_value_help_restricts_to_highlighted() {
        let context = ResultItemContext {
            presentation: PresentationMode::ValueHelp,
            ..Default::default()
        };
        assert!(LayoutConfig::from_context(&context).restrict_to_highlighted_only);
    }

    #[test]
    fn test_context_from_json() {
        let json = r#"{"imageUrl":"x.png","imageFormat":"round","presentation":"valueHelp"}"#;
        let context: ResultItemContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.image_format, ImageFormat::Round);
        assert_eq!(context.presentation, PresentationMode::ValueHelp);
    }
}
