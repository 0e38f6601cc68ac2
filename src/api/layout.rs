//! Attribute layout API
//!
//! JavaScript-facing entry points for laying out the attributes of a search
//! result item. Each wasm function is a thin wrapper over a plain Rust
//! function so the behavior is testable without a browser.

use wasm_bindgen::prelude::*;

use crate::item_layout::{
    resolve_weight, AttributeLayoutEngine, ColumnWeight, DisplayList, ItemLayout, SlotStyleBuilder,
};
use crate::models::{validate_attributes, LayoutConfig, LayoutError, RawAttribute, ResultItemContext};
use super::helpers::{deserialize, deserialize_or_default, layout_error, serialize};
use crate::wasm_info;

/// Validate raw attributes and lay them out
pub fn layout_attributes(
    raw: Vec<RawAttribute>,
    config: &LayoutConfig,
) -> Result<ItemLayout, LayoutError> {
    let attributes = validate_attributes(raw)?;
    Ok(AttributeLayoutEngine::new(*config).compute_layout(&attributes))
}

/// Validate raw attributes, lay them out and build the display list
pub fn display_list_for(
    raw: Vec<RawAttribute>,
    config: &LayoutConfig,
) -> Result<DisplayList, LayoutError> {
    let layout = layout_attributes(raw, config)?;
    Ok(SlotStyleBuilder::new().build_display_list(&layout))
}

/// Compute row, weight and visibility of every attribute
///
/// # Parameters
/// - `attributes_js`: array of attribute records
/// - `config_js`: `LayoutConfig` object, or `undefined` for defaults
///
/// # Returns
/// `ItemLayout` object
#[wasm_bindgen(js_name = computeAttributeLayout)]
pub fn compute_attribute_layout(attributes_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
    let raw: Vec<RawAttribute> = deserialize(attributes_js, "Failed to read attributes")?;
    let config: LayoutConfig = deserialize_or_default(config_js, "Failed to read layout config")?;
    wasm_info!("computeAttributeLayout called: {} attributes, {:?}", raw.len(), config);

    let layout = layout_attributes(raw, &config).map_err(layout_error)?;
    serialize(&layout, "Failed to write item layout")
}

/// Same as `computeAttributeLayout`, deriving the config from the result item
#[wasm_bindgen(js_name = computeAttributeLayoutForContext)]
pub fn compute_attribute_layout_for_context(
    attributes_js: JsValue,
    context_js: JsValue,
) -> Result<JsValue, JsValue> {
    let raw: Vec<RawAttribute> = deserialize(attributes_js, "Failed to read attributes")?;
    let context: ResultItemContext =
        deserialize_or_default(context_js, "Failed to read result item context")?;
    let config = LayoutConfig::from_context(&context);
    wasm_info!(
        "computeAttributeLayoutForContext called: {} attributes, {:?}",
        raw.len(),
        config
    );

    let layout = layout_attributes(raw, &config).map_err(layout_error)?;
    serialize(&layout, "Failed to write item layout")
}

/// Compute the CSS classes for every attribute slot
#[wasm_bindgen(js_name = computeDisplayList)]
pub fn compute_display_list(attributes_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
    let raw: Vec<RawAttribute> = deserialize(attributes_js, "Failed to read attributes")?;
    let config: LayoutConfig = deserialize_or_default(config_js, "Failed to read layout config")?;

    let display_list = display_list_for(raw, &config).map_err(layout_error)?;
    serialize(&display_list, "Failed to write display list")
}

/// Column weight of a single value, for renderers that measure on their own
#[wasm_bindgen(js_name = resolveColumnWeight)]
pub fn resolve_column_weight(is_long_text: bool, value_length: f64) -> Result<JsValue, JsValue> {
    // JavaScript numbers: NaN and fractions collapse to whole characters
    let length = if value_length.is_finite() { value_length as i64 } else { 0 };
    let weight: ColumnWeight = resolve_weight(is_long_text, length);
    serialize(&weight, "Failed to write column weight")
}
