//! Bindings to the Bootstrap widgets the page already loads.
//!
//! Every entry point is `catch`, so a page without the toolkit surfaces an
//! `Err` instead of throwing a ReferenceError through the wasm boundary.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(catch, static_method_of = Tooltip, js_namespace = bootstrap, js_name = getOrCreateInstance)]
    fn tooltip_instance(element: &Element) -> Result<Tooltip, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Collapse;

    #[wasm_bindgen(catch, static_method_of = Collapse, js_namespace = bootstrap, js_name = getOrCreateInstance)]
    fn collapse_instance(element: &Element, config: &JsValue) -> Result<Collapse, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn hide(this: &Collapse) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct CollapseOptions {
    toggle: bool,
}

pub fn activate_tooltip(element: &Element) -> Result<(), String> {
    Tooltip::tooltip_instance(element)
        .map(|_| ())
        .map_err(|e| format!("Tooltip unavailable: {:?}", e))
}

/// Hide an expanded collapse panel without toggling it on first use.
pub fn hide_collapse(element: &Element) -> Result<(), String> {
    let options = serde_wasm_bindgen::to_value(&CollapseOptions { toggle: false })
        .map_err(|e| format!("Failed to build collapse options: {}", e))?;
    let collapse = Collapse::collapse_instance(element, &options)
        .map_err(|e| format!("Collapse unavailable: {:?}", e))?;
    collapse
        .hide()
        .map_err(|e| format!("Collapse hide failed: {:?}", e))
}
