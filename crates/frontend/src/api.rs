//! Surface exported to the page's other scripts.

use memo_contracts::AlertKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::behaviors::{alerts, loading, timing};
use crate::shared::config;

#[wasm_bindgen(js_name = showSuccess)]
pub fn show_success(message: &str) {
    alerts::show_success(message);
}

#[wasm_bindgen(js_name = showError)]
pub fn show_error(message: &str) {
    alerts::show_error(message);
}

#[wasm_bindgen(js_name = showWarning)]
pub fn show_warning(message: &str) {
    alerts::show_warning(message);
}

#[wasm_bindgen(js_name = showInfo)]
pub fn show_info(message: &str) {
    alerts::show_info(message);
}

/// `kind` is one of success, danger (or error), warning, info; anything else is info.
#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert(message: &str, kind: Option<String>) {
    let kind = kind
        .as_deref()
        .and_then(AlertKind::from_code)
        .unwrap_or_default();
    alerts::show_alert(message, kind);
}

/// Loading state handed to JS. Dropping or freeing the handle keeps the state;
/// only `release()` or `hideLoading` restores the controls.
#[wasm_bindgen]
pub struct LoadingHandle {
    guard: Option<loading::LoadingGuard>,
}

#[wasm_bindgen]
impl LoadingHandle {
    pub fn release(&mut self) {
        if let Some(guard) = self.guard.take() {
            guard.release();
        }
    }

    pub fn hold(&mut self) {
        if let Some(guard) = self.guard.take() {
            guard.hold();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.guard.as_ref().map(|g| g.is_active()).unwrap_or(false)
    }
}

impl Drop for LoadingHandle {
    fn drop(&mut self) {
        self.hold();
    }
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: &Element) -> LoadingHandle {
    let config = config::load_config();
    LoadingHandle {
        guard: Some(loading::show_loading(element, &config.loading_label)),
    }
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading(element: &Element) {
    loading::hide_loading(element);
}

fn call_quietly(func: &js_sys::Function, arg: &JsValue) {
    if let Err(err) = func.call1(&JsValue::NULL, arg) {
        log::error!("Wrapped callback threw: {:?}", err);
    }
}

/// Debounced wrapper around a JS function taking one argument.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce_js(func: js_sys::Function, wait_ms: u32) -> js_sys::Function {
    let debounced = timing::debounce(move |arg: JsValue| call_quietly(&func, &arg), wait_ms);
    Closure::wrap(Box::new(debounced) as Box<dyn Fn(JsValue)>)
        .into_js_value()
        .unchecked_into()
}

/// Throttled wrapper around a JS function taking one argument.
#[wasm_bindgen(js_name = throttle)]
pub fn throttle_js(func: js_sys::Function, limit_ms: u32) -> js_sys::Function {
    let throttled = timing::throttle(move |arg: JsValue| call_quietly(&func, &arg), limit_ms);
    Closure::wrap(Box::new(throttled) as Box<dyn Fn(JsValue)>)
        .into_js_value()
        .unchecked_into()
}
