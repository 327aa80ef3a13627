//! Thin helpers over `web-sys` for the repetitive query / listen / control patterns.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlButtonElement,
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, NodeList,
};

pub fn document() -> Result<Document, String> {
    let window = web_sys::window().ok_or("No window object")?;
    window.document().ok_or_else(|| "No document object".to_string())
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements of the document matching `selector`, in document order
pub fn query_document(document: &Document, selector: &str) -> Result<Vec<Element>, String> {
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .map_err(|e| format!("Invalid selector `{}`: {:?}", selector, e))
}

/// All descendants of `root` matching `selector`, in document order
pub fn query_within(root: &Element, selector: &str) -> Result<Vec<Element>, String> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .map_err(|e| format!("Invalid selector `{}`: {:?}", selector, e))
}

/// Attach a listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), String>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to listen for `{}`: {:?}", event_type, e))?;
    closure.forget();
    Ok(())
}

/// Attach a listener that the browser removes after its first call.
/// The Rust closure is freed once it has run.
pub fn listen_once<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), String>
where
    F: FnOnce(Event) + 'static,
{
    let callback = Closure::once_into_js(handler);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.unchecked_ref(),
            &options,
        )
        .map_err(|e| format!("Failed to listen for `{}`: {:?}", event_type, e))
}

/// Current value of an input, textarea or select.
pub fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(textarea.value());
    }
    element.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
}

/// Declared `type` attribute of an `<input>`. The reflected `type` property reads
/// `text` for kinds the browser does not support, so the attribute is used instead.
pub fn input_type(element: &Element) -> Option<String> {
    if !element.is_instance_of::<HtmlInputElement>() {
        return None;
    }
    element.get_attribute("type")
}

pub fn set_disabled(element: &Element, disabled: bool) {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_disabled(disabled);
    }
}

/// Visible label of a control: the value of an `<input>`, the markup of anything else.
pub fn control_label(element: &Element) -> String {
    match element.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.value(),
        None => element.inner_html(),
    }
}

pub fn set_control_label(element: &Element, label: &str) {
    match element.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.set_value(label),
        None => element.set_inner_html(label),
    }
}
