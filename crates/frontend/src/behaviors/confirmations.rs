use memo_contracts::shared::selectors::{CONFIRM_ATTR, CONFIRM_TRIGGER};
use memo_contracts::BehaviorConfig;
use std::rc::Rc;
use web_sys::{Document, Element, Event};

use crate::shared::dom;

/// Blocking browser prompt. A prompt that cannot be shown counts as declined.
fn ask(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Cancel the click entirely unless the user confirms. Returns whether it may proceed.
pub fn guard_click(trigger: &Element, event: &Event, config: &BehaviorConfig) -> bool {
    let attr = trigger.get_attribute(CONFIRM_ATTR);
    let message = config.confirm_message(attr.as_deref());

    if ask(message) {
        return true;
    }

    event.prevent_default();
    event.stop_immediate_propagation();
    false
}

pub fn init_confirmations(document: &Document, config: &Rc<BehaviorConfig>) -> Result<usize, String> {
    let triggers = dom::query_document(document, CONFIRM_TRIGGER)?;

    for trigger in &triggers {
        let config = Rc::clone(config);
        let target = trigger.clone();
        dom::listen(trigger, "click", move |event| {
            if !guard_click(&target, &event, &config) {
                log::debug!("Action cancelled at confirmation prompt");
            }
        })?;
    }

    Ok(triggers.len())
}
