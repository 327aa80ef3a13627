//! Loading state of a form (or any container): controls disabled, labels swapped for a spinner.
//!
//! Entering the state returns a [`LoadingGuard`]. Releasing or dropping the guard puts
//! back exactly what it captured; `hold` hands the state over to a later [`hide_loading`].

use memo_contracts::shared::loading::{button_loading_html, LOADING_CLASS, ORIGINAL_TEXT_ATTR};
use memo_contracts::shared::selectors::{ALL_FORMS, LOADING_CONTROLS};
use memo_contracts::{BehaviorConfig, RestorePolicy};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, PageTransitionEvent};

use crate::shared::dom;

struct SavedControl {
    element: Element,
    label: String,
}

#[must_use = "dropping the guard restores the controls immediately"]
pub struct LoadingGuard {
    container: Element,
    controls: Vec<SavedControl>,
    armed: bool,
}

impl LoadingGuard {
    /// False when the container was already loading and this guard owns nothing.
    pub fn is_active(&self) -> bool {
        self.armed
    }

    pub fn release(mut self) {
        self.restore();
    }

    /// Leave the controls in the loading state; only `hide_loading` brings them back.
    pub fn hold(mut self) {
        self.armed = false;
    }

    fn restore(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;

        let _ = self.container.class_list().remove_1(LOADING_CLASS);
        for control in self.controls.drain(..) {
            restore_control(&control.element, Some(&control.label));
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub fn show_loading(container: &Element, loading_label: &str) -> LoadingGuard {
    // Entering twice would save the spinner as the "original" label.
    if container.class_list().contains(LOADING_CLASS) {
        return LoadingGuard {
            container: container.clone(),
            controls: Vec::new(),
            armed: false,
        };
    }

    let _ = container.class_list().add_1(LOADING_CLASS);

    let controls = dom::query_within(container, LOADING_CONTROLS).unwrap_or_else(|err| {
        log::error!("{}", err);
        Vec::new()
    });

    let button_html = button_loading_html(loading_label);
    let controls = controls
        .into_iter()
        .map(|element| {
            let label = dom::control_label(&element);
            let _ = element.set_attribute(ORIGINAL_TEXT_ATTR, &label);
            dom::set_disabled(&element, true);
            if element.is_instance_of::<HtmlInputElement>() {
                dom::set_control_label(&element, loading_label);
            } else {
                dom::set_control_label(&element, &button_html);
            }
            SavedControl { element, label }
        })
        .collect();

    LoadingGuard {
        container: container.clone(),
        controls,
        armed: true,
    }
}

/// Undo a loading state entered anywhere, using the labels saved on the controls.
/// Controls without a saved label keep whatever they show now.
pub fn hide_loading(container: &Element) {
    let _ = container.class_list().remove_1(LOADING_CLASS);

    match dom::query_within(container, LOADING_CONTROLS) {
        Ok(controls) => {
            for control in controls {
                let saved = control.get_attribute(ORIGINAL_TEXT_ATTR);
                restore_control(&control, saved.as_deref());
            }
        }
        Err(err) => log::error!("{}", err),
    }
}

fn restore_control(element: &Element, label: Option<&str>) {
    dom::set_disabled(element, false);
    if let Some(label) = label {
        dom::set_control_label(element, label);
    }
    let _ = element.remove_attribute(ORIGINAL_TEXT_ATTR);
}

/// Keep a submit-time loading state according to the configured restore policy.
pub fn hold_for_submit(guard: LoadingGuard, policy: RestorePolicy) {
    if !guard.is_active() {
        return;
    }

    match policy {
        RestorePolicy::Manual => guard.hold(),
        RestorePolicy::OnPageShow => {
            let Some(window) = web_sys::window() else {
                guard.hold();
                return;
            };
            // The next pageshow this document sees can only be a back/forward cache restore
            let result = dom::listen_once(&window, "pageshow", move |event| {
                let restored = event
                    .dyn_ref::<PageTransitionEvent>()
                    .map(|e| e.persisted())
                    .unwrap_or(false);
                if restored {
                    log::debug!("Page restored from cache, releasing loading state");
                    guard.release();
                } else {
                    guard.hold();
                }
            });
            if let Err(err) = result {
                log::warn!("{}", err);
            }
        }
    }
}

pub fn enter_for_submit(container: &Element, config: &BehaviorConfig) {
    let guard = show_loading(container, &config.loading_label);
    hold_for_submit(guard, config.loading_restore);
}

/// Every form enters the loading state on submit, unless an earlier listener
/// (the validator) already cancelled the submission.
pub fn init_loading_states(document: &Document, config: &Rc<BehaviorConfig>) -> Result<usize, String> {
    let forms = dom::query_document(document, ALL_FORMS)?;

    for form in &forms {
        let config = Rc::clone(config);
        let target = form.clone();
        dom::listen(form, "submit", move |event| {
            if event.default_prevented() {
                return;
            }
            enter_for_submit(&target, &config);
        })?;
    }

    Ok(forms.len())
}
