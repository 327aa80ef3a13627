use memo_contracts::shared::selectors::{
    CLIENT_FEEDBACK_ATTR, FEEDBACK_CLASS, INVALID_CLASS, VALIDATED_FIELD, VALIDATED_FORM,
};
use memo_contracts::{evaluate_field, BehaviorConfig, FieldError, FieldKind, FieldRules};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use super::loading;
use crate::shared::dom;

const FIELD_CONTROLS: &str = "input, select, textarea";

/// Rules declared by the field's markup.
pub fn field_rules(field: &Element) -> FieldRules {
    FieldRules {
        required: field.has_attribute("required"),
        kind: FieldKind::from_input_type(dom::input_type(field).as_deref()),
    }
}

/// Check one field against its `required` / `datetime-local` rules.
pub fn check_field(field: &Element) -> Result<(), FieldError> {
    let value = dom::field_value(field).unwrap_or_default();
    evaluate_field(field_rules(field), &value)
}

/// Validate every checked field of the form, annotating failures and clearing passes.
pub fn validate_form(form: &Element) -> bool {
    let fields = match dom::query_within(form, VALIDATED_FIELD) {
        Ok(fields) => fields,
        Err(err) => {
            log::error!("{}", err);
            return true;
        }
    };

    let mut is_valid = true;
    for field in &fields {
        match check_field(field) {
            Ok(()) => clear_field_error(field),
            Err(err) => {
                is_valid = false;
                if let Err(dom_err) = show_field_error(field, &err.to_string()) {
                    log::error!("{}", dom_err);
                }
            }
        }
    }
    is_valid
}

/// Mark the field invalid and put a message right after it.
/// Any earlier message after the field, client-side or server-rendered, is replaced.
pub fn show_field_error(field: &Element, message: &str) -> Result<(), String> {
    clear_field_error(field);
    remove_following_feedback(field);

    field
        .class_list()
        .add_1(INVALID_CLASS)
        .map_err(|e| format!("Failed to mark field: {:?}", e))?;

    let document = field.owner_document().ok_or("Field is detached")?;
    let feedback = document
        .create_element("div")
        .map_err(|e| format!("Failed to create feedback: {:?}", e))?;
    feedback.set_class_name(FEEDBACK_CLASS);
    feedback
        .set_attribute(CLIENT_FEEDBACK_ATTR, "")
        .map_err(|e| format!("Failed to tag feedback: {:?}", e))?;
    feedback.set_text_content(Some(message));

    field
        .after_with_node_1(&feedback)
        .map_err(|e| format!("Failed to insert feedback: {:?}", e))
}

/// Feedback belongs to the nearest field before it, so the sweep stops at the next field.
fn remove_following_feedback(field: &Element) {
    let mut sibling = field.next_element_sibling();
    while let Some(node) = sibling {
        if node.matches(FIELD_CONTROLS).unwrap_or(false) {
            break;
        }
        sibling = node.next_element_sibling();
        if node.class_list().contains(FEEDBACK_CLASS) {
            node.remove();
        }
    }
}

pub fn clear_field_error(field: &Element) {
    let _ = field.class_list().remove_1(INVALID_CLASS);
    if let Some(next) = field.next_element_sibling() {
        if next.has_attribute(CLIENT_FEEDBACK_ATTR) {
            next.remove();
        }
    }
}

/// Re-check an annotated field as the user corrects it.
fn recheck_on_edit(event: &Event) {
    let Some(field) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };

    if !field.class_list().contains(INVALID_CLASS) {
        return;
    }
    if !field.matches(VALIDATED_FIELD).unwrap_or(false) {
        return;
    }
    if check_field(&field).is_ok() {
        clear_field_error(&field);
    }
}

pub fn init_form_validation(document: &Document, config: &Rc<BehaviorConfig>) -> Result<usize, String> {
    let forms = dom::query_document(document, VALIDATED_FORM)?;

    for form in &forms {
        let config = Rc::clone(config);
        let target = form.clone();
        dom::listen(form, "submit", move |event| {
            if !validate_form(&target) {
                log::debug!("Form validation failed, submission blocked");
                event.prevent_default();
                return;
            }
            loading::enter_for_submit(&target, &config);
        })?;

        dom::listen(form, "input", |event| recheck_on_edit(&event))?;
        dom::listen(form, "change", |event| recheck_on_edit(&event))?;
    }

    Ok(forms.len())
}
