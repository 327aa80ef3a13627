use memo_contracts::shared::selectors::STATUS_SELECT;
use memo_contracts::BehaviorConfig;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement};

use super::loading;
use crate::shared::dom;

/// Put the owning form of a status select into the loading state and submit it.
/// There is no validation gate here. Returns false when the select has no form.
pub fn submit_owning_form(select: &Element, config: &BehaviorConfig) -> Result<bool, String> {
    let form = select
        .closest("form")
        .map_err(|e| format!("closest(form) failed: {:?}", e))?;
    let Some(form) = form.and_then(|f| f.dyn_into::<HtmlFormElement>().ok()) else {
        return Ok(false);
    };

    loading::enter_for_submit(&form, config);
    form.submit()
        .map_err(|e| format!("Form submit failed: {:?}", e))?;
    Ok(true)
}

pub fn init_status_changes(document: &Document, config: &Rc<BehaviorConfig>) -> Result<usize, String> {
    let selects = dom::query_document(document, STATUS_SELECT)?;

    for select in &selects {
        let config = Rc::clone(config);
        let target = select.clone();
        dom::listen(select, "change", move |_| {
            if let Err(err) = submit_owning_form(&target, &config) {
                log::error!("{}", err);
            }
        })?;
    }

    Ok(selects.len())
}
