//! Page behaviors bound once when the document is ready.

pub mod alerts;
pub mod confirmations;
pub mod form_validation;
pub mod loading;
pub mod responsive_nav;
pub mod status_change;
pub mod timing;
pub mod tooltips;

use memo_contracts::BehaviorConfig;
use std::rc::Rc;
use web_sys::Document;

use crate::shared::dom;

/// Bind every behavior to the current document.
///
/// The validator is bound before the generic loading listener so the latter
/// sees a cancelled submit and leaves the buttons alone.
pub fn init_page_behaviors(document: &Document, config: BehaviorConfig) -> Result<(), String> {
    let config = Rc::new(config);

    let tooltips = tooltips::init_tooltips(document)?;
    let validated_forms = form_validation::init_form_validation(document, &config)?;
    let status_selects = status_change::init_status_changes(document, &config)?;
    let confirmations = confirmations::init_confirmations(document, &config)?;
    let nav_links = responsive_nav::init_responsive_nav(document)?;
    let forms = loading::init_loading_states(document, &config)?;

    log::debug!(
        "Page behaviors ready: {} tooltips, {} validated forms, {} status selects, {} confirmations, {} nav links, {} forms",
        tooltips,
        validated_forms,
        status_selects,
        confirmations,
        nav_links,
        forms
    );
    Ok(())
}

/// Run `f` once the DOM is parsed: immediately if it already is, otherwise on DOMContentLoaded.
pub fn on_page_ready<F>(f: F) -> Result<(), String>
where
    F: FnOnce() + 'static,
{
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    dom::listen_once(&document, "DOMContentLoaded", move |_| f())
}
