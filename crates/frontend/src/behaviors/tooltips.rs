use memo_contracts::shared::selectors::TOOLTIP_TRIGGER;
use web_sys::Document;

use crate::shared::{bootstrap, dom};

pub fn init_tooltips(document: &Document) -> Result<usize, String> {
    let triggers = dom::query_document(document, TOOLTIP_TRIGGER)?;

    let mut activated = 0;
    for trigger in &triggers {
        if let Err(err) = bootstrap::activate_tooltip(trigger) {
            // Missing toolkit fails the same way for every trigger
            log::warn!("{}", err);
            break;
        }
        activated += 1;
    }

    Ok(activated)
}
