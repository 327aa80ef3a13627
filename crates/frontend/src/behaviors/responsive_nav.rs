use memo_contracts::shared::selectors::{NAV_COLLAPSE, NAV_LINK, SHOWN_CLASS};
use web_sys::Document;

use crate::shared::{bootstrap, dom};

/// Collapse the mobile nav panel if it is open. Returns whether anything was collapsed.
pub fn collapse_open_nav(document: &Document) -> Result<bool, String> {
    let panel = document
        .query_selector(NAV_COLLAPSE)
        .map_err(|e| format!("Invalid selector `{}`: {:?}", NAV_COLLAPSE, e))?;
    let Some(panel) = panel else {
        return Ok(false);
    };
    if !panel.class_list().contains(SHOWN_CLASS) {
        return Ok(false);
    }

    if let Err(err) = bootstrap::hide_collapse(&panel) {
        log::warn!("{}; removing `{}` directly", err, SHOWN_CLASS);
        let _ = panel.class_list().remove_1(SHOWN_CLASS);
    }
    Ok(true)
}

pub fn init_responsive_nav(document: &Document) -> Result<usize, String> {
    let links = dom::query_document(document, NAV_LINK)?;

    for link in &links {
        let document = document.clone();
        dom::listen(link, "click", move |_| {
            if let Err(err) = collapse_open_nav(&document) {
                log::error!("{}", err);
            }
        })?;
    }

    Ok(links.len())
}
