//! Transient alert banners: one at a time, pinned top-right, gone after a timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use memo_contracts::shared::alert::ALERT_BANNER_STYLE;
use memo_contracts::shared::selectors::DISMISSIBLE_ALERT;
use memo_contracts::AlertKind;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::shared::{config, dom};

/// Replace any visible alert with a new banner that removes itself after `timeout_ms`.
pub fn show_alert_with_timeout(
    message: &str,
    kind: AlertKind,
    timeout_ms: u32,
) -> Result<HtmlElement, String> {
    let document = dom::document()?;
    let body = document.body().ok_or("No body element")?;

    for existing in dom::query_document(&document, DISMISSIBLE_ALERT)? {
        existing.remove();
    }

    let banner = document
        .create_element("div")
        .map_err(|e| format!("Failed to create alert: {:?}", e))?
        .dyn_into::<HtmlElement>()
        .map_err(|e| format!("Failed to cast alert: {:?}", e))?;
    banner.set_class_name(&kind.banner_class());
    banner
        .set_attribute("role", "alert")
        .map_err(|e| format!("Failed to set role: {:?}", e))?;
    banner.style().set_css_text(ALERT_BANNER_STYLE);

    body.append_child(&banner)
        .map_err(|e| format!("Failed to append alert: {:?}", e))?;

    let message = message.to_string();
    let dismiss_target = banner.clone();
    let view_handle = leptos::mount::mount_to(banner.clone(), move || {
        view! {
            {message}
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| dismiss_target.remove()
            ></button>
        }
    });

    let expiring = banner.clone();
    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        if expiring.is_connected() {
            expiring.remove();
        }
        // Dismissed or replaced banners are torn down here too
        drop(view_handle);
    });

    Ok(banner)
}

pub fn show_alert(message: &str, kind: AlertKind) {
    let timeout_ms = config::load_config().alert_timeout_ms;
    if let Err(err) = show_alert_with_timeout(message, kind, timeout_ms) {
        log::error!("Failed to show alert: {}", err);
    }
}

pub fn show_success(message: &str) {
    show_alert(message, AlertKind::Success);
}

pub fn show_error(message: &str) {
    show_alert(message, AlertKind::Danger);
}

pub fn show_warning(message: &str) {
    show_alert(message, AlertKind::Warning);
}

pub fn show_info(message: &str) {
    show_alert(message, AlertKind::Info);
}
