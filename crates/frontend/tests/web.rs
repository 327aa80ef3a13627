//! Browser tests for the page behaviors. Run with `wasm-pack test --headless --chrome crates/frontend`.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use memo_contracts::shared::selectors::{CLIENT_FEEDBACK_ATTR, INVALID_CLASS};
use memo_contracts::{AlertKind, BehaviorConfig, FieldKind, RestorePolicy};
use memo_frontend::behaviors::{alerts, confirmations, form_validation, loading, responsive_nav, status_change, timing};
use memo_frontend::shared::{config, dom};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    Element, Event, EventInit, HtmlElement, HtmlInputElement, PageTransitionEvent,
    PageTransitionEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(html: &str) -> Element {
    let document = dom::document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(html);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

fn input(root: &Element, selector: &str) -> HtmlInputElement {
    find(root, selector).dyn_into().unwrap()
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

#[wasm_bindgen_test]
fn blank_required_field_gets_exactly_one_marker() {
    let root = fixture(
        r#"<form data-validate="true">
            <div><input name="title" required></div>
            <div><textarea name="content" required>Call the bank</textarea></div>
        </form>"#,
    );
    let form = find(&root, "form");
    let feedback = format!("[{}]", CLIENT_FEEDBACK_ATTR);

    assert!(!form_validation::validate_form(&form));
    assert!(!form_validation::validate_form(&form));
    assert_eq!(count(&root, &feedback), 1);

    let title = input(&root, "input[name=title]");
    assert!(title.class_list().contains(INVALID_CLASS));
    let message = title.next_element_sibling().unwrap().text_content().unwrap();
    assert_eq!(message, "This field is required");

    title.set_value("Groceries");
    assert!(form_validation::validate_form(&form));
    assert_eq!(count(&root, &feedback), 0);
    assert!(!title.class_list().contains(INVALID_CLASS));

    root.remove();
}

#[wasm_bindgen_test]
fn server_rendered_feedback_is_left_alone() {
    let root = fixture(
        r#"<form><input name="title" required value="ok"><div class="invalid-feedback">From server</div></form>"#,
    );
    let form = find(&root, "form");

    assert!(form_validation::validate_form(&form));
    assert_eq!(count(&root, ".invalid-feedback"), 1);

    root.remove();
}

#[wasm_bindgen_test]
fn failing_field_replaces_its_server_feedback_only() {
    let root = fixture(
        r#"<form><div>
            <input name="title" required><div class="invalid-feedback">Title already taken</div>
            <input name="tag" required value="work"><div class="invalid-feedback">Unknown tag</div>
        </div></form>"#,
    );
    let form = find(&root, "form");

    assert!(!form_validation::validate_form(&form));

    let title = find(&root, "input[name=title]");
    let feedback = title.next_element_sibling().unwrap();
    assert!(feedback.has_attribute(CLIENT_FEEDBACK_ATTR));
    assert_eq!(feedback.text_content().unwrap(), "This field is required");
    assert!(!root.text_content().unwrap().contains("Title already taken"));
    // The other field's message survives the sweep
    assert!(root.text_content().unwrap().contains("Unknown tag"));
    assert_eq!(count(&root, ".invalid-feedback"), 2);

    root.remove();
}

#[wasm_bindgen_test]
fn field_kind_follows_declared_type_attribute() {
    let root = fixture(
        r#"<input id="due" type="datetime-local"><input id="upper" type="DATETIME-LOCAL"><input id="plain"><textarea id="body"></textarea>"#,
    );

    assert_eq!(form_validation::field_rules(&find(&root, "#due")).kind, FieldKind::DateTimeLocal);
    assert_eq!(form_validation::field_rules(&find(&root, "#upper")).kind, FieldKind::DateTimeLocal);
    assert_eq!(form_validation::field_rules(&find(&root, "#plain")).kind, FieldKind::Text);
    assert_eq!(form_validation::field_rules(&find(&root, "#body")).kind, FieldKind::Text);

    root.remove();
}

#[wasm_bindgen_test]
fn datetime_field_accepts_iso_value() {
    let root = fixture(
        r#"<form><input type="datetime-local" name="expired_at"><input type="datetime-local" name="due" required></form>"#,
    );
    let form = find(&root, "form");
    input(&root, "input[name=expired_at]").set_value("2024-05-01T09:30");

    // The required one is still empty
    assert!(!form_validation::validate_form(&form));
    assert_eq!(count(&root, ".is-invalid"), 1);

    input(&root, "input[name=due]").set_value("2024-05-02T18:00");
    assert!(form_validation::validate_form(&form));
    assert_eq!(count(&root, ".is-invalid"), 0);

    root.remove();
}

#[wasm_bindgen_test]
fn show_and_hide_loading_restore_labels() {
    let root = fixture(
        r#"<form>
            <button type="submit" id="save"><b>Save</b> Memo</button>
            <input type="submit" id="update" value="Update Status">
        </form>"#,
    );
    let form = find(&root, "form");

    loading::show_loading(&form, "Loading...").hold();

    let save = find(&root, "#save");
    let update = input(&root, "#update");
    assert!(form.class_list().contains("loading"));
    assert!(save.has_attribute("disabled"));
    assert!(update.disabled());
    assert!(save.inner_html().contains("spinner-border"));
    assert!(save.inner_html().ends_with("Loading..."));
    assert_eq!(update.value(), "Loading...");

    loading::hide_loading(&form);

    assert!(!form.class_list().contains("loading"));
    assert!(!save.has_attribute("disabled"));
    assert!(!update.disabled());
    assert_eq!(save.inner_html(), "<b>Save</b> Memo");
    assert_eq!(update.value(), "Update Status");
    assert!(!save.has_attribute("data-original-text"));

    root.remove();
}

#[wasm_bindgen_test]
fn loading_guard_restores_on_release_and_ignores_reentry() {
    let root = fixture(r#"<form><button id="save">Save</button></form>"#);
    let form = find(&root, "form");
    let save = find(&root, "#save");

    let guard = loading::show_loading(&form, "Loading...");
    assert!(guard.is_active());

    let second = loading::show_loading(&form, "Loading...");
    assert!(!second.is_active());
    drop(second);
    assert!(save.has_attribute("disabled"));

    guard.release();
    assert!(!save.has_attribute("disabled"));
    assert_eq!(save.inner_html(), "Save");

    {
        let _scoped = loading::show_loading(&form, "Working");
        assert!(save.inner_html().ends_with("Working"));
    }
    assert_eq!(save.inner_html(), "Save");

    root.remove();
}

#[wasm_bindgen_test]
fn exported_loading_handle_releases() {
    let root = fixture(r#"<div><button id="go">Go</button></div>"#);
    let container = find(&root, "div");
    let go = find(&root, "#go");

    let mut handle = memo_frontend::api::show_loading(&container);
    assert!(handle.active());
    assert!(go.has_attribute("disabled"));

    handle.release();
    assert!(!handle.active());
    assert!(!go.has_attribute("disabled"));

    root.remove();
}

fn visible_alerts() -> Vec<Element> {
    let document = dom::document().unwrap();
    dom::query_document(&document, ".alert-dismissible").unwrap()
}

#[wasm_bindgen_test]
async fn newer_alert_replaces_older_one() {
    alerts::show_alert_with_timeout("Memo saved", AlertKind::Success, 10_000).unwrap();
    let latest = alerts::show_alert_with_timeout("Memo deleted", AlertKind::Danger, 10_000).unwrap();

    let shown = visible_alerts();
    assert_eq!(shown.len(), 1);
    assert!(latest.class_list().contains("alert-danger"));
    assert!(latest.text_content().unwrap().contains("Memo deleted"));

    latest.remove();
}

#[wasm_bindgen_test]
async fn alert_expires_after_timeout() {
    let banner = alerts::show_alert_with_timeout("Synced", AlertKind::Info, 50).unwrap();
    assert!(banner.is_connected());

    TimeoutFuture::new(150).await;
    assert!(!banner.is_connected());
    assert!(visible_alerts().is_empty());
    assert!(banner.query_selector(".btn-close").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn alert_close_button_dismisses_immediately() {
    let banner = alerts::show_alert_with_timeout("<i>not markup</i>", AlertKind::Warning, 50).unwrap();
    assert!(banner.query_selector("i").unwrap().is_none());

    let close: HtmlElement = banner
        .query_selector(".btn-close")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    close.click();

    assert!(!banner.is_connected());

    // The rendered view is unmounted once the timer fires
    TimeoutFuture::new(150).await;
    assert!(banner.query_selector(".btn-close").unwrap().is_none());
}

fn stub_confirm(answer: bool) {
    let window = web_sys::window().unwrap();
    let body = if answer { "return true;" } else { "return false;" };
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str("confirm"),
        &js_sys::Function::new_with_args("message", body),
    )
    .unwrap();
}

fn cancelable(event_type: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict(event_type, &init).unwrap()
}

fn cancelable_click() -> Event {
    cancelable("click")
}

fn guarded_button(root: &Element) -> (Element, Rc<Cell<u32>>) {
    let button = find(root, "button");
    let target = button.clone();
    let config = BehaviorConfig::default();
    dom::listen(&button, "click", move |event| {
        confirmations::guard_click(&target, &event, &config);
    })
    .unwrap();

    let reached = Rc::new(Cell::new(0));
    let counter = Rc::clone(&reached);
    dom::listen(&button, "click", move |_| counter.set(counter.get() + 1)).unwrap();
    (button, reached)
}

#[wasm_bindgen_test]
fn declined_confirmation_cancels_action() {
    let root = fixture(r#"<button type="button" data-confirm="Delete this memo?">Delete</button>"#);
    let (button, reached) = guarded_button(&root);

    stub_confirm(false);
    let proceeded = button.dispatch_event(&cancelable_click()).unwrap();

    assert!(!proceeded);
    assert_eq!(reached.get(), 0);
    root.remove();
}

#[wasm_bindgen_test]
fn accepted_confirmation_lets_action_through() {
    let root = fixture(r#"<button type="button" data-confirm="">Delete</button>"#);
    let (button, reached) = guarded_button(&root);

    stub_confirm(true);
    let proceeded = button.dispatch_event(&cancelable_click()).unwrap();

    assert!(proceeded);
    assert_eq!(reached.get(), 1);
    root.remove();
}

#[wasm_bindgen_test]
fn status_change_submits_owning_form() {
    let root = fixture(
        r#"<iframe name="status-sink" style="display:none"></iframe>
        <form action="about:blank" target="status-sink">
            <select name="new_status"><option value="pending">Pending</option><option value="done">Done</option></select>
            <input name="title" required>
            <button type="submit">Update Status</button>
        </form>
        <select name="new_status" id="orphan"></select>"#,
    );
    let select = find(&root, "form select");
    let config = BehaviorConfig::default();

    // Blank required title does not stop it
    assert_eq!(status_change::submit_owning_form(&select, &config), Ok(true));
    assert!(find(&root, "form").class_list().contains("loading"));
    assert!(find(&root, "form button").has_attribute("disabled"));

    let orphan = find(&root, "#orphan");
    assert_eq!(status_change::submit_owning_form(&orphan, &config), Ok(false));

    root.remove();
}

#[wasm_bindgen_test]
fn open_nav_collapses_without_toolkit() {
    let root = fixture(r#"<div class="navbar-collapse show"><ul class="navbar-nav"><li><a class="nav-link">Memos</a></li></ul></div>"#);
    let document = dom::document().unwrap();

    assert_eq!(responsive_nav::collapse_open_nav(&document), Ok(true));
    assert!(!find(&root, ".navbar-collapse").class_list().contains("show"));
    assert_eq!(responsive_nav::collapse_open_nav(&document), Ok(false));

    root.remove();
}

#[wasm_bindgen_test]
async fn debounce_runs_once_with_latest_argument() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let debounced = timing::debounce(move |value: u32| sink.borrow_mut().push(value), 30);

    debounced(1);
    debounced(2);
    debounced(3);
    assert!(seen.borrow().is_empty());

    TimeoutFuture::new(100).await;
    assert_eq!(*seen.borrow(), vec![3]);
}

#[wasm_bindgen_test]
async fn throttle_drops_calls_inside_window() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let throttled = timing::throttle(move |_: ()| counter.set(counter.get() + 1), 50);

    throttled(());
    throttled(());
    throttled(());
    assert_eq!(calls.get(), 1);

    TimeoutFuture::new(120).await;
    throttled(());
    assert_eq!(calls.get(), 2);
}

fn bind_submit_behaviors(config: BehaviorConfig) {
    let document = dom::document().unwrap();
    let config = Rc::new(config);
    form_validation::init_form_validation(&document, &config).unwrap();
    loading::init_loading_states(&document, &config).unwrap();
}

const MEMO_FORM: &str = r#"<form data-validate="true">
    <div><input name="title" required></div>
    <button type="submit" id="save">Save Memo</button>
</form>"#;

#[wasm_bindgen_test]
fn failed_submit_is_cancelled_and_keeps_buttons_enabled() {
    let root = fixture(MEMO_FORM);
    bind_submit_behaviors(BehaviorConfig::default());
    let form = find(&root, "form");

    let proceeded = form.dispatch_event(&cancelable("submit")).unwrap();

    assert!(!proceeded);
    assert_eq!(count(&root, ".is-invalid"), 1);
    assert!(!form.class_list().contains("loading"));
    let save = find(&root, "#save");
    assert!(!save.has_attribute("disabled"));
    assert_eq!(save.inner_html(), "Save Memo");

    root.remove();
}

#[wasm_bindgen_test]
fn passing_submit_enters_loading_state() {
    let root = fixture(MEMO_FORM);
    bind_submit_behaviors(BehaviorConfig::default());
    let form = find(&root, "form");
    input(&root, "input[name=title]").set_value("Dentist");

    let proceeded = form.dispatch_event(&cancelable("submit")).unwrap();

    assert!(proceeded);
    assert!(form.class_list().contains("loading"));
    let save = find(&root, "#save");
    assert!(save.has_attribute("disabled"));
    assert_eq!(save.get_attribute("data-original-text").as_deref(), Some("Save Memo"));

    root.remove();
}

#[wasm_bindgen_test]
fn correcting_a_field_clears_its_marker_while_typing() {
    let root = fixture(MEMO_FORM);
    bind_submit_behaviors(BehaviorConfig::default());
    let form = find(&root, "form");
    form.dispatch_event(&cancelable("submit")).unwrap();
    assert_eq!(count(&root, ".is-invalid"), 1);

    let title = input(&root, "input[name=title]");
    title.set_value("Dentist");
    title.dispatch_event(&cancelable("input")).unwrap();

    assert_eq!(count(&root, ".is-invalid"), 0);
    assert_eq!(count(&root, &format!("[{}]", CLIENT_FEEDBACK_ATTR)), 0);

    root.remove();
}

fn dispatch_pageshow(persisted: bool) {
    let init = PageTransitionEventInit::new();
    init.set_persisted(persisted);
    let event = PageTransitionEvent::new_with_event_init_dict("pageshow", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn cache_restore_releases_loading_under_page_show_policy() {
    let root = fixture(r#"<form><button id="save">Save Memo</button></form>"#);
    let form = find(&root, "form");
    let save = find(&root, "#save");
    let config = BehaviorConfig {
        loading_restore: RestorePolicy::OnPageShow,
        ..BehaviorConfig::default()
    };

    loading::enter_for_submit(&form, &config);
    assert!(save.has_attribute("disabled"));

    dispatch_pageshow(true);

    assert!(!save.has_attribute("disabled"));
    assert_eq!(save.inner_html(), "Save Memo");
    assert!(!form.class_list().contains("loading"));

    root.remove();
}

#[wasm_bindgen_test]
fn manual_policy_keeps_loading_after_cache_restore() {
    let root = fixture(r#"<form><button id="save">Save Memo</button></form>"#);
    let form = find(&root, "form");

    loading::enter_for_submit(&form, &BehaviorConfig::default());
    dispatch_pageshow(true);

    assert!(find(&root, "#save").has_attribute("disabled"));
    loading::hide_loading(&form);
    assert!(!find(&root, "#save").has_attribute("disabled"));

    root.remove();
}

#[wasm_bindgen_test]
fn config_is_read_from_page_block() {
    assert_eq!(config::read_config(), Ok(BehaviorConfig::default()));

    let root = fixture(
        r#"<script type="application/json" id="page-behaviors-config">{"alert_timeout_ms": 1234, "loading_restore": "on_page_show"}</script>"#,
    );
    let parsed = config::read_config().unwrap();
    assert_eq!(parsed.alert_timeout_ms, 1234);
    assert_eq!(parsed.loading_restore, RestorePolicy::OnPageShow);
    root.remove();

    let root = fixture(r#"<script type="application/json" id="page-behaviors-config">{oops</script>"#);
    let err = config::read_config().unwrap_err();
    assert!(err.contains("page behavior config"));
    assert_eq!(config::load_config(), BehaviorConfig::default());
    root.remove();
}
