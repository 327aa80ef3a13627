pub mod api;
pub mod behaviors;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

fn init_page() {
    // initializes logging using the `log` crate; narrowed once the config is known
    _ = console_log::init_with_level(log::Level::Trace);

    let config = shared::config::load_config();
    log::set_max_level(shared::config::log_level(&config).to_level_filter());

    let result = shared::dom::document()
        .and_then(|document| behaviors::init_page_behaviors(&document, config));
    if let Err(err) = result {
        log::error!("Failed to initialize page behaviors: {}", err);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(err) = behaviors::on_page_ready(init_page) {
        web_sys::console::error_1(&err.into());
    }
}
