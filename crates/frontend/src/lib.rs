pub mod app;
pub mod domain;
pub mod shared;
pub mod system;

use system::config::AppConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    app::when_ready(|| {
        let config = AppConfig::from_document();
        // initializes logging using the `log` crate
        _ = console_log::init_with_level(config.log_level);
        app::boot(config);
    });
}
