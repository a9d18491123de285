//! Wasm entry point for the portfolio site.
//!
//! Load the generated module from every page; it mounts whatever components
//! the page's markup contains once the document is parsed.

use vitrine_platform_web::{mount_page, run_when_ready};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    #[cfg(feature = "logging")]
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    run_when_ready(|| match mount_page() {
        Ok(page) => page.keep_alive(),
        Err(err) => log::error!("portfolio scripts not mounted: {err}"),
    })?;
    Ok(())
}
