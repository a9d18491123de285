use crate::dom::{self, log_failure};
use crate::error::MountError;
use vitrine_ui::nav::{current_page, is_current_page, ACTIVE_LINK_COLOR};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

const NAV_LINK_SELECTOR: &str = ".nav-link";

/// Colors every navigation link that points at the current page. Returns
/// how many links were highlighted.
pub fn highlight_current_page(window: &Window, document: &Document) -> Result<usize, MountError> {
    let pathname = window
        .location()
        .pathname()
        .map_err(|err| MountError::dom("location.pathname", err))?;
    let page = current_page(&pathname);

    let mut highlighted = 0;
    for link in dom::query_all(document, NAV_LINK_SELECTOR)? {
        if !is_current_page(link.get_attribute("href").as_deref(), page) {
            continue;
        }
        let Some(link) = link.dyn_ref::<HtmlElement>() else {
            continue;
        };
        log_failure("link color", link.style().set_property("color", ACTIVE_LINK_COLOR));
        highlighted += 1;
    }
    log::debug!("{highlighted} navigation links match {page:?}");
    Ok(highlighted)
}
