//! Small DOM helpers shared by the component mounts.

use crate::error::{js_message, MountError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub(crate) fn query(document: &Document, selector: &'static str) -> Result<Option<Element>, MountError> {
    document
        .query_selector(selector)
        .map_err(|err| MountError::dom(selector, err))
}

pub(crate) fn query_html(
    document: &Document,
    selector: &'static str,
) -> Result<Option<HtmlElement>, MountError> {
    Ok(query(document, selector)?.and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

pub(crate) fn query_all(document: &Document, selector: &'static str) -> Result<Vec<Element>, MountError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|err| MountError::dom(selector, err))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(crate) fn query_all_html(
    document: &Document,
    selector: &'static str,
) -> Result<Vec<HtmlElement>, MountError> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Window width in CSS pixels, or 0 when the host does not report one.
pub(crate) fn viewport_width(window: &Window) -> f32 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default() as f32
}

pub(crate) fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::warn!("toggling class {class:?} failed: {}", js_message(&err));
    }
}

/// Logs a failed DOM write; view methods have no error channel.
pub(crate) fn log_failure(operation: &str, result: Result<impl Sized, JsValue>) {
    if let Err(err) = result {
        log::warn!("{operation} failed: {}", js_message(&err));
    }
}
