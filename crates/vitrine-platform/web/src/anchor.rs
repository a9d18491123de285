use crate::dom::{self, log_failure};
use crate::error::{js_message, MountError};
use gloo::events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use vitrine_ui::{AnchorNavigator, ScrollView};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, PopStateEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub struct DomScrollView {
    window: Window,
    document: Document,
}

impl ScrollView for DomScrollView {
    fn has_target(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn scroll_to(&self, id: &str) {
        let Some(target) = self.document.get_element_by_id(id) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn push_entry(&self, id: &str) {
        match self.window.history() {
            Ok(history) => log_failure(
                "history.pushState",
                history.push_state_with_url(&JsValue::from_str(id), "", Some(&format!("#{id}"))),
            ),
            Err(err) => log::warn!("window.history failed: {}", js_message(&err)),
        }
    }

    fn current_entry(&self) -> Option<String> {
        self.window
            .history()
            .and_then(|history| history.state())
            .ok()
            .and_then(|state| state.as_string())
    }
}

pub struct AnchorMount {
    _listeners: Vec<EventListener>,
}

/// Intercepts in-page links and restores scroll positions on back/forward.
/// Always mounts; a page without anchors still gets the `popstate` handler.
pub fn mount_anchors(window: &Window, document: &Document) -> Result<AnchorMount, MountError> {
    let navigator = Rc::new(AnchorNavigator::new(DomScrollView {
        window: window.clone(),
        document: document.clone(),
    }));
    let anchors = dom::query_all(document, ANCHOR_SELECTOR)?;

    let mut listeners = Vec::with_capacity(anchors.len() + 1);
    for anchor in &anchors {
        let navigator = Rc::clone(&navigator);
        let href = anchor.get_attribute("href").unwrap_or_default();
        listeners.push(EventListener::new_with_options(
            anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if navigator.on_click(&href).prevents_default() {
                    event.prevent_default();
                }
            },
        ));
    }
    {
        let navigator = Rc::clone(&navigator);
        listeners.push(EventListener::new(window, "popstate", move |event| {
            let state = event
                .dyn_ref::<PopStateEvent>()
                .and_then(|event| event.state().as_string());
            navigator.on_pop(state.as_deref());
        }));
    }

    log::debug!("anchor navigation mounted on {} links", anchors.len());
    Ok(AnchorMount {
        _listeners: listeners,
    })
}
