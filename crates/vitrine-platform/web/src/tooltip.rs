use crate::dom::{self, toggle_class};
use crate::error::MountError;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use vitrine_ui::{TooltipGroup, TooltipTap, TooltipView};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

const TOOLTIP_SELECTOR: &str = "[data-tooltip]";
const ACTIVE_CLASS: &str = "tooltip-active";

pub struct DomTooltipView {
    elements: Vec<Element>,
}

impl TooltipView for DomTooltipView {
    fn set_active(&self, index: usize, active: bool) {
        if let Some(element) = self.elements.get(index) {
            toggle_class(element, ACTIVE_CLASS, active);
        }
    }
}

pub struct TooltipMount {
    group: Rc<RefCell<TooltipGroup<DomTooltipView>>>,
    _listeners: Vec<EventListener>,
}

impl TooltipMount {
    pub fn active(&self) -> Option<usize> {
        self.group.borrow().active()
    }
}

/// Returns `Ok(None)` when the page has no tooltips.
pub fn mount_tooltips(window: &Window, document: &Document) -> Result<Option<TooltipMount>, MountError> {
    let elements = dom::query_all(document, TOOLTIP_SELECTOR)?;
    if elements.is_empty() {
        log::debug!("no tooltips on page");
        return Ok(None);
    }
    let group = Rc::new(RefCell::new(TooltipGroup::new(
        DomTooltipView {
            elements: elements.clone(),
        },
        elements.len(),
    )));

    let mut listeners = Vec::with_capacity(elements.len() + 1);
    for (index, element) in elements.iter().enumerate() {
        let group = Rc::clone(&group);
        let window = window.clone();
        listeners.push(EventListener::new_with_options(
            element,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let width = dom::viewport_width(&window);
                if group.borrow_mut().tap(index, width) == TooltipTap::Toggled {
                    event.prevent_default();
                }
            },
        ));
    }
    {
        let group = Rc::clone(&group);
        listeners.push(EventListener::new(document, "click", move |event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest(TOOLTIP_SELECTOR).ok().flatten())
                .is_some();
            if !inside {
                group.borrow_mut().dismiss_all();
            }
        }));
    }

    log::debug!("{} tooltips mounted", elements.len());
    Ok(Some(TooltipMount {
        group,
        _listeners: listeners,
    }))
}
