use crate::dom::{self, log_failure, toggle_class};
use crate::error::MountError;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use vitrine_ui::{MenuController, MenuView};
use web_sys::{Document, Element, HtmlElement};

const HAMBURGER_SELECTOR: &str = ".hamburger";
const NAV_SELECTOR: &str = ".main-nav";
const OVERLAY_SELECTOR: &str = ".menu-overlay";
const LINK_SELECTOR: &str = ".nav-link, .nav-btn";
const ACTIVE_CLASS: &str = "is-active";

pub struct DomMenuView {
    hamburger: Element,
    nav: Element,
    overlay: Option<Element>,
    body: Option<HtmlElement>,
}

impl MenuView for DomMenuView {
    fn render(&self, open: bool) {
        toggle_class(&self.hamburger, ACTIVE_CLASS, open);
        toggle_class(&self.nav, ACTIVE_CLASS, open);
        if let Some(overlay) = &self.overlay {
            toggle_class(overlay, ACTIVE_CLASS, open);
        }
        log_failure(
            "aria-expanded",
            self.hamburger
                .set_attribute("aria-expanded", if open { "true" } else { "false" }),
        );
        if let Some(body) = &self.body {
            log_failure(
                "scroll lock",
                body.style()
                    .set_property("overflow", if open { "hidden" } else { "" }),
            );
        }
    }
}

pub struct MenuMount {
    menu: Rc<RefCell<MenuController<DomMenuView>>>,
    _listeners: Vec<EventListener>,
}

impl MenuMount {
    pub fn is_open(&self) -> bool {
        self.menu.borrow().is_open()
    }
}

/// Wires the hamburger, the overlay and every navigation link.
///
/// Returns `Ok(None)` unless both the hamburger and the navigation panel exist.
pub fn mount_menu(document: &Document) -> Result<Option<MenuMount>, MountError> {
    let (Some(hamburger), Some(nav)) = (
        dom::query(document, HAMBURGER_SELECTOR)?,
        dom::query(document, NAV_SELECTOR)?,
    ) else {
        log::debug!("menu markup not found");
        return Ok(None);
    };
    let overlay = dom::query(document, OVERLAY_SELECTOR)?;
    let links = dom::query_all(document, LINK_SELECTOR)?;

    let menu = Rc::new(RefCell::new(MenuController::new(DomMenuView {
        hamburger: hamburger.clone(),
        nav,
        overlay: overlay.clone(),
        body: document.body(),
    })));

    let mut listeners = Vec::with_capacity(links.len() + 2);
    {
        let menu = Rc::clone(&menu);
        listeners.push(EventListener::new(&hamburger, "click", move |_event| {
            menu.borrow_mut().toggle();
        }));
    }
    for target in overlay.iter().chain(links.iter()) {
        let menu = Rc::clone(&menu);
        listeners.push(EventListener::new(target, "click", move |_event| {
            menu.borrow_mut().close();
        }));
    }

    log::debug!("menu mounted with {} links", links.len());
    Ok(Some(MenuMount {
        menu,
        _listeners: listeners,
    }))
}
