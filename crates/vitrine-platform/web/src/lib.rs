//! Browser bindings for Vitrine.
//!
//! Implements every view trait from `vitrine-ui` on top of `web-sys` and
//! translates DOM events into component input. [`mount_page`] attaches all
//! components found in the current document.

mod anchor;
mod carousel;
mod dom;
mod error;
mod menu;
mod nav;
mod scheduler;
mod tooltip;

pub use anchor::{mount_anchors, AnchorMount, DomScrollView};
pub use carousel::{mount_carousel, CarouselMount, DomCarouselView};
pub use error::MountError;
pub use menu::{mount_menu, DomMenuView, MenuMount};
pub use nav::highlight_current_page;
pub use scheduler::BrowserScheduler;
pub use tooltip::{mount_tooltips, DomTooltipView, TooltipMount};

use gloo::events::EventListener;
use std::rc::Rc;
use vitrine_foundation::{PointerEvent, PointerEventKind};
use web_sys::{MouseEvent, TouchEvent};

/// Converts browser input events into pointer samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

impl WebPlatform {
    pub fn new() -> Self {
        Self
    }

    /// Mouse samples use the page coordinate.
    pub fn mouse_pointer(&self, kind: PointerEventKind, event: &MouseEvent) -> PointerEvent {
        PointerEvent::mouse(kind, event.page_x() as f32)
    }

    /// Touch samples use the first active touch. `touchend` has no active
    /// touches left, so the lifted touch is used instead.
    pub fn touch_pointer(&self, kind: PointerEventKind, event: &TouchEvent) -> Option<PointerEvent> {
        let x = event
            .touches()
            .get(0)
            .or_else(|| event.changed_touches().get(0))
            .map(|touch| touch.client_x() as f32);
        touch_sample(kind, x)
    }
}

/// Builds a touch sample from the selected touch's x. Without a touch only
/// releases get through, so a bare `touchend` still ends the interaction.
fn touch_sample(kind: PointerEventKind, x: Option<f32>) -> Option<PointerEvent> {
    match (x, kind) {
        (Some(x), _) => Some(PointerEvent::touch(kind, x)),
        (None, PointerEventKind::Up | PointerEventKind::Leave) => Some(PointerEvent::touch(kind, 0.0)),
        (None, _) => None,
    }
}

/// `document.readyState` values other than `loading` mean parsing is done.
fn document_is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Everything mounted on the page. Dropping it detaches all listeners.
#[derive(Default)]
pub struct Page {
    pub carousel: Option<CarouselMount>,
    pub menu: Option<MenuMount>,
    pub anchors: Option<AnchorMount>,
    pub tooltips: Option<TooltipMount>,
    pub highlighted_links: usize,
}

impl Page {
    /// Leaks the page so its listeners live as long as the document.
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

/// Mounts every component present in the document.
///
/// Only a missing `window` or `document` fails the whole page. A component
/// whose DOM calls fail is logged and skipped; the rest still mount.
pub fn mount_page() -> Result<Page, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let scheduler = Rc::new(BrowserScheduler);

    let page = Page {
        carousel: report("carousel", mount_carousel(&window, &document, scheduler)).flatten(),
        menu: report("menu", mount_menu(&document)).flatten(),
        anchors: report("anchors", mount_anchors(&window, &document)),
        tooltips: report("tooltips", mount_tooltips(&window, &document)).flatten(),
        highlighted_links: report("active link", highlight_current_page(&window, &document))
            .unwrap_or_default(),
    };
    log::info!(
        "page mounted: carousel={} menu={} tooltips={}",
        page.carousel.is_some(),
        page.menu.is_some(),
        page.tooltips.is_some()
    );
    Ok(page)
}

fn report<T>(component: &str, result: Result<T, MountError>) -> Option<T> {
    match result {
        Ok(mounted) => Some(mounted),
        Err(err) => {
            log::error!("{component} failed to mount: {err}");
            None
        }
    }
}

/// Runs `f` once the document has been parsed: immediately if it already
/// has, otherwise on `DOMContentLoaded`.
pub fn run_when_ready(f: impl FnOnce() + 'static) -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    if document_is_parsed(&document.ready_state()) {
        f();
        return Ok(());
    }
    EventListener::once(&document, "DOMContentLoaded", move |_event| f()).forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_with_position_keeps_its_kind() {
        let sample = touch_sample(PointerEventKind::Move, Some(120.0));
        assert_eq!(sample, Some(PointerEvent::touch(PointerEventKind::Move, 120.0)));
    }

    #[test]
    fn touchend_without_touches_still_releases() {
        assert_eq!(
            touch_sample(PointerEventKind::Up, None),
            Some(PointerEvent::touch(PointerEventKind::Up, 0.0))
        );
    }

    #[test]
    fn start_or_move_without_touches_is_dropped() {
        assert_eq!(touch_sample(PointerEventKind::Down, None), None);
        assert_eq!(touch_sample(PointerEventKind::Move, None), None);
    }

    #[test]
    fn only_loading_state_defers_mounting() {
        assert!(!document_is_parsed("loading"));
        assert!(document_is_parsed("interactive"));
        assert!(document_is_parsed("complete"));
    }
}
