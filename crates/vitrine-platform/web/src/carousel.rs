//! Testimonial carousel on top of the DOM.

use crate::dom::{self, log_failure, toggle_class};
use crate::error::{js_message, MountError};
use crate::WebPlatform;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use vitrine_core::Scheduler;
use vitrine_foundation::PointerEventKind;
use vitrine_ui::{CardWidth, Carousel, CarouselConfig, CarouselEvent, CarouselView, Dot, IndicatorHandler};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, TouchEvent, Window};

pub const WRAPPER_SELECTOR: &str = ".testimonials-slider-wrapper";
pub const TRACK_SELECTOR: &str = ".testimonials-slider";
pub const CARD_SELECTOR: &str = ".testimonial-card";
pub const DOTS_SELECTOR: &str = ".testimonials-dots";

const DRAGGING_CLASS: &str = "dragging";
const DOT_CLASS: &str = "dot";
const ACTIVE_CLASS: &str = "active";

pub struct DomCarouselView {
    window: Window,
    document: Document,
    wrapper: HtmlElement,
    track: HtmlElement,
    cards: Vec<HtmlElement>,
    dots: Option<Element>,
    dot_elements: RefCell<Vec<Element>>,
    dot_listeners: RefCell<Vec<EventListener>>,
}

impl CarouselView for DomCarouselView {
    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn viewport_width(&self) -> f32 {
        dom::viewport_width(&self.window)
    }

    fn track_width(&self) -> f32 {
        self.wrapper.offset_width() as f32
    }

    fn apply_card_width(&self, width: CardWidth) {
        let css = width.to_css();
        for card in &self.cards {
            log_failure("card width", card.style().set_property("width", &css));
        }
    }

    fn apply_track_offset(&self, offset: f32) {
        log_failure(
            "track transform",
            self.track
                .style()
                .set_property("transform", &format!("translateX({offset}px)")),
        );
    }

    fn set_dragging(&self, dragging: bool) {
        toggle_class(&self.wrapper, DRAGGING_CLASS, dragging);
    }

    fn rebuild_indicators(&self, dots: &[Dot], on_select: IndicatorHandler) {
        let Some(container) = &self.dots else {
            return;
        };
        container.set_inner_html("");

        let mut elements = Vec::with_capacity(dots.len());
        let mut listeners = Vec::with_capacity(dots.len());
        for dot in dots {
            let element = match self.document.create_element("span") {
                Ok(element) => element,
                Err(err) => {
                    log::warn!("creating indicator failed: {}", js_message(&err));
                    continue;
                }
            };
            toggle_class(&element, DOT_CLASS, true);
            toggle_class(&element, ACTIVE_CLASS, dot.active);
            log_failure(
                "indicator index",
                element.set_attribute("data-slide", &dot.index.to_string()),
            );

            let on_select = Rc::clone(&on_select);
            let index = dot.index;
            listeners.push(EventListener::new(&element, "click", move |_event| {
                on_select(index);
            }));
            log_failure("append indicator", container.append_child(&element));
            elements.push(element);
        }

        // Old listeners go with their detached elements.
        *self.dot_listeners.borrow_mut() = listeners;
        *self.dot_elements.borrow_mut() = elements;
    }

    fn refresh_indicators(&self, active: usize) {
        for (index, element) in self.dot_elements.borrow().iter().enumerate() {
            toggle_class(element, ACTIVE_CLASS, index == active);
        }
    }
}

/// A mounted carousel and the listeners feeding it.
pub struct CarouselMount {
    carousel: Carousel<DomCarouselView>,
    _listeners: Vec<EventListener>,
}

impl CarouselMount {
    pub fn carousel(&self) -> &Carousel<DomCarouselView> {
        &self.carousel
    }
}

/// Attaches the carousel to its markup.
///
/// Returns `Ok(None)` when the track is missing or holds no cards.
pub fn mount_carousel(
    window: &Window,
    document: &Document,
    scheduler: Rc<dyn Scheduler>,
) -> Result<Option<CarouselMount>, MountError> {
    let (Some(wrapper), Some(track)) = (
        dom::query_html(document, WRAPPER_SELECTOR)?,
        dom::query_html(document, TRACK_SELECTOR)?,
    ) else {
        log::debug!("carousel markup not found");
        return Ok(None);
    };
    let cards = dom::query_all_html(document, CARD_SELECTOR)?;
    let dots = dom::query(document, DOTS_SELECTOR)?;
    if dots.is_none() {
        log::debug!("carousel has no indicator container; pagination disabled");
    }

    let config = CarouselConfig::default().apply_overrides(|name| wrapper.get_attribute(name));
    let view = DomCarouselView {
        window: window.clone(),
        document: document.clone(),
        wrapper: wrapper.clone(),
        track,
        cards,
        dots,
        dot_elements: RefCell::new(Vec::new()),
        dot_listeners: RefCell::new(Vec::new()),
    };
    let Some(carousel) = Carousel::mount(view, scheduler, config) else {
        return Ok(None);
    };

    let platform = WebPlatform::new();
    let mut listeners = Vec::new();

    // mousedown is cancelled so the browser does not start a text selection.
    for (name, kind, prevent_default) in [
        ("mousedown", PointerEventKind::Down, true),
        ("mousemove", PointerEventKind::Move, false),
        ("mouseup", PointerEventKind::Up, false),
        ("mouseleave", PointerEventKind::Leave, false),
    ] {
        let carousel = carousel.clone();
        let options = if prevent_default {
            EventListenerOptions::enable_prevent_default()
        } else {
            EventListenerOptions::default()
        };
        listeners.push(EventListener::new_with_options(
            &wrapper,
            name,
            options,
            move |event: &Event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if prevent_default {
                    event.prevent_default();
                }
                carousel.dispatch(CarouselEvent::Pointer(platform.mouse_pointer(kind, mouse)));
            },
        ));
    }

    for (name, kind) in [
        ("touchstart", PointerEventKind::Down),
        ("touchmove", PointerEventKind::Move),
        ("touchend", PointerEventKind::Up),
    ] {
        let carousel = carousel.clone();
        listeners.push(EventListener::new(&wrapper, name, move |event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            if let Some(pointer) = platform.touch_pointer(kind, touch) {
                carousel.dispatch(CarouselEvent::Pointer(pointer));
            }
        }));
    }

    // Long presses and native image drags would fight the swipe.
    for name in ["contextmenu", "dragstart"] {
        listeners.push(EventListener::new_with_options(
            &wrapper,
            name,
            EventListenerOptions::enable_prevent_default(),
            |event| event.prevent_default(),
        ));
    }

    {
        let carousel = carousel.clone();
        listeners.push(EventListener::new(window, "resize", move |_event| {
            carousel.dispatch(CarouselEvent::Resized);
        }));
    }

    log::debug!("carousel mounted");
    Ok(Some(CarouselMount {
        carousel,
        _listeners: listeners,
    }))
}
