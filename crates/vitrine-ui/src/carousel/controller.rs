//! Carousel controller.
//!
//! Owns all carousel state and reacts to [`CarouselEvent`]s delivered by the
//! host. The controller lives in an `Rc<RefCell<_>>`; frame and timer
//! callbacks reach it through a weak reference, so dropping the last
//! [`Carousel`] handle turns anything still scheduled into a no-op.

use super::{dots, CardLayout, CarouselConfig, CarouselView, IndicatorHandler, SlideIndex};
use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};
use vitrine_core::{Debouncer, ScheduledTask, Scheduler};
use vitrine_foundation::{DragGesture, PointerEvent, PointerEventKind, SwipeDirection};

/// Input the host feeds into the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    /// Pointer or touch activity on the carousel wrapper.
    Pointer(PointerEvent),
    /// A pagination indicator was activated.
    IndicatorSelected(usize),
    /// The viewport changed size.
    Resized,
}

/// Snapshot of the controller's state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselState {
    pub current_slide: usize,
    pub total_slides: usize,
    pub is_dragging: bool,
    pub drag_start_x: Option<f32>,
    pub live_offset: f32,
    pub committed_offset: f32,
    pub last_breakpoint_width: f32,
}

pub struct CarouselController<V: CarouselView> {
    config: CarouselConfig,
    view: V,
    scheduler: Rc<dyn Scheduler>,
    card_count: usize,
    layout: CardLayout,
    slides: SlideIndex,
    drag: DragGesture,
    last_breakpoint_width: f32,
    frame: Option<ScheduledTask>,
    resize: Debouncer,
    this: Weak<RefCell<Self>>,
}

impl<V: CarouselView + 'static> CarouselController<V> {
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    pub fn current_slide(&self) -> usize {
        self.slides.current()
    }

    pub fn total_slides(&self) -> usize {
        self.layout.total_slides(self.card_count)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_slide: self.slides.current(),
            total_slides: self.total_slides(),
            is_dragging: self.drag.is_dragging(),
            drag_start_x: self.drag.start_x(),
            live_offset: self.drag.live_offset(),
            committed_offset: self.drag.committed_offset(),
            last_breakpoint_width: self.last_breakpoint_width,
        }
    }

    pub fn handle(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Pointer(pointer) => match pointer.kind {
                PointerEventKind::Down => self.drag_start(pointer.x),
                PointerEventKind::Move => self.drag_move(pointer.x),
                PointerEventKind::Up | PointerEventKind::Leave => self.drag_end(),
            },
            CarouselEvent::IndicatorSelected(index) => {
                self.go_to_slide(isize::try_from(index).unwrap_or(isize::MAX));
            }
            CarouselEvent::Resized => self.schedule_reconcile(),
        }
    }

    /// Shows slide `target`, clamped into range.
    pub fn go_to_slide(&mut self, target: isize) {
        self.slides.go_to(target);
        log::debug!("carousel: slide {}/{}", self.slides.current(), self.slides.total());
        self.settle();
    }

    /// Recomputes the layout for the current viewport and writes card widths.
    pub fn set_card_widths(&mut self) {
        self.layout = CardLayout::compute(
            self.view.viewport_width(),
            self.view.track_width(),
            &self.config,
        );
        let total = self.total_slides();
        self.slides.set_total(total);
        self.view.apply_card_width(self.layout.card_style());
    }

    /// Moves the track to the current slide and refreshes the active indicator.
    pub fn update_slider(&self) {
        let current = self.slides.current();
        self.view.apply_track_offset(self.layout.offset_for(current));
        self.view.refresh_indicators(current);
    }

    /// Rebuilds the pagination indicators from scratch.
    pub fn update_dots(&self) {
        let this = self.this.clone();
        let on_select: IndicatorHandler = Rc::new(move |index| {
            if let Some(controller) = this.upgrade() {
                controller
                    .borrow_mut()
                    .handle(CarouselEvent::IndicatorSelected(index));
            }
        });
        self.view
            .rebuild_indicators(&dots(self.total_slides(), self.slides.current()), on_select);
    }

    fn initialize(&mut self) {
        self.set_card_widths();
        self.update_dots();
        self.settle();
    }

    /// Pins the drag offsets to the current slide and renders it.
    fn settle(&mut self) {
        self.drag.snap_to(self.layout.offset_for(self.slides.current()));
        self.update_slider();
    }

    fn drag_start(&mut self, x: f32) {
        log::trace!("carousel: drag start at {x}");
        self.drag.begin(x);
        self.view.set_dragging(true);
        self.arm_frame();
    }

    fn drag_move(&mut self, x: f32) {
        if let Some(live) = self.drag.update(x) {
            log::trace!("carousel: drag at {x}, live offset {live}");
        }
    }

    fn drag_end(&mut self) {
        let Some(moved_by) = self.drag.finish() else {
            return;
        };
        self.view.set_dragging(false);
        if let Some(direction) = SwipeDirection::from_drag(moved_by, self.config.drag_threshold) {
            if self.slides.step(direction) {
                log::debug!(
                    "carousel: swipe {direction:?} by {moved_by} to slide {}",
                    self.slides.current()
                );
            }
        }
        self.settle();
    }

    /// Schedules the next drag frame. Replacing `frame` cancels any frame
    /// still pending, so there is at most one loop.
    fn arm_frame(&mut self) {
        let this = self.this.clone();
        self.frame = Some(self.scheduler.request_frame(Box::new(move |_timestamp| {
            if let Some(controller) = this.upgrade() {
                controller.borrow_mut().on_frame();
            }
        })));
    }

    fn on_frame(&mut self) {
        if !self.drag.is_dragging() {
            self.frame = None;
            return;
        }
        self.view.apply_track_offset(self.drag.live_offset());
        self.arm_frame();
    }

    fn schedule_reconcile(&mut self) {
        let this = self.this.clone();
        let scheduler = Rc::clone(&self.scheduler);
        self.resize.schedule(scheduler.as_ref(), move || {
            if let Some(controller) = this.upgrade() {
                controller.borrow_mut().reconcile();
            }
        });
    }

    /// Applies a settled viewport size.
    fn reconcile(&mut self) {
        let width = self.view.viewport_width();
        if (width - self.last_breakpoint_width).abs() < self.config.resize_noise {
            log::trace!(
                "carousel: ignoring resize {} -> {width}",
                self.last_breakpoint_width
            );
            return;
        }

        let previous = self.layout.breakpoint();
        self.last_breakpoint_width = width;
        self.set_card_widths();
        if self.layout.breakpoint() != previous {
            log::debug!(
                "carousel: breakpoint {previous:?} -> {:?}, back to first slide",
                self.layout.breakpoint()
            );
            self.slides.reset();
        }
        self.update_dots();
        self.settle();
    }
}

/// Shared handle to a mounted carousel.
pub struct Carousel<V: CarouselView> {
    inner: Rc<RefCell<CarouselController<V>>>,
}

impl<V: CarouselView> Clone for Carousel<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V: CarouselView + 'static> Carousel<V> {
    /// Sizes the cards, builds the pagination and shows the first slide.
    ///
    /// Returns `None` when the view has no cards; the carousel stays inert.
    pub fn mount(view: V, scheduler: Rc<dyn Scheduler>, config: CarouselConfig) -> Option<Self> {
        let card_count = view.card_count();
        if card_count == 0 {
            log::debug!("carousel: no cards, not mounting");
            return None;
        }

        let viewport_width = view.viewport_width();
        let layout = CardLayout::compute(viewport_width, view.track_width(), &config);
        let slides = SlideIndex::new(layout.total_slides(card_count));
        let resize = Debouncer::new(config.resize_debounce);
        let inner = Rc::new_cyclic(|this| {
            RefCell::new(CarouselController {
                config,
                view,
                scheduler,
                card_count,
                layout,
                slides,
                drag: DragGesture::new(),
                last_breakpoint_width: viewport_width,
                frame: None,
                resize,
                this: this.clone(),
            })
        });
        inner.borrow_mut().initialize();
        log::debug!(
            "carousel: mounted {card_count} cards in {} slides",
            inner.borrow().total_slides()
        );
        Some(Self { inner })
    }

    pub fn dispatch(&self, event: CarouselEvent) {
        self.inner.borrow_mut().handle(event);
    }

    pub fn go_to_slide(&self, target: isize) {
        self.inner.borrow_mut().go_to_slide(target);
    }

    pub fn state(&self) -> CarouselState {
        self.inner.borrow().state()
    }

    pub fn controller(&self) -> Ref<'_, CarouselController<V>> {
        self.inner.borrow()
    }

    pub fn with_controller<R>(&self, f: impl FnOnce(&mut CarouselController<V>) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}
