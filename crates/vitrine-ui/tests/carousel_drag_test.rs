//! Drag and swipe handling.

use vitrine_foundation::{PointerEvent, PointerEventKind};
use vitrine_testing::{ManualScheduler, RecordingCarouselView};
use vitrine_ui::{Carousel, CarouselConfig, CarouselEvent};

struct Harness {
    carousel: Carousel<RecordingCarouselView>,
    view: RecordingCarouselView,
    scheduler: ManualScheduler,
}

impl Harness {
    fn new(cards: usize, viewport: f32) -> Self {
        Self::with_config(cards, viewport, CarouselConfig::default())
    }

    fn with_config(cards: usize, viewport: f32, config: CarouselConfig) -> Self {
        let view = RecordingCarouselView::new(cards, viewport);
        let scheduler = ManualScheduler::new();
        let carousel =
            Carousel::mount(view.clone(), scheduler.handle(), config).expect("carousel mounts");
        Self {
            carousel,
            view,
            scheduler,
        }
    }

    fn mouse(&self, kind: PointerEventKind, x: f32) {
        self.carousel
            .dispatch(CarouselEvent::Pointer(PointerEvent::mouse(kind, x)));
    }

    fn touch(&self, kind: PointerEventKind, x: f32) {
        self.carousel
            .dispatch(CarouselEvent::Pointer(PointerEvent::touch(kind, x)));
    }

    /// Full mouse gesture moving the pointer by `delta`.
    fn swipe(&self, delta: f32) {
        self.mouse(PointerEventKind::Down, 500.0);
        self.mouse(PointerEventKind::Move, 500.0 + delta);
        self.mouse(PointerEventKind::Up, 500.0 + delta);
    }

    fn current(&self) -> usize {
        self.carousel.state().current_slide
    }
}

#[test]
fn swipe_past_threshold_advances_one_slide() {
    let harness = Harness::new(5, 1300.0);

    harness.swipe(-60.0);

    assert_eq!(harness.current(), 1);
    assert_eq!(harness.view.active_indicators(), vec![1]);
    assert_eq!(harness.view.last_offset(), Some(-1340.0));
}

#[test]
fn swipe_below_threshold_keeps_slide() {
    let harness = Harness::new(5, 1300.0);

    harness.swipe(-40.0);

    assert_eq!(harness.current(), 0);
    assert_eq!(harness.view.last_offset(), Some(0.0));
}

#[test]
fn swipe_back_on_first_slide_stays() {
    let harness = Harness::new(5, 1300.0);

    harness.swipe(60.0);

    assert_eq!(harness.current(), 0);
}

#[test]
fn swipe_back_from_middle_goes_back() {
    let harness = Harness::new(5, 800.0);
    harness.carousel.go_to_slide(3);

    harness.swipe(75.0);

    assert_eq!(harness.current(), 2);
}

#[test]
fn swipe_forward_on_last_slide_stays() {
    let harness = Harness::new(5, 1300.0);
    harness.carousel.go_to_slide(2);

    harness.swipe(-300.0);

    assert_eq!(harness.current(), 2);
}

#[test]
fn long_drag_moves_a_single_slide() {
    let harness = Harness::new(8, 700.0);

    harness.swipe(-2000.0);

    assert_eq!(harness.current(), 1);
}

#[test]
fn frame_loop_renders_live_offset_while_dragging() {
    let harness = Harness::new(5, 800.0);
    harness.carousel.go_to_slide(1);

    harness.touch(PointerEventKind::Down, 400.0);
    assert!(harness.view.is_dragging());
    assert_eq!(harness.scheduler.pending_frames(), 1);

    harness.touch(PointerEventKind::Move, 370.0);
    assert_eq!(harness.scheduler.advance_frame(), 1);
    assert_eq!(harness.view.last_offset(), Some(-840.0 - 30.0));

    harness.touch(PointerEventKind::Move, 350.0);
    harness.scheduler.advance_frame();
    assert_eq!(harness.view.last_offset(), Some(-840.0 - 50.0));

    let state = harness.carousel.state();
    assert!(state.is_dragging);
    assert_eq!(state.drag_start_x, Some(400.0));
    assert_eq!(state.live_offset, -890.0);
    assert_eq!(state.committed_offset, -840.0);
    assert_eq!(state.current_slide, 1);
}

#[test]
fn frame_loop_stops_on_first_frame_after_release() {
    let harness = Harness::new(5, 800.0);

    harness.mouse(PointerEventKind::Down, 400.0);
    harness.mouse(PointerEventKind::Move, 300.0);
    harness.scheduler.advance_frame();
    harness.mouse(PointerEventKind::Up, 300.0);
    let snapped = harness.view.last_offset();

    assert_eq!(harness.scheduler.pending_frames(), 1);
    harness.scheduler.advance_frame();

    assert_eq!(harness.scheduler.pending_frames(), 0);
    assert_eq!(harness.view.last_offset(), snapped);
    assert_eq!(snapped, Some(-840.0));
}

#[test]
fn leaving_the_wrapper_commits_like_release() {
    let harness = Harness::new(5, 1300.0);

    harness.mouse(PointerEventKind::Down, 600.0);
    harness.mouse(PointerEventKind::Move, 520.0);
    harness.mouse(PointerEventKind::Leave, 520.0);

    assert_eq!(harness.current(), 1);
    assert!(!harness.view.is_dragging());
}

#[test]
fn moves_and_releases_while_idle_are_ignored() {
    let harness = Harness::new(5, 1300.0);
    let renders = harness.view.offsets().len();

    harness.mouse(PointerEventKind::Move, 100.0);
    harness.mouse(PointerEventKind::Up, 100.0);
    harness.mouse(PointerEventKind::Leave, 100.0);

    assert_eq!(harness.current(), 0);
    assert_eq!(harness.view.offsets().len(), renders);
    assert_eq!(harness.view.dragging_changes(), 0);
    assert_eq!(harness.scheduler.pending_frames(), 0);
}

#[test]
fn restarting_a_drag_keeps_a_single_frame_loop() {
    let harness = Harness::new(5, 1300.0);

    harness.mouse(PointerEventKind::Down, 400.0);
    harness.touch(PointerEventKind::Down, 380.0);

    assert_eq!(harness.scheduler.pending_frames(), 1);
    assert_eq!(harness.carousel.state().drag_start_x, Some(380.0));
}

#[test]
fn drag_after_indicator_click_starts_from_displayed_slide() {
    let harness = Harness::new(6, 800.0);
    harness.view.click_indicator(3);

    harness.mouse(PointerEventKind::Down, 300.0);
    harness.mouse(PointerEventKind::Move, 290.0);
    harness.scheduler.advance_frame();

    assert_eq!(harness.view.last_offset(), Some(-3.0 * 840.0 - 10.0));
}

#[test]
fn threshold_comes_from_config() {
    let harness = Harness::with_config(
        5,
        1300.0,
        CarouselConfig::default().with_drag_threshold(100.0),
    );

    harness.swipe(-80.0);
    assert_eq!(harness.current(), 0);

    harness.swipe(-120.0);
    assert_eq!(harness.current(), 1);
}

#[test]
fn dropping_the_carousel_cancels_the_frame_loop() {
    let harness = Harness::new(5, 1300.0);
    harness.mouse(PointerEventKind::Down, 400.0);
    let Harness {
        carousel,
        view,
        scheduler,
    } = harness;

    drop(carousel);

    assert_eq!(scheduler.pending_frames(), 0);
    assert_eq!(scheduler.run_frame(), 0);
    assert!(view.is_dragging());
}
