//! Recording implementations of the component view traits.
//!
//! Each view is a cheap `Clone` over shared state: hand one clone to the
//! component and keep another in the test to inspect or mutate the "page".

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use vitrine_ui::{CardWidth, CarouselView, Dot, IndicatorHandler, MenuView, ScrollView, TooltipView};

// ============================================================================
// Carousel
// ============================================================================

#[derive(Default)]
struct CarouselPage {
    card_count: usize,
    viewport_width: f32,
    track_width: f32,
    card_width: Option<CardWidth>,
    offsets: Vec<f32>,
    dragging: bool,
    dragging_changes: usize,
    indicators: Vec<Dot>,
    indicator_rebuilds: usize,
    on_select: Option<IndicatorHandler>,
}

/// Fake carousel markup.
///
/// The track is as wide as the viewport minus `gutter` on both sides,
/// mimicking a padded page container.
#[derive(Clone)]
pub struct RecordingCarouselView {
    page: Rc<RefCell<CarouselPage>>,
    gutter: f32,
}

impl RecordingCarouselView {
    pub fn new(card_count: usize, viewport_width: f32) -> Self {
        Self::with_gutter(card_count, viewport_width, 0.0)
    }

    pub fn with_gutter(card_count: usize, viewport_width: f32, gutter: f32) -> Self {
        let view = Self {
            page: Rc::new(RefCell::new(CarouselPage {
                card_count,
                ..CarouselPage::default()
            })),
            gutter,
        };
        view.resize(viewport_width);
        view
    }

    /// Changes the viewport; the track follows.
    pub fn resize(&self, viewport_width: f32) {
        let mut page = self.page.borrow_mut();
        page.viewport_width = viewport_width;
        page.track_width = (viewport_width - 2.0 * self.gutter).max(0.0);
    }

    pub fn card_width(&self) -> Option<CardWidth> {
        self.page.borrow().card_width
    }

    /// Every translation written to the track, oldest first.
    pub fn offsets(&self) -> Vec<f32> {
        self.page.borrow().offsets.clone()
    }

    pub fn last_offset(&self) -> Option<f32> {
        self.page.borrow().offsets.last().copied()
    }

    pub fn is_dragging(&self) -> bool {
        self.page.borrow().dragging
    }

    pub fn dragging_changes(&self) -> usize {
        self.page.borrow().dragging_changes
    }

    pub fn indicators(&self) -> Vec<Dot> {
        self.page.borrow().indicators.clone()
    }

    pub fn indicator_rebuilds(&self) -> usize {
        self.page.borrow().indicator_rebuilds
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        self.page
            .borrow()
            .indicators
            .iter()
            .filter(|dot| dot.active)
            .map(|dot| dot.index)
            .collect()
    }

    /// Simulates a click on indicator `index`. Returns false if it does not exist.
    pub fn click_indicator(&self, index: usize) -> bool {
        let handler = {
            let page = self.page.borrow();
            if index >= page.indicators.len() {
                return false;
            }
            page.on_select.clone()
        };
        match handler {
            Some(handler) => {
                handler(index);
                true
            }
            None => false,
        }
    }
}

impl CarouselView for RecordingCarouselView {
    fn card_count(&self) -> usize {
        self.page.borrow().card_count
    }

    fn viewport_width(&self) -> f32 {
        self.page.borrow().viewport_width
    }

    fn track_width(&self) -> f32 {
        self.page.borrow().track_width
    }

    fn apply_card_width(&self, width: CardWidth) {
        self.page.borrow_mut().card_width = Some(width);
    }

    fn apply_track_offset(&self, offset: f32) {
        self.page.borrow_mut().offsets.push(offset);
    }

    fn set_dragging(&self, dragging: bool) {
        let mut page = self.page.borrow_mut();
        if page.dragging != dragging {
            page.dragging_changes += 1;
        }
        page.dragging = dragging;
    }

    fn rebuild_indicators(&self, dots: &[Dot], on_select: IndicatorHandler) {
        let mut page = self.page.borrow_mut();
        page.indicators = dots.to_vec();
        page.indicator_rebuilds += 1;
        page.on_select = Some(on_select);
    }

    fn refresh_indicators(&self, active: usize) {
        for dot in self.page.borrow_mut().indicators.iter_mut() {
            dot.active = dot.index == active;
        }
    }
}

// ============================================================================
// Menu
// ============================================================================

#[derive(Clone, Default)]
pub struct RecordingMenuView {
    renders: Rc<RefCell<Vec<bool>>>,
}

impl RecordingMenuView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open states rendered so far.
    pub fn renders(&self) -> Vec<bool> {
        self.renders.borrow().clone()
    }

    /// Whether the page currently shows the menu (and locks scrolling).
    pub fn is_shown(&self) -> bool {
        self.renders.borrow().last().copied().unwrap_or(false)
    }
}

impl MenuView for RecordingMenuView {
    fn render(&self, open: bool) {
        self.renders.borrow_mut().push(open);
    }
}

// ============================================================================
// Tooltips
// ============================================================================

#[derive(Clone, Default)]
pub struct RecordingTooltipView {
    active: Rc<RefCell<HashSet<usize>>>,
}

impl RecordingTooltipView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Vec<usize> {
        let mut active: Vec<usize> = self.active.borrow().iter().copied().collect();
        active.sort_unstable();
        active
    }
}

impl TooltipView for RecordingTooltipView {
    fn set_active(&self, index: usize, active: bool) {
        let mut set = self.active.borrow_mut();
        if active {
            set.insert(index);
        } else {
            set.remove(&index);
        }
    }
}

// ============================================================================
// Anchors & history
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollCommand {
    To(String),
    Top,
}

#[derive(Default)]
struct ScrollPage {
    targets: HashSet<String>,
    scrolls: Vec<ScrollCommand>,
    history: Vec<String>,
    current: Option<usize>,
}

#[derive(Clone, Default)]
pub struct FakeScrollView {
    page: Rc<RefCell<ScrollPage>>,
}

impl FakeScrollView {
    pub fn with_targets<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let view = Self::default();
        view.page
            .borrow_mut()
            .targets
            .extend(ids.into_iter().map(str::to_owned));
        view
    }

    pub fn scrolls(&self) -> Vec<ScrollCommand> {
        self.page.borrow().scrolls.clone()
    }

    /// Pushed history entries, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.page.borrow().history.clone()
    }

    /// Moves back one entry and returns the state the browser would deliver
    /// with `popstate`.
    pub fn back(&self) -> Option<String> {
        let mut page = self.page.borrow_mut();
        page.current = match page.current {
            Some(0) | None => None,
            Some(index) => Some(index - 1),
        };
        page.current.map(|index| page.history[index].clone())
    }
}

impl ScrollView for FakeScrollView {
    fn has_target(&self, id: &str) -> bool {
        self.page.borrow().targets.contains(id)
    }

    fn scroll_to(&self, id: &str) {
        self.page
            .borrow_mut()
            .scrolls
            .push(ScrollCommand::To(id.to_owned()));
    }

    fn scroll_to_top(&self) {
        self.page.borrow_mut().scrolls.push(ScrollCommand::Top);
    }

    fn push_entry(&self, id: &str) {
        let mut page = self.page.borrow_mut();
        let keep = page.current.map_or(0, |index| index + 1);
        page.history.truncate(keep);
        page.history.push(id.to_owned());
        page.current = Some(page.history.len() - 1);
    }

    fn current_entry(&self) -> Option<String> {
        let page = self.page.borrow();
        page.current.map(|index| page.history[index].clone())
    }
}
