//! Menu, tooltip and anchor navigation components.

use vitrine_testing::{FakeScrollView, RecordingMenuView, RecordingTooltipView, ScrollCommand};
use vitrine_ui::{AnchorNavigator, LinkClick, MenuController, TooltipGroup, TooltipTap};

#[test]
fn menu_toggle_opens_and_closes() {
    let view = RecordingMenuView::new();
    let mut menu = MenuController::new(view.clone());

    menu.toggle();
    assert!(menu.is_open());
    assert!(view.is_shown());

    menu.toggle();
    assert!(!menu.is_open());
    assert!(!view.is_shown());
    assert_eq!(view.renders(), vec![true, false]);
}

#[test]
fn menu_close_is_unconditional() {
    let view = RecordingMenuView::new();
    let mut menu = MenuController::new(view.clone());

    menu.close();
    menu.toggle();
    menu.close();

    assert!(!menu.is_open());
    assert_eq!(view.renders(), vec![false, true, false]);
}

#[test]
fn tooltip_tap_toggles_on_touch_layouts() {
    let view = RecordingTooltipView::new();
    let mut tooltips = TooltipGroup::new(view.clone(), 3);

    assert_eq!(tooltips.tap(1, 800.0), TooltipTap::Toggled);
    assert_eq!(view.active(), vec![1]);

    assert_eq!(tooltips.tap(1, 800.0), TooltipTap::Toggled);
    assert!(view.active().is_empty());
    assert_eq!(tooltips.active(), None);
}

#[test]
fn at_most_one_tooltip_is_active() {
    let view = RecordingTooltipView::new();
    let mut tooltips = TooltipGroup::new(view.clone(), 3);

    tooltips.tap(0, 1024.0);
    tooltips.tap(2, 1024.0);

    assert_eq!(view.active(), vec![2]);
    assert_eq!(tooltips.active(), Some(2));
}

#[test]
fn tooltip_taps_pass_through_on_wide_viewports() {
    let view = RecordingTooltipView::new();
    let mut tooltips = TooltipGroup::new(view.clone(), 2);

    assert_eq!(tooltips.tap(0, 1025.0), TooltipTap::PassedThrough);
    assert_eq!(tooltips.tap(5, 500.0), TooltipTap::PassedThrough);
    assert!(view.active().is_empty());
}

#[test]
fn outside_click_dismisses_tooltips() {
    let view = RecordingTooltipView::new();
    let mut tooltips = TooltipGroup::new(view.clone(), 2).with_max_tap_width(600.0);

    tooltips.tap(1, 600.0);
    tooltips.dismiss_all();

    assert!(view.active().is_empty());
    assert_eq!(tooltips.active(), None);
}

#[test]
fn anchor_click_scrolls_and_records_history() {
    let view = FakeScrollView::with_targets(["about", "work"]);
    let anchors = AnchorNavigator::new(view.clone());

    assert_eq!(anchors.on_click("#about"), LinkClick::Handled { scrolled: true });
    assert_eq!(anchors.on_click("#work"), LinkClick::Handled { scrolled: true });

    assert_eq!(
        view.scrolls(),
        vec![
            ScrollCommand::To("about".into()),
            ScrollCommand::To("work".into())
        ]
    );
    assert_eq!(view.history(), vec!["about".to_string(), "work".to_string()]);
}

#[test]
fn repeated_anchor_click_does_not_duplicate_history() {
    let view = FakeScrollView::with_targets(["about"]);
    let anchors = AnchorNavigator::new(view.clone());

    anchors.on_click("#about");
    anchors.on_click("#about");

    assert_eq!(view.history().len(), 1);
    assert_eq!(view.scrolls().len(), 2);
}

#[test]
fn bare_hash_links_are_left_to_the_browser() {
    let view = FakeScrollView::with_targets(["about"]);
    let anchors = AnchorNavigator::new(view.clone());

    assert_eq!(anchors.on_click("#"), LinkClick::Ignored);
    assert!(view.scrolls().is_empty());
}

#[test]
fn missing_target_still_prevents_navigation() {
    let view = FakeScrollView::with_targets(["about"]);
    let anchors = AnchorNavigator::new(view.clone());

    let click = anchors.on_click("#missing");

    assert_eq!(click, LinkClick::Handled { scrolled: false });
    assert!(click.prevents_default());
    assert!(view.scrolls().is_empty());
    assert!(view.history().is_empty());
}

#[test]
fn back_navigation_restores_previous_anchor() {
    let view = FakeScrollView::with_targets(["about", "work"]);
    let anchors = AnchorNavigator::new(view.clone());
    anchors.on_click("#about");
    anchors.on_click("#work");

    let state = view.back();
    anchors.on_pop(state.as_deref());
    assert_eq!(view.scrolls().last(), Some(&ScrollCommand::To("about".into())));

    let state = view.back();
    anchors.on_pop(state.as_deref());
    assert_eq!(view.scrolls().last(), Some(&ScrollCommand::Top));
}

#[test]
fn pop_to_unknown_anchor_scrolls_to_top() {
    let view = FakeScrollView::with_targets(["about"]);
    let anchors = AnchorNavigator::new(view.clone());

    anchors.on_pop(Some("gone"));

    assert_eq!(view.scrolls(), vec![ScrollCommand::Top]);
}
