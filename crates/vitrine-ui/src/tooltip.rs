//! Tap-to-toggle tooltips for touch layouts.
//!
//! On wide viewports tooltips are pure CSS hover and taps pass through. At or
//! below the tap width a tap toggles the tapped tooltip and hides the rest.

use vitrine_foundation::gesture_constants::TOOLTIP_TAP_MAX_WIDTH;

pub trait TooltipView {
    fn set_active(&self, index: usize, active: bool);
}

/// Outcome of a tap on a tooltip element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipTap {
    /// The tap toggled a tooltip; the host should prevent the default action.
    Toggled,
    PassedThrough,
}

pub struct TooltipGroup<V: TooltipView> {
    view: V,
    len: usize,
    active: Option<usize>,
    max_tap_width: f32,
}

impl<V: TooltipView> TooltipGroup<V> {
    pub fn new(view: V, len: usize) -> Self {
        Self {
            view,
            len,
            active: None,
            max_tap_width: TOOLTIP_TAP_MAX_WIDTH,
        }
    }

    pub fn with_max_tap_width(mut self, width: f32) -> Self {
        self.max_tap_width = width;
        self
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn tap(&mut self, index: usize, viewport_width: f32) -> TooltipTap {
        if index >= self.len || viewport_width > self.max_tap_width {
            return TooltipTap::PassedThrough;
        }
        let activate = self.active != Some(index);
        for other in (0..self.len).filter(|&other| other != index) {
            self.view.set_active(other, false);
        }
        self.view.set_active(index, activate);
        self.active = activate.then_some(index);
        TooltipTap::Toggled
    }

    /// A click landed outside every tooltip.
    pub fn dismiss_all(&mut self) {
        for index in 0..self.len {
            self.view.set_active(index, false);
        }
        self.active = None;
    }
}
