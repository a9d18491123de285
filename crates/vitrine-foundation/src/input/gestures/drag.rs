//! Horizontal drag gesture recogniser.
//!
//! Tracks a single pointer through `Idle -> Dragging -> Idle`. While dragging,
//! the live offset follows the pointer relative to the offset that was
//! committed when the gesture began. Releasing reports how far the pointer
//! travelled; turning that distance into a navigation decision is left to
//! [`SwipeDirection::from_drag`].

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragPhase {
    Idle,
    Dragging { start_x: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    phase: DragPhase,
    committed_offset: f32,
    live_offset: f32,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGesture {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            committed_offset: 0.0,
            live_offset: 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Pointer x recorded when the current drag started.
    pub fn start_x(&self) -> Option<f32> {
        match self.phase {
            DragPhase::Dragging { start_x } => Some(start_x),
            DragPhase::Idle => None,
        }
    }

    pub fn committed_offset(&self) -> f32 {
        self.committed_offset
    }

    pub fn live_offset(&self) -> f32 {
        self.live_offset
    }

    /// Starts tracking at `x`. Starting again while dragging restarts the
    /// gesture from the new position.
    pub fn begin(&mut self, x: f32) {
        if let DragPhase::Dragging { start_x } = self.phase {
            log::trace!("drag restarted at {x} (was started at {start_x})");
        }
        self.live_offset = self.committed_offset;
        self.phase = DragPhase::Dragging { start_x: x };
    }

    /// Feeds a pointer position. Returns the new live offset, or `None` when idle.
    pub fn update(&mut self, x: f32) -> Option<f32> {
        let DragPhase::Dragging { start_x } = self.phase else {
            return None;
        };
        self.live_offset = self.committed_offset + (x - start_x);
        Some(self.live_offset)
    }

    /// Ends the gesture and returns the distance moved since it began, or
    /// `None` if no drag was active.
    pub fn finish(&mut self) -> Option<f32> {
        if !self.is_dragging() {
            return None;
        }
        self.phase = DragPhase::Idle;
        let moved_by = self.live_offset - self.committed_offset;
        log::trace!("drag finished after moving {moved_by}");
        Some(moved_by)
    }

    /// Pins both offsets to `offset`. Used after navigation settles on a slide.
    pub fn snap_to(&mut self, offset: f32) {
        self.committed_offset = offset;
        self.live_offset = offset;
    }
}

/// Direction of a committed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Content moved left: show the next slide.
    Forward,
    /// Content moved right: show the previous slide.
    Back,
}

impl SwipeDirection {
    /// Classifies a finished drag. Distances within `threshold` in either
    /// direction are not a swipe.
    pub fn from_drag(moved_by: f32, threshold: f32) -> Option<Self> {
        if moved_by < -threshold {
            Some(Self::Forward)
        } else if moved_by > threshold {
            Some(Self::Back)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_offset_follows_pointer_from_committed_position() {
        let mut drag = DragGesture::new();
        drag.snap_to(-400.0);
        drag.begin(300.0);

        assert_eq!(drag.update(250.0), Some(-450.0));
        assert_eq!(drag.update(320.0), Some(-380.0));
        assert_eq!(drag.committed_offset(), -400.0);
    }

    #[test]
    fn finish_reports_distance_and_returns_to_idle() {
        let mut drag = DragGesture::new();
        drag.begin(100.0);
        drag.update(40.0);

        assert_eq!(drag.finish(), Some(-60.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.finish(), None);
    }

    #[test]
    fn updates_while_idle_are_ignored() {
        let mut drag = DragGesture::new();
        assert_eq!(drag.update(80.0), None);
        assert_eq!(drag.live_offset(), 0.0);
    }

    #[test]
    fn restarting_resets_live_offset() {
        let mut drag = DragGesture::new();
        drag.begin(0.0);
        drag.update(-30.0);
        drag.begin(500.0);

        assert_eq!(drag.start_x(), Some(500.0));
        assert_eq!(drag.live_offset(), 0.0);
    }

    #[test]
    fn swipe_threshold_is_symmetric_and_exclusive() {
        assert_eq!(SwipeDirection::from_drag(-60.0, 50.0), Some(SwipeDirection::Forward));
        assert_eq!(SwipeDirection::from_drag(60.0, 50.0), Some(SwipeDirection::Back));
        assert_eq!(SwipeDirection::from_drag(-40.0, 50.0), None);
        assert_eq!(SwipeDirection::from_drag(50.0, 50.0), None);
        assert_eq!(SwipeDirection::from_drag(-50.0, 50.0), None);
    }
}
