use vitrine_foundation::SwipeDirection;

/// Index of the visible slide, always within `0..total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    total: usize,
}

impl SlideIndex {
    /// A zero `total` is treated as one slide so the index stays valid.
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }

    /// Moves to `target`, clamped into range.
    pub fn go_to(&mut self, target: isize) {
        let last = self.total - 1;
        self.current = usize::try_from(target).map_or(0, |target| target.min(last));
    }

    /// Moves one slide in `direction` unless already at that end.
    /// Returns whether the index changed.
    pub fn step(&mut self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Forward if !self.is_last() => {
                self.current += 1;
                true
            }
            SwipeDirection::Back if !self.is_first() => {
                self.current -= 1;
                true
            }
            _ => false,
        }
    }

    /// Updates the slide count, pulling the index back into range.
    pub fn set_total(&mut self, total: usize) {
        self.total = total.max(1);
        self.current = self.current.min(self.total - 1);
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_to_clamps_both_ends() {
        let mut slides = SlideIndex::new(3);
        for (target, expected) in [(-5, 0), (0, 0), (2, 2), (3, 2), (isize::MAX, 2)] {
            slides.go_to(target);
            assert_eq!(slides.current(), expected, "target {target}");
        }
    }

    #[test]
    fn step_stops_at_bounds() {
        let mut slides = SlideIndex::new(2);
        assert!(!slides.step(SwipeDirection::Back));
        assert!(slides.step(SwipeDirection::Forward));
        assert!(!slides.step(SwipeDirection::Forward));
        assert_eq!(slides.current(), 1);
    }

    #[test]
    fn shrinking_total_reclamps_current() {
        let mut slides = SlideIndex::new(5);
        slides.go_to(4);
        slides.set_total(3);
        assert_eq!(slides.current(), 2);
        assert!(slides.is_last());
    }

    #[test]
    fn zero_total_keeps_single_slide() {
        let slides = SlideIndex::new(0);
        assert_eq!(slides.total(), 1);
        assert!(slides.is_first() && slides.is_last());
    }
}
