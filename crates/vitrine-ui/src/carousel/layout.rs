//! Card sizing for the current viewport.

use super::CarouselConfig;

/// Viewport category that decides how many cards share a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Compact,
    Desktop,
}

impl Breakpoint {
    pub fn for_width(viewport_width: f32, desktop_min_width: f32) -> Self {
        if viewport_width >= desktop_min_width {
            Self::Desktop
        } else {
            Self::Compact
        }
    }

    pub fn visible_cards(self) -> usize {
        match self {
            Self::Desktop => 2,
            Self::Compact => 1,
        }
    }
}

/// Width style written onto each card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardWidth {
    /// Half the track minus half the gap, so two cards and one gap fill it.
    HalfTrack { gap: f32 },
    Fixed(f32),
}

impl CardWidth {
    pub fn to_css(self) -> String {
        match self {
            Self::HalfTrack { gap } => format!("calc(50% - {}px)", gap / 2.0),
            Self::Fixed(width) => format!("{width}px"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
    breakpoint: Breakpoint,
    card_width: f32,
    gap: f32,
}

impl CardLayout {
    pub fn compute(viewport_width: f32, track_width: f32, config: &CarouselConfig) -> Self {
        let breakpoint = Breakpoint::for_width(viewport_width, config.breakpoint);
        let track_width = track_width.max(0.0);
        let card_width = match breakpoint {
            Breakpoint::Desktop => (track_width * 0.5 - config.gap / 2.0).max(0.0),
            Breakpoint::Compact => track_width,
        };
        Self {
            breakpoint,
            card_width,
            gap: config.gap,
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn visible_cards(&self) -> usize {
        self.breakpoint.visible_cards()
    }

    pub fn card_width(&self) -> f32 {
        self.card_width
    }

    pub fn card_style(&self) -> CardWidth {
        match self.breakpoint {
            Breakpoint::Desktop => CardWidth::HalfTrack { gap: self.gap },
            Breakpoint::Compact => CardWidth::Fixed(self.card_width),
        }
    }

    /// Distance the track travels per slide.
    pub fn slide_width(&self) -> f32 {
        match self.breakpoint {
            Breakpoint::Desktop => (self.card_width + self.gap) * 2.0,
            Breakpoint::Compact => self.card_width + self.gap,
        }
    }

    pub fn total_slides(&self, card_count: usize) -> usize {
        card_count.div_ceil(self.visible_cards())
    }

    /// Track translation that shows `slide`.
    pub fn offset_for(&self, slide: usize) -> f32 {
        0.0 - slide as f32 * self.slide_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(viewport: f32, track: f32) -> CardLayout {
        CardLayout::compute(viewport, track, &CarouselConfig::default())
    }

    #[test]
    fn breakpoint_is_inclusive_at_1024() {
        assert_eq!(layout(1024.0, 900.0).visible_cards(), 2);
        assert_eq!(layout(1023.0, 900.0).visible_cards(), 1);
    }

    #[test]
    fn desktop_cards_split_track_around_gap() {
        let layout = layout(1300.0, 1000.0);
        assert_eq!(layout.card_width(), 480.0);
        assert_eq!(layout.slide_width(), 1040.0);
        assert_eq!(layout.card_style().to_css(), "calc(50% - 20px)");
    }

    #[test]
    fn compact_cards_fill_track() {
        let layout = layout(800.0, 760.0);
        assert_eq!(layout.card_width(), 760.0);
        assert_eq!(layout.slide_width(), 800.0);
        assert_eq!(layout.card_style().to_css(), "760px");
    }

    #[test]
    fn slide_count_rounds_up() {
        assert_eq!(layout(1300.0, 1000.0).total_slides(5), 3);
        assert_eq!(layout(900.0, 860.0).total_slides(5), 5);
        assert_eq!(layout(1300.0, 1000.0).total_slides(4), 2);
    }

    #[test]
    fn offsets_move_track_left() {
        let layout = layout(800.0, 760.0);
        assert_eq!(layout.offset_for(0), 0.0);
        assert_eq!(layout.offset_for(2), -1600.0);
    }

    #[test]
    fn collapsed_track_never_yields_negative_width() {
        assert_eq!(layout(1300.0, 10.0).card_width(), 0.0);
        assert_eq!(layout(500.0, -4.0).card_width(), 0.0);
    }
}
