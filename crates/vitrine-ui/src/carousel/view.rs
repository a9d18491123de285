use super::{CardWidth, Dot, IndicatorHandler};

/// Presentation surface the carousel controller drives.
///
/// Implementations own the markup: a wrapper that clips, a track that
/// translates, the cards inside it and an optional indicator container.
/// Methods must not call back into the controller synchronously.
pub trait CarouselView {
    fn card_count(&self) -> usize;

    /// Width of the whole viewport, used for the breakpoint.
    fn viewport_width(&self) -> f32;

    /// Width of the clipping wrapper, used to size cards.
    fn track_width(&self) -> f32;

    /// Writes `width` onto every card.
    fn apply_card_width(&self, width: CardWidth);

    /// Translates the track horizontally by `offset` (negative moves left).
    fn apply_track_offset(&self, offset: f32);

    /// Toggles the wrapper's dragging state.
    fn set_dragging(&self, dragging: bool);

    /// Replaces all indicators. Activating indicator `i` must call `on_select(i)`.
    fn rebuild_indicators(&self, dots: &[Dot], on_select: IndicatorHandler);

    /// Marks the indicator at `active` and clears the others.
    fn refresh_indicators(&self, active: usize);
}
