#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Mouse button pressed or first finger down.
    Down,
    Move,
    /// Mouse button released or last finger lifted.
    Up,
    /// Pointer left the tracked element.
    Leave,
}

/// Horizontal pointer sample in the host's CSS pixel space.
///
/// Only the x coordinate matters for horizontal swiping; mouse samples carry
/// the page coordinate and touch samples the client coordinate, as delivered
/// by the browser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub source: PointerSource,
    pub x: f32,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, source: PointerSource, x: f32) -> Self {
        Self { kind, source, x }
    }

    pub fn mouse(kind: PointerEventKind, x: f32) -> Self {
        Self::new(kind, PointerSource::Mouse, x)
    }

    pub fn touch(kind: PointerEventKind, x: f32) -> Self {
        Self::new(kind, PointerSource::Touch, x)
    }
}

