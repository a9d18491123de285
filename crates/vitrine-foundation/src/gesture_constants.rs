//! Shared gesture and layout constants.
//!
//! Values are in logical (CSS) pixels unless stated otherwise. They are the
//! defaults; components take their working values from configuration.

use web_time::Duration;

/// Horizontal drag distance a swipe must exceed to change slides.
///
/// Applied symmetrically in both directions. A longer drag still moves by a
/// single slide.
pub const DRAG_COMMIT_THRESHOLD: f32 = 50.0;

/// Viewport width at and above which the layout counts as desktop.
pub const DESKTOP_BREAKPOINT: f32 = 1024.0;

/// Space between two adjacent cards.
pub const CARD_GAP: f32 = 40.0;

/// Width changes smaller than this are treated as resize noise.
pub const RESIZE_NOISE_THRESHOLD: f32 = 10.0;

/// Quiet period after the last resize event before layout is reconciled.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Widest viewport on which tooltips toggle on tap instead of hover.
pub const TOOLTIP_TAP_MAX_WIDTH: f32 = 1024.0;
