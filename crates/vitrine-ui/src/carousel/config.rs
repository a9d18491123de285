//! Carousel tuning.
//!
//! Defaults come from [`vitrine_foundation::gesture_constants`]. The web
//! mount lets page authors override them with data attributes on the
//! carousel wrapper.

use vitrine_foundation::gesture_constants::{
    CARD_GAP, DESKTOP_BREAKPOINT, DRAG_COMMIT_THRESHOLD, RESIZE_DEBOUNCE, RESIZE_NOISE_THRESHOLD,
};
use web_time::Duration;

pub const ATTR_GAP: &str = "data-gap";
pub const ATTR_BREAKPOINT: &str = "data-breakpoint";
pub const ATTR_DRAG_THRESHOLD: &str = "data-drag-threshold";
pub const ATTR_RESIZE_NOISE: &str = "data-resize-noise";
pub const ATTR_RESIZE_DEBOUNCE_MS: &str = "data-resize-debounce-ms";

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Space between adjacent cards.
    pub gap: f32,
    /// Minimum viewport width for the two-card layout.
    pub breakpoint: f32,
    /// Drag distance a release must exceed to change slides.
    pub drag_threshold: f32,
    /// Width changes below this are ignored on resize.
    pub resize_noise: f32,
    /// Quiet period before a resize is reconciled.
    pub resize_debounce: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gap: CARD_GAP,
            breakpoint: DESKTOP_BREAKPOINT,
            drag_threshold: DRAG_COMMIT_THRESHOLD,
            resize_noise: RESIZE_NOISE_THRESHOLD,
            resize_debounce: RESIZE_DEBOUNCE,
        }
    }
}

impl CarouselConfig {
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_breakpoint(mut self, breakpoint: f32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    pub fn with_resize_noise(mut self, noise: f32) -> Self {
        self.resize_noise = noise;
        self
    }

    pub fn with_resize_debounce(mut self, debounce: Duration) -> Self {
        self.resize_debounce = debounce;
        self
    }

    /// Applies overrides found through `lookup` (attribute name to raw value).
    /// Invalid values are logged and leave the current setting in place.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let apply = |key: &'static str, allow_zero: bool, slot: &mut f32| {
            let Some(raw) = lookup(key) else {
                return;
            };
            match parse_length(key, &raw, allow_zero) {
                Ok(value) => *slot = value,
                Err(err) => log::warn!("ignoring carousel override: {err}"),
            }
        };
        apply(ATTR_GAP, true, &mut self.gap);
        apply(ATTR_BREAKPOINT, false, &mut self.breakpoint);
        apply(ATTR_DRAG_THRESHOLD, false, &mut self.drag_threshold);
        apply(ATTR_RESIZE_NOISE, false, &mut self.resize_noise);

        if let Some(raw) = lookup(ATTR_RESIZE_DEBOUNCE_MS) {
            match raw.trim().parse::<u64>() {
                Ok(millis) if millis > 0 => self.resize_debounce = Duration::from_millis(millis),
                _ => log::warn!(
                    "ignoring carousel override: {}",
                    ConfigError::Invalid {
                        key: ATTR_RESIZE_DEBOUNCE_MS,
                        value: raw,
                    }
                ),
            }
        }
        self
    }
}

fn parse_length(key: &'static str, raw: &str, allow_zero: bool) -> Result<f32, ConfigError> {
    let invalid = || ConfigError::Invalid {
        key,
        value: raw.to_owned(),
    };
    let value: f32 = raw.trim().parse().map_err(|_| invalid())?;
    let in_range = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if value.is_finite() && in_range {
        Ok(value)
    } else {
        Err(invalid())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "{key}={value:?} is not valid"),
        }
    }
}

impl std::error::Error for ConfigError {}
