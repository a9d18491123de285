//! Pointer input and gesture recognition for Vitrine.

pub mod gesture_constants;
pub mod input;

pub use input::gestures::{DragGesture, SwipeDirection};
pub use input::{PointerEvent, PointerEventKind, PointerSource};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::input::gestures::{DragGesture, SwipeDirection};
    pub use crate::input::{PointerEvent, PointerEventKind, PointerSource};
}
