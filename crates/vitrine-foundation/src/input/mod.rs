pub mod gestures;
pub mod types;

pub use types::{PointerEvent, PointerEventKind, PointerSource};

pub mod prelude {
    pub use super::gestures::{DragGesture, SwipeDirection};
    pub use super::types::{PointerEvent, PointerEventKind, PointerSource};
}
