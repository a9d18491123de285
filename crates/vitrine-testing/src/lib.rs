//! Testing utilities and harness for Vitrine
//!
//! [`ManualScheduler`] replaces the browser's frame and timer queues with a
//! virtual clock the test advances explicitly. The recording views keep every
//! call the components make so tests can assert on the produced styles.

pub mod scheduler;
pub mod views;

pub use scheduler::{ManualScheduler, FRAME_INTERVAL};
pub use views::*;

pub mod prelude {
    pub use crate::scheduler::{ManualScheduler, FRAME_INTERVAL};
    pub use crate::views::*;
}
