//! Testimonial carousel.
//!
//! A fixed row of cards inside a clipped track. On desktop two cards share a
//! slide, otherwise one. Slides change by dragging, swiping or clicking a
//! pagination dot, and the layout follows viewport resizes.

mod config;
mod controller;
mod layout;
mod pagination;
mod slides;
mod view;

pub use config::{CarouselConfig, ConfigError};
pub use controller::{Carousel, CarouselController, CarouselEvent, CarouselState};
pub use layout::{Breakpoint, CardLayout, CardWidth};
pub use pagination::{dots, Dot, IndicatorHandler};
pub use slides::SlideIndex;
pub use view::CarouselView;
