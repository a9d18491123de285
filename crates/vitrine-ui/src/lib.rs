//! Page components for Vitrine.
//!
//! Every component is a plain state machine driving a view trait. The web
//! platform crate implements the views on top of the DOM; tests use the
//! recording views from `vitrine-testing`.

pub mod anchor;
pub mod carousel;
pub mod menu;
pub mod nav;
pub mod tooltip;

pub use anchor::{AnchorNavigator, LinkClick, ScrollView};
pub use carousel::{
    Breakpoint, CardLayout, CardWidth, Carousel, CarouselConfig, CarouselController,
    CarouselEvent, CarouselState, CarouselView, ConfigError, Dot, IndicatorHandler, SlideIndex,
};
pub use menu::{MenuController, MenuView};
pub use tooltip::{TooltipGroup, TooltipTap, TooltipView};

pub mod prelude {
    pub use crate::anchor::{AnchorNavigator, LinkClick, ScrollView};
    pub use crate::carousel::{Carousel, CarouselConfig, CarouselEvent, CarouselView};
    pub use crate::menu::{MenuController, MenuView};
    pub use crate::tooltip::{TooltipGroup, TooltipView};
    pub use vitrine_foundation::{PointerEvent, PointerEventKind, PointerSource};
}
