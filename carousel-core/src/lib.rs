//! Platform-independent core of the item carousel: the item catalog, the
//! configuration, and the drag/scroll state machine that drives a
//! [`Surface`].

mod config;
mod controller;
mod error;
mod input;
mod item;
mod scroll;
mod surface;

pub use config::{CarouselConfig, Transition};
pub use controller::CarouselController;
pub use error::{CatalogError, ConfigError};
pub use input::{key_scroll_distance, wheel_delta};
pub use item::{Item, ItemCatalog, ItemDataSource};
pub use scroll::{DragPhase, ScrollState};
pub use surface::{Surface, TaskHandle};
