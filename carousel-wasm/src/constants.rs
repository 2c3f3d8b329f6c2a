/// Selectors and event names shared with the host page.
pub const CONTAINER_SELECTOR: &str = ".carousel-container";
pub const TRACK_SELECTOR: &str = ".carousel-track";
pub const ITEMS_SELECTOR: &str = ".carousel-items";
pub const CLOSE_SELECTOR: &str = ".carousel-close";
pub const CARD_SELECTOR: &str = ".carousel-item";

/// Attribute carrying the item id on each rendered card.
pub const CARD_ID_ATTR: &str = "data-id";

pub const ITEM_SELECTED_EVENT: &str = "item-selected";
pub const CLOSED_EVENT: &str = "carousel-closed";

/// Optional host-provided config object on `window`.
pub const CONFIG_GLOBAL: &str = "__CAROUSEL_CONFIG";
/// Query parameter that turns on debug logging.
pub const DEBUG_QUERY_PARAM: &str = "carouselDebug";
