/// Name of the window event signalling a change of the vertical scroll position.
pub const SCROLL_EVENT: &str = "scroll";

/// Distance in pixels from the document's lower edge at which the bottom counts as reached.
pub const DEFAULT_BOTTOM_THRESHOLD: f64 = 0.0;

pub const SCROLL_LOAD_THROTTLE_DELAY: f64 = 3000.0;

pub const DEMO_BATCH_SIZE: usize = 25;
pub const DEMO_MAX_ITEMS: usize = 200;
