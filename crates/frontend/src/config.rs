//! Frontend tunables and DOM element ids.

/// Element the app mounts into; `<body>` is used when it is missing.
pub const MOUNT_ID: &str = "app";

pub const SEARCH_INPUT_ID: &str = "search-input";
pub const FILTER_TAGS_ID: &str = "filter-tags";
pub const ACTIVE_FILTERS_ID: &str = "active-filters";
pub const PROJECTS_CONTAINER_ID: &str = "projects-container";
pub const NO_RESULTS_ID: &str = "no-results";

/// Vertical scroll (px) past which the filter bar gets `filters--scrolled`.
pub const FILTER_BAR_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Delay before scrolling to the projects after a tag change, so the new
/// cards are painted first.
pub const SCROLL_DELAY_MS: u32 = 100;

pub const SEARCH_PLACEHOLDER: &str = "Search projects...";
