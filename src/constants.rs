// DOM hooks shared by the page wiring. The stylesheet owns everything visual
// behind these names.

// Loading overlay
pub const READY_STATE_COMPLETE: &str = "complete";
pub const LOADING_ID: &str = "loading";
pub const HIDDEN_CLASS: &str = "hidden";

// Headline reveal
pub const HEADLINE_SELECTOR: &str = ".headline-drip";
pub const INVIEW_CLASS: &str = "inview";

// Ink
pub const INK_CONTAINER_ID: &str = "ink-container";
pub const INK_DOT_CLASS: &str = "ink-dot";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Colour simulator
pub const FILL_TARGET_SELECTOR: &str = "#house-svg [data-fill-target]";
pub const FILL_PROPERTY: &str = "fill";
pub const SWATCH_SELECTOR: &str = ".swatch[data-color]";
pub const SWATCH_COLOR_ATTR: &str = "data-color";
pub const COLOR_INPUT_ID: &str = "p-color";
pub const HEX_INPUT_ID: &str = "p-hex";
// (slider, number) pairs per channel
pub const RGB_INPUT_IDS: [(&str, &str); 3] = [("p-r", "p-rn"), ("p-g", "p-gn"), ("p-b", "p-bn")];
pub const PALETTE_GRID_ID: &str = "palette-grid";
pub const PALETTE_SWATCH_CLASS: &str = "palette-swatch";

// Hero
pub const HERO_LOGO_SELECTOR: &str = ".kv-logo";
pub const SHOW_CLASS: &str = "show";

// Navigation drawer
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_DRAWER_ID: &str = "site-nav";
pub const NAV_BACKDROP_SELECTOR: &str = ".nav-backdrop";
pub const NAV_OPEN_CLASS: &str = "open";
pub const BODY_NAV_OPEN_CLASS: &str = "nav-open";
pub const FOCUSABLE_SELECTOR: &str =
    "a[href], button:not([disabled]), input:not([disabled]), select, textarea, [tabindex]:not([tabindex='-1'])";
