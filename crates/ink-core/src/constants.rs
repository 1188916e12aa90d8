// Shared ink/page tuning constants used by the web frontend.

// Live pool
pub const MAX_LIVE_DOTS: usize = 70; // hard cap on concurrently displayed dots
pub const DOT_LIFETIME_MS: u64 = 1900; // unconditional removal delay per dot

// Default emission shape
pub const DEFAULT_COUNT: usize = 12;
pub const DEFAULT_MAX_DIST: f32 = 120.0; // extra random travel ceiling (px)
pub const DEFAULT_DIST_MIN: f32 = 40.0; // travel floor (px)
pub const DEFAULT_SIZE_MIN: f32 = 10.0; // dot diameter (px)
pub const DEFAULT_SIZE_MAX: f32 = 24.0;

// Reduced-motion defaults: toned down, never disabled
pub const REDUCED_COUNT: usize = 6;
pub const REDUCED_MAX_DIST: f32 = 70.0;

// Neon palette sampled when an emission has no fixed colour
pub const INK_PALETTE: [&str; 4] = ["#ff2bbb", "#00d0ff", "#78ff00", "#ff7a00"];

// Page timings
pub const LOADING_HIDE_DELAY_MS: u64 = 1200; // overlay fade after window load
pub const HERO_START_DELAY_MS: u64 = 900; // first hero burst after window load
pub const HERO_AMBIENT_INTERVAL_MS: u64 = 2200;
pub const HERO_AMBIENT_MAX: u32 = 7;
pub const HERO_AMBIENT_JITTER: [f32; 2] = [40.0, 20.0]; // full width of the x/y jitter window

// Headline reveal
pub const HEADLINE_REVEAL_THRESHOLD: f64 = 0.3;

// Palette grid
pub const PALETTE_COLS: usize = 12;
pub const PALETTE_ROWS: usize = 12;
pub const PALETTE_SAT_BASE: f32 = 70.0; // percent
pub const PALETTE_SAT_SPAN: f32 = 25.0; // percent across all rows
pub const PALETTE_LIGHTNESS: f32 = 45.0; // percent
