// logwindow - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name (window title).
pub const APP_NAME: &str = "Logger View";

/// Application identifier used for config directories.
pub const APP_ID: &str = "LogWindow";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Window geometry
// =============================================================================

/// Initial window size.
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 500.0;

/// Minimum window size the viewport allows.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

// =============================================================================
// Rendering
// =============================================================================

/// Field width of the right-aligned sequence number, e.g. `[   1234]`.
pub const NUMBER_PAD_WIDTH: usize = 7;

// =============================================================================
// Per-frame UI message budgets
// =============================================================================

/// Maximum number of sink rows drained by the UI update loop per frame.
/// Any remaining rows are left in the channel and processed on subsequent
/// frames, preventing a burst from stalling the render loop.
pub const MAX_SINK_ROWS_PER_FRAME: usize = 2_000;

/// Repaint interval while records are still arriving (ms).
pub const SINK_REPAINT_INTERVAL_MS: u64 = 50;

// =============================================================================
// Demo emitter
// =============================================================================

/// Default number of demo cycles. Each cycle emits one record per message
/// severity (error, warning, message, debug, trace); the run ends with one
/// fatal record and one captured exception.
pub const DEFAULT_DEMO_CYCLES: u32 = 2_000;

/// Minimum user-configurable demo cycle count.
pub const MIN_DEMO_CYCLES: u32 = 1;

/// Maximum user-configurable demo cycle count.
pub const MAX_DEMO_CYCLES: u32 = 100_000;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level for the application's own diagnostics.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
