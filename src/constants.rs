//! Application-wide constants.
//!
//! Centralizes magic numbers so the camera, router and renderer agree on them.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 1000.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Multiplier applied by the zoom-in key
pub const ZOOM_IN_FACTOR: f32 = 1.1;

/// Multiplier applied by the zoom-out key
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

/// Scroll delta that maps to a full zoom step (`factor = 1 - delta_y / divisor`)
pub const SCROLL_ZOOM_DIVISOR: f32 = 200.0;

/// Keyboard pan step in world pixels
pub const PAN_STEP: f32 = 1.0;

/// Keyboard pan step while the fast modifier (shift) is held
pub const FAST_PAN_STEP: f32 = 10.0;

// ============================================================================
// Persistence
// ============================================================================

/// Key under which the region set is stored
pub const EDITOR_VALUES_KEY: &str = "EDITOR_VALUES";

/// Directory name used under the platform config/data dirs
pub const APP_DIR_NAME: &str = "regionboard";

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.json";

// ============================================================================
// Rendering
// ============================================================================

/// Opacity of committed regions
pub const DEFAULT_REGION_OPACITY: f32 = 0.5;

/// Opacity of the in-progress preview rectangle
pub const DEFAULT_PREVIEW_OPACITY: f32 = 0.25;

/// Size of the cursor and anchor markers in world pixels
pub const MARKER_SIZE: u32 = 1;

/// Screen-space position of the mode label
pub const LABEL_ORIGIN: (f32, f32) = (8.0, 8.0);

/// Font size for overlay text
pub const LABEL_FONT_SIZE: f32 = 14.0;

/// Vertical distance between stacked overlay text lines
pub const LABEL_LINE_HEIGHT: f32 = 18.0;

/// Default window size for the windowed shell
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1280.0, 800.0);
