//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Canvas Defaults
// ============================================================================

/// Default width of the image container (canvas) in pixels
pub const DEFAULT_CONTAINER_WIDTH: f32 = 600.0;

/// Scale factor used before any image has been loaded
pub const DEFAULT_SCALE: f32 = 1.0;

// ============================================================================
// Handle Layout
// ============================================================================

/// Visible size of a resize handle square
pub const HANDLE_SIZE: f32 = 6.0;

/// Size of the enlarged hit area around a resize handle
pub const HANDLE_HIT_SIZE: f32 = HANDLE_SIZE * 1.5;

/// Total inset of the drag region inside a selection (half on each side)
pub const DRAG_REGION_INSET: f32 = 8.0;

// ============================================================================
// Index Badge & Delete Button
// ============================================================================

/// Diameter of the index badge
pub const BADGE_SIZE: f32 = 16.0;

/// Gap between a selection edge and its badge / delete button
pub const BADGE_MARGIN: f32 = 8.0;

// ============================================================================
// Colors (default CSS values)
// ============================================================================

/// Outline color of a selection in a valid position
pub const DEFAULT_SELECTION_COLOR: &str = "blue";

/// Outline color of a selection that currently overlaps another
pub const OVERLAPPED_WARNING_COLOR: &str = "red";

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "area-selector";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default tracing filter for the replay binary
pub const DEFAULT_LOG_FILTER: &str = "area_selector=info";
