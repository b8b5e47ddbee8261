//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed UI grid geometry.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Assembly Viewer";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "stepview";

/// Total number of grid columns shared by the three body columns.
pub const GRID_COLUMNS: u8 = 12;

/// Width of a side column while at least one of its panels is visible.
pub const SIDE_COLUMN_WIDTH: u8 = 3;

/// Width of a side column once all of its panels are minimized.
pub const SIDE_COLUMN_MIN_WIDTH: u8 = 1;

/// Step key that additionally shows the hazard pictogram in the header.
pub const HAZARD_STEP_KEY: &str = "step14";

/// Image shown in the header while the hazard step is active.
pub const HAZARD_IMAGE_PATH: &str = "assets/img/danger.png";

/// Directory prefix prepended to tool image references from the steps file.
pub const TOOL_IMAGE_DIR: &str = "assets/img/";
