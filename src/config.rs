//! Application-level configuration constants.

use steady_check::TimeUnit;

// UI Behavior
pub const ERROR_DISMISS_MS: u32 = 5_000;
pub const RESULT_SETTLE_MS: u32 = 100;

// Default values for input fields
pub const DEFAULT_UNIT: TimeUnit = TimeUnit::Hours;
pub const DEFAULT_LEVEL_PCT: u32 = 97;

// Element ids the page scrolls to
pub const RESULTS_SECTION_ID: &str = "resultsSection";
pub const ERROR_MESSAGE_ID: &str = "errorMessage";
