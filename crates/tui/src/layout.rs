//! Centralized layout measurements for the TUI.

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the filter bar in rows.
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of the new-task form in rows (three bordered input fields).
pub const FORM_HEIGHT: u16 = 9;

/// Minimum terminal height for useful rendering.
///
/// Below this, a "terminal too small" message is displayed instead:
/// filter bar, status bar, and at least one task row must fit.
pub const MIN_HEIGHT: u16 = 12;

/// Minimum terminal width for useful rendering.
///
/// The filter bar shows four labeled controls; below this width their
/// labels are no longer readable.
pub const MIN_WIDTH: u16 = 48;
