//! ANSI escape codes used by the renderers.

// ============================================================================
// TEXT ATTRIBUTES
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const REVERSE: &str = "\x1b[7m";

// ============================================================================
// COLORS
// ============================================================================

pub const FG_BLACK: &str = "\x1b[30m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_WHITE: &str = "\x1b[37m";
pub const BG_WHITE: &str = "\x1b[47m";

/// Dark gray background of the pressed filter button
pub const BG_256_DARK_GRAY: &str = "\x1b[48;5;241m";

// ============================================================================
// LINE CONTROL
// ============================================================================

/// Erase from the cursor to the end of the line
pub const CLEAR_TO_EOL: &str = "\x1b[K";
