//! ANSI escape code constants for terminal styling
//!
//! Only the attributes and colors the gallery actually draws with.

// ============================================================================
// TEXT ATTRIBUTES
// ============================================================================

pub const RESET: &str = "\x1b[0m"; // Reset all attributes
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m"; // Dimmed/faint text
pub const REVERSE: &str = "\x1b[7m"; // Reverse video (swap fg/bg)

// ============================================================================
// FOREGROUND COLORS
// ============================================================================

pub const FG_RED: &str = "\x1b[31m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_BRIGHT_BLACK: &str = "\x1b[90m"; // Also known as dark gray

// ============================================================================
// LINE CONTROL
// ============================================================================

pub const CLEAR_TO_END_OF_LINE: &str = "\x1b[K";
