/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Status color:
/// active → green
/// inactive → red
pub fn color_for_status(active: bool) -> &'static str {
    if active { GREEN } else { RED }
}

/// Quantity color:
/// below threshold on an active record → yellow
/// inactive → grey
pub fn color_for_quantity(quantity: u32, active: bool, threshold: u32) -> &'static str {
    if !active {
        GREY
    } else if quantity < threshold {
        YELLOW
    } else {
        RESET
    }
}

pub fn paint(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}

/// Yes/No style flags: set → magenta, unset → grey.
pub fn colorize_flag(value: &str, set: bool) -> String {
    if set {
        paint(value, MAGENTA)
    } else {
        paint(value, GREY)
    }
}
