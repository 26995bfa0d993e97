/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Rating color:
/// 1-2 → red
/// 3-5 → yellow
/// 6-7 → green
pub fn color_for_rating(value: i32) -> &'static str {
    match value {
        i32::MIN..=2 => RED,
        3..=5 => YELLOW,
        _ => GREEN,
    }
}

/// Grey placeholder for an empty reflection, the text itself otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}(empty){RESET}")
    } else {
        value.to_string()
    }
}
