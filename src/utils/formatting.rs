//! Formatting utilities used for CLI and export outputs.

use crate::models::entry::{LIKERT_MAX, LIKERT_MIN};
use chrono::{DateTime, Local, Utc};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// `●●●●○○○ 4/7`. Out-of-scale values show the number only.
pub fn rating_bar(value: i32) -> String {
    if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
        return format!("{value}/{LIKERT_MAX} (out of range)");
    }
    let filled = (value - LIKERT_MIN + 1) as usize;
    let empty = (LIKERT_MAX - value) as usize;
    format!("{}{} {value}/{LIKERT_MAX}", "●".repeat(filled), "○".repeat(empty))
}

/// Session expiry in local time, e.g. `2024-05-02 09:30`.
pub fn local_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
