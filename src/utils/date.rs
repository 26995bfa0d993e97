use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Resolve a CLI date argument: `YYYY-MM-DD`, `today`, `yesterday`,
/// or nothing (today).
pub fn resolve_date(arg: Option<&str>, today: NaiveDate) -> AppResult<NaiveDate> {
    match arg.map(str::trim) {
        None | Some("") => Ok(today),
        Some(s) if s.eq_ignore_ascii_case("today") => Ok(today),
        Some(s) if s.eq_ignore_ascii_case("yesterday") => Ok(today - Duration::days(1)),
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// "Wednesday, 1 May 2024"
pub fn long_label(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}
