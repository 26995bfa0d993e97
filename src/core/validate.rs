use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{LIKERT_MAX, LIKERT_MIN, TEXT_MAX_LEN, TEXT_MIN_LEN};
use crate::models::{Entry, Rating, Reflection};

/// Pre-submit checks. A failure here blocks the network call entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationRules {
    pub enforce_text_length: bool,
}

impl ValidationRules {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            enforce_text_length: cfg.enforce_text_length,
        }
    }
}

pub fn validate_entry(entry: &Entry, rules: &ValidationRules) -> AppResult<()> {
    for rating in Rating::ALL {
        validate_rating(rating, entry.rating(rating))?;
    }

    if rules.enforce_text_length {
        for field in Reflection::ALL {
            validate_text(field, entry.text(field))?;
        }
    }

    Ok(())
}

pub fn validate_rating(rating: Rating, value: i32) -> AppResult<()> {
    if (LIKERT_MIN..=LIKERT_MAX).contains(&value) {
        return Ok(());
    }
    Err(AppError::Validation(format!(
        "Please rate {} from {} to {}.",
        rating.key().replace('_', " "),
        LIKERT_MIN,
        LIKERT_MAX
    )))
}

/// Length counts characters, not bytes, after trimming.
pub fn validate_text(field: Reflection, value: &str) -> AppResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!(
            "{} must not be empty.",
            field.label()
        )));
    }

    let len = trimmed.chars().count();
    if !(TEXT_MIN_LEN..=TEXT_MAX_LEN).contains(&len) {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {} characters (got {}).",
            field.label(),
            TEXT_MIN_LEN,
            TEXT_MAX_LEN,
            len
        )));
    }

    Ok(())
}
