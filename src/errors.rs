//! Unified application error type.
//! All modules (auth, store, core, gateway, cli) return AppError so the
//! binary can render a single user-visible message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Session expired. Please log in again.")]
    SessionExpired,

    #[error("Not logged in. Run `wjournal login` first.")]
    NotAuthenticated,

    // ---------------------------
    // Input / validation
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid history window: {0}")]
    InvalidLimit(u32),

    #[error("Another operation is still in progress.")]
    Busy,

    // ---------------------------
    // Record store / gateway
    // ---------------------------
    #[error("Record store unavailable ({}): {body}", status_label(.status))]
    StoreUnavailable { status: Option<u16>, body: String },

    #[error("Gateway error: {0}")]
    Gateway(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("HTTP {code}"),
        None => "backend error".to_string(),
    }
}

impl AppError {
    /// Errors the user can fix by changing input and retrying.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCredentials
                | AppError::Validation(_)
                | AppError::InvalidDate(_)
                | AppError::InvalidLimit(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
