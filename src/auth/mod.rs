//! Session Guard: a single fixed credential pair and a client-held,
//! expiring session token.
//!
//! Lifetime policy: a session is valid for a fixed duration from login
//! (`session_hours`, 24 by default), not until the end of the day.

pub mod store;

pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Session, StoredSession};
use chrono::{DateTime, TimeDelta, Utc};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tracing::debug;

/// The configured username/password pair.
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let password = SecretString::from(cfg.password()?.expose_secret().to_owned());
        Ok(Self::new(cfg.username()?, password))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Byte-for-byte, without short-circuiting between the two fields.
    fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let pass_ok = password
            .as_bytes()
            .ct_eq(self.password.expose_secret().as_bytes());
        bool::from(user_ok & pass_ok)
    }
}

pub struct SessionGuard<S: SessionStore> {
    credentials: Credentials,
    lifetime: TimeDelta,
    store: S,
}

impl<S: SessionStore> SessionGuard<S> {
    pub fn new(credentials: Credentials, lifetime: TimeDelta, store: S) -> Self {
        Self {
            credentials,
            lifetime,
            store,
        }
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        self.login_at(username, password, Utc::now())
    }

    /// On mismatch nothing is persisted.
    pub fn login_at(&self, username: &str, password: &str, now: DateTime<Utc>) -> AppResult<Session> {
        if !self.credentials.matches(username, password) {
            debug!("login rejected");
            return Err(AppError::InvalidCredentials);
        }

        let expires_at = now
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| AppError::Config("session_hours is out of range".to_string()))?;
        let session = Session::new(self.credentials.username(), expires_at);
        self.store.save(&session.to_stored())?;
        debug!(expires_at = %session.expires_at, "session issued");
        Ok(session)
    }

    pub fn restore(&self) -> Option<Session> {
        self.restore_at(Utc::now())
    }

    /// Fails open to "not authenticated": expired, foreign, or unreadable
    /// tokens all come back as `None`.
    pub fn restore_at(&self, now: DateTime<Utc>) -> Option<Session> {
        let stored = self.store.load()?;
        match self.check(&stored, now) {
            Ok(session) => Some(session),
            Err(e) => {
                debug!(reason = %e, "stored session discarded");
                None
            }
        }
    }

    pub fn logout(&self) -> AppResult<()> {
        self.store.clear()
    }

    fn check(&self, stored: &StoredSession, now: DateTime<Utc>) -> AppResult<Session> {
        if stored.username != self.credentials.username() {
            return Err(AppError::SessionExpired);
        }
        let session = Session::from_stored(stored).ok_or(AppError::SessionExpired)?;
        if !session.is_valid_at(now) {
            return Err(AppError::SessionExpired);
        }
        Ok(session)
    }
}

impl SessionGuard<FileSessionStore> {
    /// Guard backed by the configured session file.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let lifetime = TimeDelta::try_hours(cfg.session_hours)
            .filter(|d| *d > TimeDelta::zero())
            .ok_or_else(|| AppError::Config("session_hours is out of range".to_string()))?;

        Ok(Self::new(
            Credentials::from_config(cfg)?,
            lifetime,
            FileSessionStore::new(cfg.session_path()),
        ))
    }
}
