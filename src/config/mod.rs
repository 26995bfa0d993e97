use crate::errors::{AppError, AppResult};
use crate::store::{DEFAULT_LIST_LIMIT, HISTORY_WINDOWS};
use crate::utils::path::expand_tilde;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_ENDPOINT: &str = "WJ_ENDPOINT";
pub const ENV_USERNAME: &str = "WJ_USERNAME";
pub const ENV_PASSWORD: &str = "WJ_PASSWORD";
pub const ENV_SESSION_HOURS: &str = "WJ_SESSION_HOURS";
pub const ENV_GATEWAY_TARGET: &str = "WJ_GATEWAY_TARGET";
pub const ENV_GATEWAY_BIND: &str = "WJ_GATEWAY_BIND";

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL the record store adapter talks to (the gateway or the backend).
    pub endpoint: Option<String>,
    /// The single allowed username.
    pub username: Option<String>,
    /// The single allowed password. Environment only, never written to disk.
    #[serde(skip)]
    pub password: Option<SecretString>,
    /// Session lifetime from login.
    pub session_hours: i64,
    pub session_file: String,
    /// Enforce the 5..=600 character rule on the four reflections.
    pub enforce_text_length: bool,
    /// Default window for `history`.
    pub history_limit: u32,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub bind: String,
    /// Backend the gateway relays to; falls back to `endpoint`.
    pub target: Option<String>,
}

fn default_session_hours() -> i64 {
    24
}
fn default_history_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}
fn default_bind() -> String {
    "0.0.0.0:8888".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            target: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            username: None,
            password: None,
            session_hours: default_session_hours(),
            session_file: Self::session_file_default().to_string_lossy().to_string(),
            enforce_text_length: false,
            history_limit: default_history_limit(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wjournal")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".wjournal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wjournal.conf")
    }

    fn session_file_default() -> PathBuf {
        Self::config_dir().join("session.json")
    }

    /// Load the config file (if any), then overlay the process environment.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_file(&Self::config_file())?;
        cfg.apply_env(|key| env::var(key).ok())?;
        Ok(cfg)
    }

    /// Defaults when the file does not exist.
    pub fn load_file(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        debug!(path = %path.display(), "configuration file loaded");
        Ok(cfg)
    }

    /// Overlay settings from a variable source. Empty values are ignored.
    pub fn apply_env<F>(&mut self, var: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = lookup(ENV_ENDPOINT) {
            self.endpoint = Some(v);
        }
        if let Some(v) = lookup(ENV_USERNAME) {
            self.username = Some(v);
        }
        if let Some(v) = lookup(ENV_PASSWORD) {
            self.password = Some(SecretString::from(v));
        }
        if let Some(v) = lookup(ENV_SESSION_HOURS) {
            self.session_hours = v.trim().parse().map_err(|_| {
                AppError::Config(format!("{ENV_SESSION_HOURS} must be a whole number of hours"))
            })?;
        }
        if let Some(v) = lookup(ENV_GATEWAY_TARGET) {
            self.gateway.target = Some(v);
        }
        if let Some(v) = lookup(ENV_GATEWAY_BIND) {
            self.gateway.bind = v;
        }

        Ok(())
    }

    pub fn endpoint(&self) -> AppResult<&str> {
        required(self.endpoint.as_deref(), ENV_ENDPOINT)
    }

    pub fn username(&self) -> AppResult<&str> {
        required(self.username.as_deref(), ENV_USERNAME)
    }

    pub fn password(&self) -> AppResult<&SecretString> {
        self.password
            .as_ref()
            .ok_or_else(|| missing(ENV_PASSWORD))
    }

    /// Where the gateway relays to.
    pub fn gateway_target(&self) -> AppResult<&str> {
        match self.gateway.target.as_deref() {
            Some(t) if !t.trim().is_empty() => Ok(t),
            _ => required(self.endpoint.as_deref(), ENV_GATEWAY_TARGET),
        }
    }

    pub fn session_path(&self) -> PathBuf {
        expand_tilde(&self.session_file)
    }

    /// Fail fast unless endpoint, username and password are all present
    /// and the numeric settings are usable.
    pub fn require(&self) -> AppResult<()> {
        self.endpoint()?;
        self.username()?;
        self.password()?;
        if self.session_hours <= 0 {
            return Err(AppError::Config(
                "session_hours must be greater than zero".to_string(),
            ));
        }
        if !HISTORY_WINDOWS.contains(&self.history_limit) {
            return Err(AppError::Config(format!(
                "history_limit must be one of {HISTORY_WINDOWS:?} (got {})",
                self.history_limit
            )));
        }
        Ok(())
    }

    /// Write a commented template config file. Never overwrites.
    pub fn init_file(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path)?;
        writeln!(
            file,
            "# wjournal configuration. The password is read from {ENV_PASSWORD} only."
        )?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}

fn required<'a>(value: Option<&'a str>, key: &str) -> AppResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(key)),
    }
}

fn missing(key: &str) -> AppError {
    AppError::Config(format!(
        "missing required setting {key} (set it in the environment, a .env file, or {})",
        Config::config_file().display()
    ))
}
