pub mod add;
pub mod config;
pub mod history;
pub mod login;
pub mod logout;
pub mod serve;
pub mod show;
pub mod whoami;

use crate::auth::SessionGuard;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Session;
use crate::store::HttpRecordStore;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, IsTerminal, Write};

/// The restored session, or `NotAuthenticated`.
pub(crate) fn require_session(cfg: &Config) -> AppResult<Session> {
    SessionGuard::from_config(cfg)?
        .restore()
        .ok_or(AppError::NotAuthenticated)
}

/// Record store client acting for the signed-in user.
pub(crate) fn open_store(cfg: &Config, session: &Session) -> AppResult<HttpRecordStore> {
    HttpRecordStore::new(cfg.endpoint()?, session.username.as_str())
}

/// Read one line from stdin after printing `label`.
pub(crate) fn prompt(label: &str) -> AppResult<String> {
    print!("{label}");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

/// Like [`prompt`], but typed characters are not echoed. Falls back to a
/// plain line read when stdin is not a terminal (pipes, tests).
pub(crate) fn prompt_hidden(label: &str) -> AppResult<String> {
    if !io::stdin().is_terminal() {
        return prompt(label);
    }

    print!("{label}");
    io::stdout().flush().ok();

    terminal::enable_raw_mode()?;
    let secret = read_hidden_line();
    let restored = terminal::disable_raw_mode();
    println!();

    restored?;
    secret
}

fn read_hidden_line() -> AppResult<String> {
    let mut secret = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Enter => return Ok(secret),
            KeyCode::Backspace => {
                secret.pop();
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(AppError::Validation("Login cancelled.".to_string()));
            }
            KeyCode::Char(c) => secret.push(c),
            _ => {}
        }
    }
}
