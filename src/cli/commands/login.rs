use super::{prompt, prompt_hidden};
use crate::auth::SessionGuard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::local_timestamp;

/// Handle the `login` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let guard = SessionGuard::from_config(cfg)?;

        let username = match username {
            Some(u) => u.clone(),
            None => prompt("Username: ")?,
        };
        let password = match password {
            Some(p) => p.clone(),
            None => prompt_hidden("Password: ")?,
        };

        let session = guard.login(&username, &password)?;

        success(format!(
            "Signed in as {} (session valid until {}).",
            session.username,
            local_timestamp(session.expires_at)
        ));
    }

    Ok(())
}
