use crate::auth::SessionGuard;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `logout` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    SessionGuard::from_config(cfg)?.logout()?;
    success("Signed out.");
    Ok(())
}
