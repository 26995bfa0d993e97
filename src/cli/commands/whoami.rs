use crate::auth::SessionGuard;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::formatting::local_timestamp;

pub fn handle(cfg: &Config) -> AppResult<()> {
    match SessionGuard::from_config(cfg)?.restore() {
        Some(session) => info(format!(
            "Signed in as {} until {}.",
            session.username,
            local_timestamp(session.expires_at)
        )),
        None => warning("Not logged in."),
    }
    Ok(())
}
