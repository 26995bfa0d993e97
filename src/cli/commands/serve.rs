use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::gateway;
use crate::ui::messages::info;

/// Run the forwarding gateway in the foreground until interrupted.
/// Command-line values win over the configured bind address and target.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind, target } = cmd {
        let addr = bind.as_deref().unwrap_or(&cfg.gateway.bind);
        let relay_to = match target.as_deref() {
            Some(t) => t,
            None => cfg.gateway_target()?,
        };

        info(format!("Gateway on {addr}, relaying to {relay_to} (Ctrl+C to stop)"));
        gateway::serve(addr, relay_to)?;
    }
    Ok(())
}
