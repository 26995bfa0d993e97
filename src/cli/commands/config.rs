use crate::cli::parser::Commands;
use crate::config::{Config, ENV_PASSWORD};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- INIT CONFIG ----
        if *init {
            if Config::init_file(&path)? {
                success(format!("Configuration file created: {}", path.display()));
            } else {
                warning(format!(
                    "Configuration file already exists: {}",
                    path.display()
                ));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            print!("{}", serde_yaml::to_string(cfg)?);
            let password = if cfg.password.is_some() {
                "set"
            } else {
                "not set"
            };
            println!("# password ({ENV_PASSWORD}): {password}");
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(&path, editor.as_deref());
        }

        if !(*init || *print_config || *edit_config) {
            info(format!("Configuration file: {}", path.display()));
        }
    }

    Ok(())
}

fn edit(path: &std::path::Path, requested: Option<&str>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or(&default_editor);

    match Command::new(editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{default_editor}'"
                    ));
                }
                Ok(_) | Err(_) => {
                    error(format!(
                        "Failed to edit configuration file using fallback '{default_editor}'"
                    ));
                }
            }
        }
    }
}
