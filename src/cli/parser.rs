use crate::export::ExportFormat;
use crate::store::HISTORY_WINDOWS;
use clap::{Parser, Subcommand};

/// Command-line interface definition for wjournal
/// Daily wellbeing journal backed by a spreadsheet record store
#[derive(Parser)]
#[command(
    name = "wjournal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A daily wellbeing journal: rate your day, note what mattered, browse past entries",
    long_about = None
)]
pub struct Cli {
    /// Override the record store endpoint (gateway or backend URL)
    #[arg(global = true, long = "endpoint")]
    pub endpoint: Option<String>,

    /// Override the session file path
    #[arg(global = true, long = "session-file")]
    pub session_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with the configured username and password
    Login {
        #[arg(long, short = 'u', help = "Username (prompted if omitted)")]
        username: Option<String>,

        #[arg(
            long,
            short = 'p',
            help = "Password (prompted without echo if omitted; a value here ends up in shell history)"
        )]
        password: Option<String>,
    },

    /// Discard the stored session
    Logout,

    /// Show who is logged in and until when
    Whoami,

    /// Show the entry for a date (default: today)
    Show {
        /// Date (YYYY-MM-DD, today, yesterday)
        date: Option<String>,
    },

    /// Create or update the entry for a date (default: today)
    ///
    /// Values not given keep what is already saved for that date,
    /// or the defaults for a new entry.
    Add {
        /// Date (YYYY-MM-DD, today, yesterday)
        date: Option<String>,

        #[arg(long = "emotional", help = "Emotional State (1-7)")]
        emotional_state: Option<i32>,

        #[arg(long = "physical", help = "Physical State (1-7)")]
        physical_state: Option<i32>,

        #[arg(long = "social", help = "Social Connectedness (1-7)")]
        social_connectedness: Option<i32>,

        #[arg(long = "accomplishment", help = "Sense of Accomplishment (1-7)")]
        accomplishment: Option<i32>,

        #[arg(long = "growth", help = "Personal Growth (1-7)")]
        growth: Option<i32>,

        #[arg(long = "alignment", help = "Reflection / Alignment (1-7)")]
        alignment: Option<i32>,

        #[arg(long = "task1", help = "Task 1 reflection")]
        task_1: Option<String>,

        #[arg(long = "task2", help = "Task 2 reflection")]
        task_2: Option<String>,

        #[arg(long = "task3", help = "Task 3 reflection")]
        task_3: Option<String>,

        #[arg(long = "proud", help = "What you are proud of today")]
        proud_of: Option<String>,
    },

    /// List past entries (read-only), newest first
    History {
        #[arg(
            long,
            short = 'n',
            value_parser = parse_window,
            help = "Show the last N days (15, 30, 60, 120 or 365)"
        )]
        limit: Option<u32>,

        #[arg(long, value_name = "FILE", help = "Also write the listing to FILE")]
        export: Option<String>,

        #[arg(long, value_enum, default_value = "csv", help = "Export format")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite an existing export file")]
        force: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a template configuration file")]
        init: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Run the forwarding gateway in front of the record store
    Serve {
        #[arg(long, value_name = "ADDR", help = "Listen address (default from config)")]
        bind: Option<String>,

        #[arg(long, value_name = "URL", help = "Backend URL to relay to")]
        target: Option<String>,
    },
}

fn parse_window(s: &str) -> Result<u32, String> {
    let n: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a whole number"))?;
    if HISTORY_WINDOWS.contains(&n) {
        Ok(n)
    } else {
        Err(format!("choose one of {HISTORY_WINDOWS:?}"))
    }
}
