use super::{open_store, require_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{EntryForm, FormState, ValidationRules};
use crate::errors::AppResult;
use crate::models::{Rating, Reflection};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_rating, colorize_optional};
use crate::utils::date::{self, long_label};
use crate::utils::formatting::{bold, italic, rating_bar};
use chrono::NaiveDate;

/// Show the entry for a date, the way the form would present it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let session = require_session(cfg)?;
        let store = open_store(cfg, &session)?;

        let today = date::today();
        let d = date::resolve_date(date.as_deref(), today)?;

        let mut form = EntryForm::new(d, ValidationRules::from_config(cfg));
        form.load(&store)?;

        render_form(&form, today);
    }

    Ok(())
}

pub(crate) fn render_form(form: &EntryForm, today: NaiveDate) {
    let entry = form.entry();

    header(format!("{} ({})", entry.date_str(), long_label(entry.date)));

    println!("{}", bold("MOOD"));
    for rating in Rating::ALL {
        let value = entry.rating(rating);
        println!(
            "  {:<26} {}{}{}",
            rating.label(),
            color_for_rating(value),
            rating_bar(value),
            RESET
        );
        println!("  {}", italic(&format!("\u{201c}{}\u{201d}", rating.prompt())));
    }

    println!();
    println!("{}", bold("REFLECTIONS"));
    for field in Reflection::ALL {
        println!("  {:<9} {}", field.label(), colorize_optional(entry.text(field)));
    }
    println!();

    if let Some(msg) = form.message() {
        info(msg);
    }

    if form.state() == FormState::Loaded
        && let Some(row) = form.row_number()
    {
        println!("Row: {row}");
    }

    if form.can_submit(today) {
        println!(
            "{}: wjournal add {} [--emotional N ...]",
            form.submit_label(),
            entry.date_str()
        );
    }
}
