use super::show::render_form;
use super::{open_store, require_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{EntryForm, ValidationRules};
use crate::errors::AppResult;
use crate::models::{Rating, Reflection};
use crate::ui::messages::success;
use crate::utils::date;

/// Create or update the entry for a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        emotional_state,
        physical_state,
        social_connectedness,
        accomplishment,
        growth,
        alignment,
        task_1,
        task_2,
        task_3,
        proud_of,
    } = cmd
    {
        //
        // 1. Session + store
        //
        let session = require_session(cfg)?;
        let store = open_store(cfg, &session)?;

        //
        // 2. Resolve date and load what is already saved
        //
        let today = date::today();
        let d = date::resolve_date(date.as_deref(), today)?;

        let mut form = EntryForm::new(d, ValidationRules::from_config(cfg));
        form.load(&store)?;

        //
        // 3. Apply the values given on the command line
        //
        let ratings = [
            (Rating::EmotionalState, emotional_state),
            (Rating::PhysicalState, physical_state),
            (Rating::SocialConnectedness, social_connectedness),
            (Rating::Accomplishment, accomplishment),
            (Rating::Growth, growth),
            (Rating::Alignment, alignment),
        ];
        for (rating, value) in ratings {
            if let Some(v) = value {
                form.set_rating(rating, *v);
            }
        }

        let texts = [
            (Reflection::Task1, task_1),
            (Reflection::Task2, task_2),
            (Reflection::Task3, task_3),
            (Reflection::ProudOf, proud_of),
        ];
        for (field, value) in texts {
            if let Some(v) = value {
                form.set_text(field, v.as_str());
            }
        }

        //
        // 4. Validate + upsert
        //
        let outcome = form.submit(&store, today)?;

        let verb = if outcome.was_update {
            "updated"
        } else {
            "created"
        };
        success(format!("Entry for {} {}.", form.entry().date_str(), verb));
        render_form(&form, today);
    }

    Ok(())
}
