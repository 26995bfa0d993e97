//! Entry Upsert Protocol: the per-date form state machine.
//!
//! ```text
//! Idle ──select──▶ Loading ──None──▶ Empty ─┐
//!                     │ ──Some──▶ Loaded ◀──┤ submit ▶ Saving ─ok─▶ Loaded
//!                     └─error─▶ LoadError ──┘            └─err─▶ (prior state)
//! ```

use super::edit_window::is_editable;
use super::validate::{ValidationRules, validate_entry};
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, Rating, Reflection, RowNumber};
use crate::store::{RecordStore, UpsertOutcome};
use chrono::NaiveDate;
use tracing::debug;

pub const MSG_LOADED: &str = "Loaded saved entry.";
pub const MSG_EMPTY: &str = "No entry yet for this date.";
pub const MSG_CREATED: &str = "Entry saved.";
pub const MSG_UPDATED: &str = "Entry updated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Loading,
    /// No record for the date; the form shows defaults.
    Empty,
    /// A record exists; its row number is retained.
    Loaded,
    /// Loading failed; the form keeps its last-known values.
    LoadError,
    Saving,
}

impl FormState {
    pub fn is_busy(&self) -> bool {
        matches!(self, FormState::Loading | FormState::Saving)
    }

    fn accepts_submit(&self) -> bool {
        matches!(
            self,
            FormState::Empty | FormState::Loaded | FormState::LoadError
        )
    }
}

pub struct EntryForm {
    entry: Entry,
    state: FormState,
    message: Option<String>,
    rules: ValidationRules,
}

impl EntryForm {
    pub fn new(date: NaiveDate, rules: ValidationRules) -> Self {
        Self {
            entry: Entry::new(date),
            state: FormState::Idle,
            message: None,
            rules,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn date(&self) -> NaiveDate {
        self.entry.date
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn row_number(&self) -> Option<&RowNumber> {
        self.entry.row_number.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.entry.row_number.is_some() {
            "Update entry"
        } else {
            "Submit entry"
        }
    }

    /// Submit is enabled when nothing is in flight and the date is editable.
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        self.state.accepts_submit() && is_editable(self.entry.date, today)
    }

    pub fn set_rating(&mut self, rating: Rating, value: i32) {
        self.entry.set_rating(rating, value);
    }

    pub fn set_text(&mut self, field: Reflection, value: impl Into<String>) {
        self.entry.set_text(field, value);
    }

    /// Load the form for its current date.
    pub fn load<R: RecordStore>(&mut self, store: &R) -> AppResult<FormState> {
        let date = self.entry.date;
        self.select_date(store, date)
    }

    /// Switch to `date` and fetch its record. A failed fetch leaves the
    /// form in `LoadError` with its last values and also hands the error
    /// back to the caller.
    pub fn select_date<R: RecordStore>(&mut self, store: &R, date: NaiveDate) -> AppResult<FormState> {
        self.state = FormState::Loading;
        self.message = None;
        debug!(%date, "loading entry");

        match store.fetch_entry(date) {
            Ok(Some(mut found)) => {
                // The backend keys by date; keep the one that was asked for.
                found.date = date;
                self.entry = found;
                self.state = FormState::Loaded;
                self.message = Some(MSG_LOADED.to_string());
            }
            Ok(None) => {
                self.entry = Entry::new(date);
                self.state = FormState::Empty;
                self.message = Some(MSG_EMPTY.to_string());
            }
            Err(e) => {
                // A row number only identifies the date it was loaded for.
                if self.entry.date != date {
                    self.entry.row_number = None;
                }
                self.entry.date = date;
                self.state = FormState::LoadError;
                self.message = Some(e.to_string());
                return Err(e);
            }
        }

        Ok(self.state)
    }

    /// Validate locally, then upsert. On failure the prior state is kept.
    pub fn submit<R: RecordStore>(&mut self, store: &R, today: NaiveDate) -> AppResult<UpsertOutcome> {
        if self.state.is_busy() {
            return Err(AppError::Busy);
        }
        if !self.state.accepts_submit() {
            return Err(AppError::Validation(
                "Select a date and load its entry before submitting.".to_string(),
            ));
        }
        if !is_editable(self.entry.date, today) {
            return Err(AppError::Validation(format!(
                "The entry for {} can no longer be edited.",
                self.entry.date_str()
            )));
        }

        if let Err(e) = validate_entry(&self.entry, &self.rules) {
            self.message = Some(e.to_string());
            return Err(e);
        }

        let prior = std::mem::replace(&mut self.state, FormState::Saving);
        self.message = None;

        match store.upsert(&self.entry) {
            Ok(outcome) => {
                if let Some(row) = &outcome.row_number {
                    self.entry.row_number = Some(row.clone());
                }
                self.state = FormState::Loaded;
                self.message = Some(
                    if outcome.was_update {
                        MSG_UPDATED
                    } else {
                        MSG_CREATED
                    }
                    .to_string(),
                );
                debug!(date = %self.entry.date, updated = outcome.was_update, "entry saved");
                Ok(outcome)
            }
            Err(e) => {
                self.state = prior;
                self.message = Some(e.to_string());
                Err(e)
            }
        }
    }
}
