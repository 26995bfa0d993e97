//! Record Store Adapter: the three operations the journal needs from the
//! spreadsheet-backed record store.

pub mod http;
pub mod memory;
pub mod wire;

pub use http::HttpRecordStore;
pub use memory::MemoryRecordStore;

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, RowNumber};
use chrono::NaiveDate;

/// Default history window.
pub const DEFAULT_LIST_LIMIT: u32 = 60;

/// Windows offered by `history --limit`.
pub const HISTORY_WINDOWS: [u32; 5] = [15, 30, 60, 120, 365];

/// Result of an upsert. `was_update` comes from the backend and is the
/// only source of truth for created-vs-updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub row_number: Option<RowNumber>,
    pub was_update: bool,
}

pub trait RecordStore {
    /// `Ok(None)` means no record exists for `date` yet.
    fn fetch_entry(&self, date: NaiveDate) -> AppResult<Option<Entry>>;

    /// Up to `limit` most recent entries, newest first.
    fn list_entries(&self, limit: u32) -> AppResult<Vec<Entry>>;

    /// Create or update the record for `entry.date`.
    fn upsert(&self, entry: &Entry) -> AppResult<UpsertOutcome>;
}

impl<R: RecordStore + ?Sized> RecordStore for &R {
    fn fetch_entry(&self, date: NaiveDate) -> AppResult<Option<Entry>> {
        (**self).fetch_entry(date)
    }

    fn list_entries(&self, limit: u32) -> AppResult<Vec<Entry>> {
        (**self).list_entries(limit)
    }

    fn upsert(&self, entry: &Entry) -> AppResult<UpsertOutcome> {
        (**self).upsert(entry)
    }
}

pub(crate) fn check_limit(limit: u32) -> AppResult<usize> {
    if limit == 0 {
        return Err(AppError::InvalidLimit(limit));
    }
    Ok(limit as usize)
}

/// Newest first, at most `limit`.
pub(crate) fn newest_first(mut entries: Vec<Entry>, limit: usize) -> Vec<Entry> {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(limit);
    entries
}
