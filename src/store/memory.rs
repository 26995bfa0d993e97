//! In-process record store with the backend's row-matching rules:
//! one row per date, rows numbered from 2 (row 1 is the sheet header).

use super::{RecordStore, UpsertOutcome, check_limit, newest_first};
use crate::errors::AppResult;
use crate::models::{Entry, RowNumber};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

const FIRST_DATA_ROW: u64 = 2;

#[derive(Default)]
pub struct MemoryRecordStore {
    rows: Mutex<BTreeMap<NaiveDate, Entry>>,
    requests: AtomicUsize,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations served so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn tick(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

impl RecordStore for MemoryRecordStore {
    fn fetch_entry(&self, date: NaiveDate) -> AppResult<Option<Entry>> {
        self.tick();
        let rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.get(&date).cloned())
    }

    fn list_entries(&self, limit: u32) -> AppResult<Vec<Entry>> {
        self.tick();
        let max = check_limit(limit)?;
        let rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(newest_first(rows.values().cloned().collect(), max))
    }

    /// Matches on `date`; the client's `row_number` is ignored.
    fn upsert(&self, entry: &Entry) -> AppResult<UpsertOutcome> {
        self.tick();
        let mut rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);

        let existing = rows.get(&entry.date).and_then(|e| e.row_number.clone());
        let was_update = existing.is_some();
        let row_number =
            existing.unwrap_or_else(|| RowNumber::new(FIRST_DATA_ROW + rows.len() as u64));

        let mut stored = entry.clone();
        stored.row_number = Some(row_number.clone());
        rows.insert(entry.date, stored);

        Ok(UpsertOutcome {
            row_number: Some(row_number),
            was_update,
        })
    }
}
