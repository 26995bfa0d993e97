use crate::models::Entry;
use serde::Serialize;

/// Flat row for CSV / JSON export of the history listing.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub date: String,
    pub emotional_state: i32,
    pub physical_state: i32,
    pub social_connectedness: i32,
    pub accomplishment: i32,
    pub growth: i32,
    pub alignment: i32,
    pub task_1: String,
    pub task_2: String,
    pub task_3: String,
    pub proud_of: String,
    pub row_number: String,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            date: e.date_str(),
            emotional_state: e.emotional_state,
            physical_state: e.physical_state,
            social_connectedness: e.social_connectedness,
            accomplishment: e.accomplishment,
            growth: e.growth,
            alignment: e.alignment,
            task_1: e.task_1.clone(),
            task_2: e.task_2.clone(),
            task_3: e.task_3.clone(),
            proud_of: e.proud_of.clone(),
            row_number: e
                .row_number
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}
