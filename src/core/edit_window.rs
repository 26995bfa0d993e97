use chrono::NaiveDate;

/// Whether the entry for `date` may be created or changed when the
/// current local day is `today`.
///
/// Every date is editable: past days can be back-filled and corrected,
/// and future days can be prepared. There is no today-only cutoff.
pub fn is_editable(_date: NaiveDate, _today: NaiveDate) -> bool {
    true
}
