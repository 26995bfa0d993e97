pub mod edit_window;
pub mod form;
pub mod validate;

pub use form::{EntryForm, FormState};
pub use validate::{ValidationRules, validate_entry};
