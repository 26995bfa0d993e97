pub mod entry;
pub mod session;

pub use entry::{Entry, Rating, Reflection, RowNumber};
pub use session::{Session, StoredSession};
