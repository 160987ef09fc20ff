//! Domain documents
//!
//! `*Record` types are what the repository stores. `Mentor` and `Student`
//! are the documents handed to callers, with the roster and the mentor
//! history projected from the pairing ledger.

pub mod mentor;
pub mod pairing;
pub mod student;

pub use mentor::{Mentor, MentorRecord, RosterEntry};
pub use pairing::Pairing;
pub use student::{HistoryEntry, Student, StudentRecord};
