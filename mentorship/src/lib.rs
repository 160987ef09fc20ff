//! Mentor–student pairing core
//!
//! Mentors and students are stored by a [`store::Repository`]. The
//! [`engine::AssignmentEngine`] is the only writer of assignment state and
//! the [`query::QueryFacade`] serves read-only views.

pub mod core;
pub mod engine;
pub mod error;
pub mod model;
pub mod query;
pub mod store;

pub use engine::{AssignmentEngine, AssignmentOutcome, BatchOutcome};
pub use error::{EntityKind, MentorshipError, MentorshipResult};
pub use model::{HistoryEntry, Mentor, RosterEntry, Student};
pub use query::QueryFacade;
pub use store::{FileRepository, MemoryRepository, MockRepository, Mutation, Repository, StudentFilter};
pub use crate::core::TransitionKind;
