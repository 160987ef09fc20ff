//! Entity repository
//!
//! All reads and writes of mentor and student state go through the
//! [`Repository`] trait. Writes are expressed as [`Mutation`] batches that a
//! repository applies all-or-nothing and persists before returning.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{MentorId, NewMentor, NewStudent, StudentId};

use crate::error::MentorshipResult;
use crate::model::{Mentor, Student};

pub mod collections;
pub mod file;
pub mod memory;

#[cfg(test)]
mod tests;

pub use collections::Collections;
pub use file::FileRepository;
pub use memory::MemoryRepository;

/// Predicate used by [`Repository::find_students_by_ids`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentFilter {
    #[default]
    Any,
    /// Students that have never had a mentor
    Unassigned,
    /// Students that have had at least one mentor
    Assigned,
}

impl StudentFilter {
    pub fn matches(&self, student: &Student) -> bool {
        match self {
            StudentFilter::Any => true,
            StudentFilter::Unassigned => !student.is_mentor_assigned,
            StudentFilter::Assigned => student.is_mentor_assigned,
        }
    }
}

/// Element-scoped change to assignment state
///
/// Each variant addresses a single ledger row or a single student field.
/// Nothing replaces a whole roster or history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Add a current pairing; fails if the pair already has a ledger row
    AppendPairing {
        student_id: StudentId,
        mentor_id: MentorId,
        date_added: DateTime<Utc>,
    },
    /// Flip the current flag on the existing pairing of this pair
    SetPairingCurrent {
        student_id: StudentId,
        mentor_id: MentorId,
        current: bool,
    },
    /// Overwrite the student's previous-mentor pointer
    SetPrevMentor {
        student_id: StudentId,
        prev_mentor_id: Option<MentorId>,
    },
}

/// Storage abstraction for mentors, students and their pairings
#[mockall::automock]
#[async_trait]
pub trait Repository: Send + Sync {
    /// Create a mentor; `Conflict` if the email is taken
    async fn create_mentor(&self, mentor: NewMentor) -> MentorshipResult<Mentor>;

    /// Create a student; `Conflict` if the email is taken
    async fn create_student(&self, student: NewStudent) -> MentorshipResult<Student>;

    async fn find_mentor_by_id(&self, mentor_id: MentorId) -> MentorshipResult<Option<Mentor>>;

    async fn find_student_by_id(&self, student_id: StudentId) -> MentorshipResult<Option<Student>>;

    /// All mentors in creation order
    async fn list_mentors(&self) -> MentorshipResult<Vec<Mentor>>;

    /// All students in creation order
    async fn list_students(&self) -> MentorshipResult<Vec<Student>>;

    /// Existing students among `student_ids` that match `filter`
    ///
    /// Results follow the order of `student_ids`; unknown and repeated ids
    /// are skipped.
    async fn find_students_by_ids(
        &self,
        student_ids: Vec<StudentId>,
        filter: StudentFilter,
    ) -> MentorshipResult<Vec<Student>>;

    /// Apply a batch of mutations atomically
    async fn apply(&self, mutations: Vec<Mutation>) -> MentorshipResult<()>;
}
