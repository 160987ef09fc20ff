//! Mentorship-core error types

use shared::{MentorId, SharedError, StudentId};
use std::fmt;
use thiserror::Error;

/// Which collection a missing record was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Mentor,
    Student,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Mentor => write!(f, "Mentor"),
            EntityKind::Student => write!(f, "Student"),
        }
    }
}

#[derive(Error, Debug)]
pub enum MentorshipError {
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Student {student_id} is already assigned to mentor {mentor_id}")]
    AlreadyAssigned {
        student_id: StudentId,
        mentor_id: MentorId,
    },

    #[error("Student {student_id} has no previous mentor")]
    NoHistory { student_id: StudentId },

    #[error("Integrity violation: {message}")]
    Integrity { message: String },

    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}

impl MentorshipError {
    pub fn mentor_not_found(id: MentorId) -> Self {
        Self::NotFound {
            kind: EntityKind::Mentor,
            id: id.to_string(),
        }
    }

    pub fn student_not_found(id: StudentId) -> Self {
        Self::NotFound {
            kind: EntityKind::Student,
            id: id.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn integrity(message: impl Into<String>) -> Self {
        Self::Integrity {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Storage and integrity failures are server-side faults
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            MentorshipError::StorageUnavailable { .. } | MentorshipError::Integrity { .. }
        )
    }
}

impl From<std::io::Error> for MentorshipError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageUnavailable {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MentorshipError {
    fn from(err: serde_json::Error) -> Self {
        Self::StorageUnavailable {
            message: format!("document encoding failed: {err}"),
        }
    }
}

pub type MentorshipResult<T> = Result<T, MentorshipError>;
