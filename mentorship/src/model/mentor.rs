//! Mentor records and their roster projection

use serde::{Deserialize, Serialize};
use shared::{MentorId, StudentId};

/// Stored mentor fields; the roster is not stored here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorRecord {
    pub mentor_id: MentorId,
    pub mentor_name: String,
    pub mentor_email: String,
}

/// One student on a mentor's roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub student_id: StudentId,
    pub student_name: String,
    pub is_current_student: bool,
}

/// Mentor document as seen by callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub mentor_id: MentorId,
    pub mentor_name: String,
    pub mentor_email: String,
    pub students_assigned: Vec<RosterEntry>,
}

impl Mentor {
    /// Students whose live mentor is this one
    pub fn current_students(&self) -> Vec<StudentId> {
        self.students_assigned
            .iter()
            .filter(|entry| entry.is_current_student)
            .map(|entry| entry.student_id)
            .collect()
    }

    pub fn roster_entry(&self, student_id: StudentId) -> Option<&RosterEntry> {
        self.students_assigned
            .iter()
            .find(|entry| entry.student_id == student_id)
    }
}
