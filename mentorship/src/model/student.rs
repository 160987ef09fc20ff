//! Student records and their mentor-history projection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{MentorId, StudentId};

/// Stored student fields
///
/// `prev_mentor_id` is the only assignment state kept on the record itself;
/// it cannot be recovered from the pairing ledger once a student returns
/// to a former mentor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub student_id: StudentId,
    pub student_name: String,
    pub student_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_mentor_id: Option<MentorId>,
}

/// One mentor in a student's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub mentor_id: MentorId,
    pub mentor_name: String,
    pub is_current_mentor: bool,
    pub date_added: DateTime<Utc>,
}

/// Student document as seen by callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: StudentId,
    pub student_name: String,
    pub student_email: String,
    pub is_mentor_assigned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_mentor_id: Option<MentorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_mentor_id: Option<MentorId>,
    pub mentor_assigned: Vec<HistoryEntry>,
}

impl Student {
    pub fn has_history_with(&self, mentor_id: MentorId) -> bool {
        self.mentor_assigned
            .iter()
            .any(|entry| entry.mentor_id == mentor_id)
    }

    pub fn is_assigned_to(&self, mentor_id: MentorId) -> bool {
        self.current_mentor_id == Some(mentor_id)
    }
}
