//! Pairing ledger rows
//!
//! A pairing records that a student has been assigned to a mentor at some
//! point. The ledger holds at most one row per (student, mentor) and is the
//! only place the "current" flag lives; both the mentor roster and the
//! student history are read off it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{MentorId, StudentId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    pub student_id: StudentId,
    pub mentor_id: MentorId,
    pub is_current: bool,
    pub date_added: DateTime<Utc>,
}

impl Pairing {
    /// New pairings always start out current
    pub fn current(student_id: StudentId, mentor_id: MentorId, date_added: DateTime<Utc>) -> Self {
        Self {
            student_id,
            mentor_id,
            is_current: true,
            date_added,
        }
    }

    pub fn pairs(&self, student_id: StudentId, mentor_id: MentorId) -> bool {
        self.student_id == student_id && self.mentor_id == mentor_id
    }
}
