//! Request and response bodies for the HTTP API
//!
//! Request fields are optional so a missing field surfaces as a validation
//! error rather than a deserialization failure.

use chrono::{DateTime, Utc};
use mentorship::{Mentor, Student, TransitionKind};
use serde::{Deserialize, Serialize};
use shared::MentorId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentorRequest {
    pub mentor_name: Option<String>,
    pub mentor_email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub student_name: Option<String>,
    pub student_email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignMentorRequest {
    pub mentor_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignStudentsRequest {
    pub student_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorCreated {
    pub message: String,
    pub mentor: Mentor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCreated {
    pub message: String,
    pub student: Student,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorAssigned {
    pub message: String,
    pub transition: TransitionKind,
    pub student: Student,
    pub mentor: Mentor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentsAssigned {
    pub message: String,
    pub mentor: Mentor,
    pub students: Vec<Student>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousMentor {
    pub prev_mentor_id: MentorId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub mentors: usize,
    pub students: usize,
}
