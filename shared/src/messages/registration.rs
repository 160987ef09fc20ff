//! Registration commands for mentors and students

use serde::{Deserialize, Serialize};

/// Validated input for creating a mentor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMentor {
    pub mentor_name: String,
    pub mentor_email: String,
}

impl NewMentor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            mentor_name: name.into(),
            mentor_email: email.into(),
        }
    }
}

/// Validated input for creating a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub student_name: String,
    pub student_email: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            student_name: name.into(),
            student_email: email.into(),
        }
    }
}
