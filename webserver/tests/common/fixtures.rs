//! Request bodies used across HTTP tests
#![allow(dead_code)]

use serde_json::{Value, json};

pub struct TestFixtures;

impl TestFixtures {
    pub fn mentor(name: &str, email: &str) -> Value {
        json!({ "mentorName": name, "mentorEmail": email })
    }

    pub fn student(name: &str, email: &str) -> Value {
        json!({ "studentName": name, "studentEmail": email })
    }

    pub fn ada() -> Value {
        Self::mentor("Ada", "ada@x.com")
    }

    pub fn grace() -> Value {
        Self::mentor("Grace", "grace@x.com")
    }

    pub fn bo() -> Value {
        Self::student("Bo", "bo@x.com")
    }

    pub fn cy() -> Value {
        Self::student("Cy", "cy@x.com")
    }
}
