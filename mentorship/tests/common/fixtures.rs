//! Test fixtures shared by the mentorship test suites
#![allow(dead_code)]

use shared::{NewMentor, NewStudent};

pub struct TestFixtures;

impl TestFixtures {
    pub const MENTOR_ADA: (&'static str, &'static str) = ("Ada", "ada@x.com");
    pub const MENTOR_GRACE: (&'static str, &'static str) = ("Grace", "grace@x.com");
    pub const MENTOR_LINUS: (&'static str, &'static str) = ("Linus", "linus@x.com");
    pub const STUDENT_BO: (&'static str, &'static str) = ("Bo", "bo@x.com");
    pub const STUDENT_CY: (&'static str, &'static str) = ("Cy", "cy@x.com");

    pub fn ada() -> NewMentor {
        NewMentor::new(Self::MENTOR_ADA.0, Self::MENTOR_ADA.1)
    }

    pub fn grace() -> NewMentor {
        NewMentor::new(Self::MENTOR_GRACE.0, Self::MENTOR_GRACE.1)
    }

    pub fn linus() -> NewMentor {
        NewMentor::new(Self::MENTOR_LINUS.0, Self::MENTOR_LINUS.1)
    }

    pub fn bo() -> NewStudent {
        NewStudent::new(Self::STUDENT_BO.0, Self::STUDENT_BO.1)
    }

    pub fn cy() -> NewStudent {
        NewStudent::new(Self::STUDENT_CY.0, Self::STUDENT_CY.1)
    }

    /// Numbered students for larger scenarios
    pub fn student(n: usize) -> NewStudent {
        NewStudent::new(format!("Student {n}"), format!("student{n}@x.com"))
    }

    /// Numbered mentors for larger scenarios
    pub fn mentor(n: usize) -> NewMentor {
        NewMentor::new(format!("Mentor {n}"), format!("mentor{n}@x.com"))
    }
}
