//! Test helpers for mentorship test suites
#![allow(dead_code)]

use mentorship::{AssignmentEngine, MemoryRepository, Mentor, QueryFacade, Student};
use shared::{MentorId, StudentId};
use std::collections::HashMap;
use std::sync::Arc;

/// Engine and query facade over one in-memory repository
pub struct World {
    pub repository: Arc<MemoryRepository>,
    pub engine: AssignmentEngine<MemoryRepository>,
    pub query: QueryFacade<MemoryRepository>,
}

impl World {
    pub fn new() -> Self {
        let repository = Arc::new(MemoryRepository::new());
        Self {
            engine: AssignmentEngine::new(Arc::clone(&repository)),
            query: QueryFacade::new(Arc::clone(&repository)),
            repository,
        }
    }

    pub async fn mentors(&self, count: usize) -> Vec<MentorId> {
        let mut ids = Vec::with_capacity(count);
        for n in 0..count {
            let mentor = self
                .engine
                .create_mentor(super::TestFixtures::mentor(n))
                .await
                .unwrap();
            ids.push(mentor.mentor_id);
        }
        ids
    }

    pub async fn students(&self, count: usize) -> Vec<StudentId> {
        let mut ids = Vec::with_capacity(count);
        for n in 0..count {
            let student = self
                .engine
                .create_student(super::TestFixtures::student(n))
                .await
                .unwrap();
            ids.push(student.student_id);
        }
        ids
    }

    pub async fn student(&self, id: StudentId) -> Student {
        self.query.student_of(id).await.unwrap()
    }

    pub async fn mentor(&self, id: MentorId) -> Mentor {
        self.query.mentor_of(id).await.unwrap()
    }
}

pub struct TestHelpers;

impl TestHelpers {
    /// Check that both sides of every pairing agree
    ///
    /// Panics with a description of the first disagreement found.
    pub async fn assert_consistent(world: &World) {
        let mentors = world.query.list_mentors().await.unwrap();
        let students = world.query.list_students().await.unwrap();

        let student_by_id: HashMap<StudentId, &Student> =
            students.iter().map(|s| (s.student_id, s)).collect();
        let mentor_by_id: HashMap<MentorId, &Mentor> =
            mentors.iter().map(|m| (m.mentor_id, m)).collect();

        for student in &students {
            let current: Vec<_> = student
                .mentor_assigned
                .iter()
                .filter(|e| e.is_current_mentor)
                .collect();
            assert!(current.len() <= 1, "{} has several current mentors", student.student_id);
            assert_eq!(
                student.current_mentor_id,
                current.first().map(|e| e.mentor_id),
                "current mentor pointer disagrees with history"
            );
            assert_eq!(student.is_mentor_assigned, !student.mentor_assigned.is_empty());

            for entry in &student.mentor_assigned {
                let mentor = mentor_by_id[&entry.mentor_id];
                let roster = mentor
                    .roster_entry(student.student_id)
                    .expect("history entry without roster entry");
                assert_eq!(roster.is_current_student, entry.is_current_mentor);
            }
        }

        for mentor in &mentors {
            for entry in &mentor.students_assigned {
                let student = student_by_id[&entry.student_id];
                assert!(student.has_history_with(mentor.mentor_id));
            }
        }
    }
}
