//! In-memory repository
//!
//! Not durable: state is lost when the process exits. Reads share a read
//! lock; every write takes the single write lock, so a mutation batch is
//! never observed half-applied.

use async_trait::async_trait;
use shared::{MentorId, NewMentor, NewStudent, StudentId};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{Collections, Mutation, Repository, StudentFilter};
use crate::error::MentorshipResult;
use crate::model::{Mentor, Student};

#[derive(Clone, Default)]
pub struct MemoryRepository {
    collections: Arc<RwLock<Collections>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn create_mentor(&self, mentor: NewMentor) -> MentorshipResult<Mentor> {
        self.collections.write().await.insert_mentor(mentor)
    }

    async fn create_student(&self, student: NewStudent) -> MentorshipResult<Student> {
        self.collections.write().await.insert_student(student)
    }

    async fn find_mentor_by_id(&self, mentor_id: MentorId) -> MentorshipResult<Option<Mentor>> {
        Ok(self.collections.read().await.mentor(mentor_id))
    }

    async fn find_student_by_id(&self, student_id: StudentId) -> MentorshipResult<Option<Student>> {
        Ok(self.collections.read().await.student(student_id))
    }

    async fn list_mentors(&self) -> MentorshipResult<Vec<Mentor>> {
        Ok(self.collections.read().await.mentors())
    }

    async fn list_students(&self) -> MentorshipResult<Vec<Student>> {
        Ok(self.collections.read().await.students())
    }

    async fn find_students_by_ids(
        &self,
        student_ids: Vec<StudentId>,
        filter: StudentFilter,
    ) -> MentorshipResult<Vec<Student>> {
        Ok(self
            .collections
            .read()
            .await
            .students_by_ids(&student_ids, filter))
    }

    async fn apply(&self, mutations: Vec<Mutation>) -> MentorshipResult<()> {
        let mut collections = self.collections.write().await;
        let next = collections.apply(&mutations)?;
        *collections = next;
        Ok(())
    }
}
