//! Read-only views over the repository

use shared::{MentorId, StudentId};
use std::sync::Arc;

use crate::error::{MentorshipError, MentorshipResult};
use crate::model::{Mentor, RosterEntry, Student};
use crate::store::Repository;

pub struct QueryFacade<R: Repository> {
    repository: Arc<R>,
}

impl<R: Repository> Clone for QueryFacade<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository> QueryFacade<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_mentors(&self) -> MentorshipResult<Vec<Mentor>> {
        self.repository.list_mentors().await
    }

    pub async fn list_students(&self) -> MentorshipResult<Vec<Student>> {
        self.repository.list_students().await
    }

    pub async fn mentor_of(&self, mentor_id: MentorId) -> MentorshipResult<Mentor> {
        self.repository
            .find_mentor_by_id(mentor_id)
            .await?
            .ok_or_else(|| MentorshipError::mentor_not_found(mentor_id))
    }

    pub async fn student_of(&self, student_id: StudentId) -> MentorshipResult<Student> {
        self.repository
            .find_student_by_id(student_id)
            .await?
            .ok_or_else(|| MentorshipError::student_not_found(student_id))
    }

    /// Every student the mentor has ever had, current ones flagged
    pub async fn roster_of(&self, mentor_id: MentorId) -> MentorshipResult<Vec<RosterEntry>> {
        Ok(self.mentor_of(mentor_id).await?.students_assigned)
    }

    pub async fn previous_mentor_of(&self, student_id: StudentId) -> MentorshipResult<MentorId> {
        self.student_of(student_id)
            .await?
            .prev_mentor_id
            .ok_or(MentorshipError::NoHistory { student_id })
    }
}
