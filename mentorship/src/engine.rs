//! Assignment engine
//!
//! Owns the write path for assignments: lock the touched entities, read,
//! plan a transition, apply the lowered mutation batch, and re-read the
//! documents the caller gets back.

use chrono::Utc;
use serde::Serialize;
use shared::{Component, MentorId, NewMentor, NewStudent, StudentId, component_debug, component_error, component_info};
use std::sync::Arc;

use crate::core::{EntityKey, EntityLocks, TransitionKind, plan_assignment, plan_batch};
use crate::error::{MentorshipError, MentorshipResult};
use crate::model::{Mentor, Student};
use crate::store::{Repository, StudentFilter};

/// Result of a single assignment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentOutcome {
    pub transition: TransitionKind,
    pub student: Student,
    pub mentor: Mentor,
}

/// Result of a batch assignment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub mentor: Mentor,
    pub students: Vec<Student>,
}

pub struct AssignmentEngine<R: Repository> {
    repository: Arc<R>,
    locks: EntityLocks,
}

impl<R: Repository> Clone for AssignmentEngine<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            locks: self.locks.clone(),
        }
    }
}

impl<R: Repository> AssignmentEngine<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            locks: EntityLocks::new(),
        }
    }

    pub async fn create_mentor(&self, mentor: NewMentor) -> MentorshipResult<Mentor> {
        let created = self
            .repository
            .create_mentor(mentor)
            .await
            .inspect_err(|e| report("create mentor", e))?;
        component_info!(
            Component::Mentorship,
            mentor_id = %created.mentor_id,
            "Mentor created"
        );
        Ok(created)
    }

    pub async fn create_student(&self, student: NewStudent) -> MentorshipResult<Student> {
        let created = self
            .repository
            .create_student(student)
            .await
            .inspect_err(|e| report("create student", e))?;
        component_info!(
            Component::Mentorship,
            student_id = %created.student_id,
            "Student created"
        );
        Ok(created)
    }

    /// Make `mentor_id` the current mentor of `student_id`
    pub async fn assign_mentor(
        &self,
        student_id: StudentId,
        mentor_id: MentorId,
    ) -> MentorshipResult<AssignmentOutcome> {
        self.assign_mentor_locked(student_id, mentor_id)
            .await
            .inspect_err(|e| report("assign mentor", e))
    }

    async fn assign_mentor_locked(
        &self,
        student_id: StudentId,
        mentor_id: MentorId,
    ) -> MentorshipResult<AssignmentOutcome> {
        let _locks = self
            .locks
            .acquire([EntityKey::Student(student_id), EntityKey::Mentor(mentor_id)])
            .await;

        let student = self
            .repository
            .find_student_by_id(student_id)
            .await?
            .ok_or_else(|| MentorshipError::student_not_found(student_id))?;
        if self.repository.find_mentor_by_id(mentor_id).await?.is_none() {
            return Err(MentorshipError::mentor_not_found(mentor_id));
        }

        let transition = plan_assignment(&student, mentor_id)?;
        self.repository
            .apply(transition.mutations(Utc::now()))
            .await?;

        component_info!(
            Component::Mentorship,
            student_id = %student_id,
            mentor_id = %mentor_id,
            previous = ?transition.previous().map(|id| id.to_string()),
            "Assignment applied: {:?}",
            transition.kind()
        );

        let student = self.reload_student(student_id).await?;
        let mentor = self.reload_mentor(mentor_id).await?;
        Ok(AssignmentOutcome {
            transition: transition.kind(),
            student,
            mentor,
        })
    }

    /// Give `mentor_id` every student in `student_ids`, or none of them
    pub async fn assign_students_to_mentor(
        &self,
        mentor_id: MentorId,
        student_ids: Vec<StudentId>,
    ) -> MentorshipResult<BatchOutcome> {
        self.assign_batch_locked(mentor_id, student_ids)
            .await
            .inspect_err(|e| report("assign students", e))
    }

    async fn assign_batch_locked(
        &self,
        mentor_id: MentorId,
        student_ids: Vec<StudentId>,
    ) -> MentorshipResult<BatchOutcome> {
        let keys = std::iter::once(EntityKey::Mentor(mentor_id))
            .chain(student_ids.iter().copied().map(EntityKey::Student));
        let _locks = self.locks.acquire(keys).await;

        if self.repository.find_mentor_by_id(mentor_id).await?.is_none() {
            return Err(MentorshipError::mentor_not_found(mentor_id));
        }

        let eligible = self
            .repository
            .find_students_by_ids(student_ids.clone(), StudentFilter::Unassigned)
            .await?;
        let plan = plan_batch(mentor_id, &student_ids, &eligible)?;

        let mutations = plan.mutations(Utc::now());
        if !mutations.is_empty() {
            self.repository.apply(mutations).await?;
            component_info!(
                Component::Mentorship,
                mentor_id = %mentor_id,
                count = plan.student_ids.len(),
                "Batch assignment applied"
            );
        }

        let mentor = self.reload_mentor(mentor_id).await?;
        let students = self
            .repository
            .find_students_by_ids(plan.student_ids, StudentFilter::Any)
            .await?;
        Ok(BatchOutcome { mentor, students })
    }

    async fn reload_student(&self, student_id: StudentId) -> MentorshipResult<Student> {
        self.repository
            .find_student_by_id(student_id)
            .await?
            .ok_or_else(|| MentorshipError::integrity(format!("student {student_id} vanished after write")))
    }

    async fn reload_mentor(&self, mentor_id: MentorId) -> MentorshipResult<Mentor> {
        self.repository
            .find_mentor_by_id(mentor_id)
            .await?
            .ok_or_else(|| MentorshipError::integrity(format!("mentor {mentor_id} vanished after write")))
    }
}

fn report(operation: &str, error: &MentorshipError) {
    if error.is_internal() {
        component_error!(Component::Mentorship, error = %error, "{} failed", operation);
    } else {
        component_debug!(Component::Mentorship, error = %error, "{} rejected", operation);
    }
}
