//! Backend-agnostic checks run against every repository

use super::fixtures::*;
use crate::error::MentorshipError;
use crate::store::{Mutation, Repository, StudentFilter};

/// Create → find → list behaves the same on every backend
pub async fn check_create_and_find<R: Repository>(repo: &R) {
    let mentor = repo.create_mentor(ada()).await.unwrap();
    let student = repo.create_student(bo()).await.unwrap();

    assert_eq!(mentor.mentor_name, "Ada");
    assert!(mentor.students_assigned.is_empty());
    assert!(!student.is_mentor_assigned);
    assert_eq!(student.current_mentor_id, None);

    let found = repo.find_mentor_by_id(mentor.mentor_id).await.unwrap();
    assert_eq!(found, Some(mentor.clone()));
    let found = repo.find_student_by_id(student.student_id).await.unwrap();
    assert_eq!(found, Some(student.clone()));

    assert_eq!(repo.list_mentors().await.unwrap(), vec![mentor]);
    assert_eq!(repo.list_students().await.unwrap(), vec![student]);
}

/// Duplicate emails are refused and leave the first record alone
pub async fn check_duplicate_email<R: Repository>(repo: &R) {
    let original = repo.create_mentor(ada()).await.unwrap();

    let err = repo
        .create_mentor(shared::NewMentor::new("Impostor", "ada@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, MentorshipError::Conflict { .. }));

    let mentors = repo.list_mentors().await.unwrap();
    assert_eq!(mentors, vec![original]);
}

/// A failing batch leaves no trace
pub async fn check_batch_is_atomic<R: Repository>(repo: &R) {
    let mentor = repo.create_mentor(ada()).await.unwrap();
    let student = repo.create_student(bo()).await.unwrap();

    // the second row duplicates the first, so the whole batch must fail
    let err = repo
        .apply(vec![
            append(student.student_id, mentor.mentor_id),
            Mutation::SetPrevMentor {
                student_id: student.student_id,
                prev_mentor_id: Some(mentor.mentor_id),
            },
            append(student.student_id, mentor.mentor_id),
        ])
        .await
        .unwrap_err();
    assert!(matches!(err, MentorshipError::Integrity { .. }));

    let after = repo
        .find_student_by_id(student.student_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after, student);
}

/// Flag flips touch exactly one ledger row
pub async fn check_flag_flip_is_element_scoped<R: Repository>(repo: &R) {
    let ada = repo.create_mentor(ada()).await.unwrap();
    let grace = repo.create_mentor(grace()).await.unwrap();
    let bo = repo.create_student(bo()).await.unwrap();
    let cy = repo.create_student(cy()).await.unwrap();

    repo.apply(vec![
        append(bo.student_id, ada.mentor_id),
        append(cy.student_id, ada.mentor_id),
    ])
    .await
    .unwrap();

    repo.apply(vec![
        set_current(bo.student_id, ada.mentor_id, false),
        append(bo.student_id, grace.mentor_id),
    ])
    .await
    .unwrap();

    let roster = repo
        .find_mentor_by_id(ada.mentor_id)
        .await
        .unwrap()
        .unwrap()
        .students_assigned;
    assert_eq!(roster.len(), 2);
    assert!(!roster[0].is_current_student);
    assert!(roster[1].is_current_student);

    let unassigned = repo
        .find_students_by_ids(vec![bo.student_id, cy.student_id], StudentFilter::Unassigned)
        .await
        .unwrap();
    assert!(unassigned.is_empty());
}
