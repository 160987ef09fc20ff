//! Mentor routes

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use mentorship::{Mentor, Repository, RosterEntry};
use shared::{MentorId, NewMentor, StudentId};

use super::{json_body, parse_id};
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{AssignStudentsRequest, CreateMentorRequest, MentorCreated, StudentsAssigned};
use crate::validation::Validator;

pub async fn create<R: Repository + 'static>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateMentorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MentorCreated>), ApiError> {
    let request = json_body(payload)?;

    let mut validator = Validator::new();
    let name = validator.text("mentorName", request.mentor_name.as_deref());
    let email = validator.email("mentorEmail", request.mentor_email.as_deref());
    validator.finish()?;

    let mentor = state.engine.create_mentor(NewMentor::new(name, email)).await?;
    Ok((
        StatusCode::CREATED,
        Json(MentorCreated {
            message: "mentor created successfully!".to_string(),
            mentor,
        }),
    ))
}

pub async fn list<R: Repository + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Mentor>>, ApiError> {
    Ok(Json(state.query.list_mentors().await?))
}

pub async fn show<R: Repository + 'static>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Mentor>, ApiError> {
    let mentor_id: MentorId = parse_id("mentorId", &raw_id)?;
    Ok(Json(state.query.mentor_of(mentor_id).await?))
}

pub async fn roster<R: Repository + 'static>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<RosterEntry>>, ApiError> {
    let mentor_id: MentorId = parse_id("mentorId", &raw_id)?;
    Ok(Json(state.query.roster_of(mentor_id).await?))
}

pub async fn assign_students<R: Repository + 'static>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<AssignStudentsRequest>, JsonRejection>,
) -> Result<Json<StudentsAssigned>, ApiError> {
    let mentor_id: MentorId = parse_id("mentorId", &raw_id)?;
    let request = json_body(payload)?;

    let mut validator = Validator::new();
    let student_ids: Vec<StudentId> =
        validator.id_list("studentIds", request.student_ids.as_deref());
    validator.finish()?;

    let outcome = state
        .engine
        .assign_students_to_mentor(mentor_id, student_ids)
        .await?;
    Ok(Json(StudentsAssigned {
        message: format!("{} students assigned to mentor", outcome.students.len()),
        mentor: outcome.mentor,
        students: outcome.students,
    }))
}
