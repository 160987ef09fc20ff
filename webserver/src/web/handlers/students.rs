//! Student routes

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use mentorship::{Repository, Student};
use shared::{MentorId, NewStudent, StudentId};

use super::{json_body, parse_id};
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{
    AssignMentorRequest, CreateStudentRequest, MentorAssigned, PreviousMentor, StudentCreated,
};
use crate::validation::{FieldError, Validator};

pub async fn create<R: Repository + 'static>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentCreated>), ApiError> {
    let request = json_body(payload)?;

    let mut validator = Validator::new();
    let name = validator.text("studentName", request.student_name.as_deref());
    let email = validator.email("studentEmail", request.student_email.as_deref());
    validator.finish()?;

    let student = state
        .engine
        .create_student(NewStudent::new(name, email))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(StudentCreated {
            message: "student created successfully!".to_string(),
            student,
        }),
    ))
}

pub async fn list<R: Repository + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    Ok(Json(state.query.list_students().await?))
}

pub async fn show<R: Repository + 'static>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Student>, ApiError> {
    let student_id: StudentId = parse_id("studentId", &raw_id)?;
    Ok(Json(state.query.student_of(student_id).await?))
}

pub async fn assign_mentor<R: Repository + 'static>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<AssignMentorRequest>, JsonRejection>,
) -> Result<Json<MentorAssigned>, ApiError> {
    let student_id: StudentId = parse_id("studentId", &raw_id)?;
    let request = json_body(payload)?;

    let mentor_id: MentorId = match request.mentor_id.as_deref() {
        Some(raw) => parse_id("mentorId", raw)?,
        None => {
            return Err(ApiError::validation(vec![FieldError::new(
                "mentorId",
                "is required",
            )]));
        }
    };

    let outcome = state.engine.assign_mentor(student_id, mentor_id).await?;
    Ok(Json(MentorAssigned {
        message: "mentor assigned successfully!".to_string(),
        transition: outcome.transition,
        student: outcome.student,
        mentor: outcome.mentor,
    }))
}

pub async fn previous_mentor<R: Repository + 'static>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<PreviousMentor>, ApiError> {
    let student_id: StudentId = parse_id("studentId", &raw_id)?;
    let prev_mentor_id = state.query.previous_mentor_of(student_id).await?;
    Ok(Json(PreviousMentor { prev_mentor_id }))
}
