//! Liveness

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use mentorship::Repository;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::HealthStatus;

pub async fn health<R: Repository + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<HealthStatus>, ApiError> {
    let mentors = state.query.list_mentors().await?.len();
    let students = state.query.list_students().await?.len();
    Ok(Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        mentors,
        students,
    }))
}
