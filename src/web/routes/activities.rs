use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::error::{DirectoryError, ErrorKind};
use crate::models::Activity;
use crate::services::signup_service;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

type ApiError = (StatusCode, Json<Value>);

fn error_response(err: DirectoryError) -> ApiError {
    let status = match err.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": err.to_string() })))
}

// Bad or missing query parameters are a validation failure, kept apart from
// the 400 used for conflicts.
fn participant_query(
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<ParticipantQuery, ApiError> {
    match query {
        Ok(Query(q)) => Ok(q),
        Err(rejection) => {
            warn!("Invalid participant query: {}", rejection.body_text());
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": rejection.body_text() })),
            ))
        }
    }
}

pub async fn list_activities_handler(
    State(state): State<AppState>,
) -> Json<IndexMap<String, Activity>> {
    Json(signup_service::list_activities(state.repo.as_ref()).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let query = participant_query(query)?;
    let message = signup_service::enroll(state.repo.as_ref(), &activity_name, &query.email)
        .await
        .map_err(error_response)?;
    Ok(Json(json!({ "message": message })))
}

pub async fn remove_participant_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let query = participant_query(query)?;
    let message = signup_service::withdraw(state.repo.as_ref(), &activity_name, &query.email)
        .await
        .map_err(error_response)?;
    Ok(Json(json!({ "message": message })))
}
