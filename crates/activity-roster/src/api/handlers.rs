//! HTTP request handlers.

use super::types::{
    ActivitiesResponse, ActivityDetails, HealthResponse, MessageResponse, ParticipantQuery,
};
use super::AppState;
use crate::error::RosterError;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use tracing::{info, warn};

/// Pull the participant email out of the query string.
fn participant_email(
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<String, RosterError> {
    let Query(query) = query.map_err(|e| RosterError::InvalidQuery(e.body_text()))?;

    query
        .email()
        .map(str::to_string)
        .ok_or_else(|| RosterError::MissingParameter("email".into()))
}

/// Landing page for the browser UI.
pub const INDEX_PATH: &str = "/static/index.html";

/// Redirect the root path to the static UI.
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.registry.read().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        activity_count: registry.count(),
        participant_count: registry.total_participants(),
    })
}

/// List all activities with their current rosters.
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivitiesResponse> {
    let registry = state.registry.read().await;
    let activities = registry
        .list()
        .into_iter()
        .map(|a| (a.name.clone(), ActivityDetails::from(a)))
        .collect();

    Json(ActivitiesResponse(activities))
}

/// Get a single activity.
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
) -> Result<Json<ActivityDetails>, RosterError> {
    let registry = state.registry.read().await;
    let activity = registry
        .get(&activity_name)
        .ok_or_else(|| RosterError::ActivityNotFound(activity_name.clone()))?;

    Ok(Json(ActivityDetails::from(activity)))
}

/// Sign a student up for an activity.
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, RosterError> {
    let email = participant_email(query)?;

    let mut registry = state.registry.write().await;
    if let Err(e) = registry.enroll(&activity_name, &email) {
        warn!(activity = %activity_name, email = %email, error = %e, "Signup rejected");
        return Err(e);
    }
    drop(registry);

    info!(activity = %activity_name, email = %email, "Student signed up");

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    }))
}

/// Remove a student from an activity.
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, RosterError> {
    let email = participant_email(query)?;

    let mut registry = state.registry.write().await;
    if let Err(e) = registry.withdraw(&activity_name, &email) {
        warn!(activity = %activity_name, email = %email, error = %e, "Unregister rejected");
        return Err(e);
    }
    drop(registry);

    info!(activity = %activity_name, email = %email, "Student unregistered");

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity_name),
    }))
}
