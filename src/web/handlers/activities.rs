//! Activity handlers for the activities API.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::registry::Activity;
use crate::web::error::WebError;
use crate::web::state::AppState;

/// Query parameters carrying the student email.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Response for a successful signup or unregistration.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List all activities with their current participants.
pub async fn list_activities(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, Activity>> {
    Json(state.registry().snapshot())
}

/// Sign a student up for an activity.
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, WebError> {
    state.registry().signup(&activity_name, &query.email)?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

/// Remove a student from an activity.
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, WebError> {
    state.registry().unregister(&activity_name, &query.email)?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
