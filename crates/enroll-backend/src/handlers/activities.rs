use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use enroll::data::{ErrorDetail, Message};
use enroll::errors::RegistryError;
use enroll::log;

use crate::services::ActivityService;

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Handler to list every activity and its roster
pub async fn list(State(state): State<Arc<crate::AppState>>) -> impl IntoResponse {
    match state.activities.list().await {
        Ok(activities) => (StatusCode::OK, Json(activities)).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to list activities",
        )
            .into_response(),
    }
}

/// Handler to sign an email up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
) -> impl IntoResponse {
    match state.activities.signup(&activity, &query.email).await {
        Ok(()) => {
            log::info!("Signed up {} for {}", query.email, activity);
            (
                StatusCode::OK,
                Json(Message {
                    message: format!("Signed up {} for {}", query.email, activity),
                }),
            )
                .into_response()
        }
        Err(err) => rejection(err),
    }
}

/// Handler to remove an email from an activity's roster
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
) -> impl IntoResponse {
    match state.activities.unregister(&activity, &query.email).await {
        Ok(()) => {
            log::info!("Unregistered {} from {}", query.email, activity);
            (
                StatusCode::OK,
                Json(Message {
                    message: format!("Unregistered {} from {}", query.email, activity),
                }),
            )
                .into_response()
        }
        Err(err) => rejection(err),
    }
}

fn rejection(err: RegistryError) -> Response {
    let status = match err {
        RegistryError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
        RegistryError::AlreadySignedUp { .. }
        | RegistryError::NotSignedUp { .. }
        | RegistryError::ActivityFull(_) => StatusCode::BAD_REQUEST,
    };

    (
        status,
        Json(ErrorDetail {
            detail: err.to_string(),
        }),
    )
        .into_response()
}
