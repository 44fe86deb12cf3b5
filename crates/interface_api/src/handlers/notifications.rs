//! Notification and badge handlers

use axum::{
    extract::State,
    Json,
};

use core_kernel::{NotificationId, ParticipantId};
use domain_lifecycle::Notification;

use crate::extract::AppPath;
use crate::dto::notifications::{BadgeResponse, MarkAllReadResponse, NotificationListResponse};
use crate::{error::ApiError, AppState};

/// A participant's notifications, newest first
pub async fn list_notifications(
    State(state): State<AppState>,
    AppPath(participant): AppPath<ParticipantId>,
) -> Result<Json<NotificationListResponse>, ApiError> {
    let notifications = state.outbox.list_for(participant)?;
    let unread = notifications.iter().filter(|n| !n.read).count();
    Ok(Json(NotificationListResponse {
        unread,
        notifications,
    }))
}

/// Marks one notification read
pub async fn mark_read(
    State(state): State<AppState>,
    AppPath(id): AppPath<NotificationId>,
) -> Result<Json<Notification>, ApiError> {
    Ok(Json(state.outbox.mark_read(id)?))
}

/// Marks all of a participant's notifications read
pub async fn mark_all_read(
    State(state): State<AppState>,
    AppPath(participant): AppPath<ParticipantId>,
) -> Result<Json<MarkAllReadResponse>, ApiError> {
    let marked = state.outbox.mark_all_read(participant)?;
    Ok(Json(MarkAllReadResponse { marked }))
}

/// Helper badge credits a participant has earned
pub async fn helper_badges(
    State(state): State<AppState>,
    AppPath(participant): AppPath<ParticipantId>,
) -> Result<Json<BadgeResponse>, ApiError> {
    Ok(Json(BadgeResponse {
        participant_id: participant,
        helper_badges: state.engine.helper_badges(participant)?,
    }))
}
