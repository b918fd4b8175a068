use crate::{
    error::Result,
    extract::{AppJson, AppQuery},
    notification::{
        notification_dto::{FollowEventRequest, MarkAllReadResponse, PostEventRequest, RecipientQuery},
        notification_models::Notification,
    },
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

/// Get all notifications for a user, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    params(RecipientQuery),
    responses(
        (status = 200, description = "List of notifications", body = Vec<Notification>)
    ),
    tag = "notifications"
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RecipientQuery>,
) -> Result<Json<Vec<Notification>>> {
    let notifications = state.notification_service.notifications_for(&query.user_id).await?;

    Ok(Json(notifications))
}

/// Get unread notifications for a user
#[utoipa::path(
    get,
    path = "/api/notifications/unread",
    params(RecipientQuery),
    responses(
        (status = 200, description = "List of unread notifications", body = Vec<Notification>)
    ),
    tag = "notifications"
)]
pub async fn get_unread_notifications(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RecipientQuery>,
) -> Result<Json<Vec<Notification>>> {
    let notifications = state
        .notification_service
        .unread_notifications_for(&query.user_id)
        .await?;

    Ok(Json(notifications))
}

/// Mark notification as read
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = Notification),
        (status = 404, description = "Notification not found")
    ),
    tag = "notifications"
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(notification_id): Path<Uuid>,
) -> Result<Json<Notification>> {
    let notification = state.notification_service.mark_read(notification_id).await?;

    Ok(Json(notification))
}

/// Mark every notification of a user as read
#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    params(RecipientQuery),
    responses(
        (status = 200, description = "Notifications marked as read", body = MarkAllReadResponse)
    ),
    tag = "notifications"
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RecipientQuery>,
) -> Result<Json<MarkAllReadResponse>> {
    let updated = state.notification_service.mark_all_read(&query.user_id).await?;

    Ok(Json(MarkAllReadResponse { updated }))
}

/// Notify a post owner that their post was liked
#[utoipa::path(
    post,
    path = "/api/notifications/likes",
    request_body = PostEventRequest,
    responses(
        (status = 201, description = "Notification created", body = Notification),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Trigger user not found")
    ),
    tag = "notifications"
)]
pub async fn create_like_notification(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PostEventRequest>,
) -> Result<(StatusCode, Json<Notification>)> {
    payload.validate()?;

    let notification = state
        .notification_service
        .create_like_notification(&payload.post_id, &payload.post_owner_id, &payload.trigger_user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(notification)))
}

/// Notify a post owner that their post received a comment
#[utoipa::path(
    post,
    path = "/api/notifications/comments",
    request_body = PostEventRequest,
    responses(
        (status = 201, description = "Notification created", body = Notification),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Trigger user not found")
    ),
    tag = "notifications"
)]
pub async fn create_comment_notification(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PostEventRequest>,
) -> Result<(StatusCode, Json<Notification>)> {
    payload.validate()?;

    let notification = state
        .notification_service
        .create_comment_notification(&payload.post_id, &payload.post_owner_id, &payload.trigger_user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(notification)))
}

/// Notify a user that someone followed them
#[utoipa::path(
    post,
    path = "/api/notifications/follows",
    request_body = FollowEventRequest,
    responses(
        (status = 201, description = "Notification created", body = Notification),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Trigger user not found")
    ),
    tag = "notifications"
)]
pub async fn create_follow_notification(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FollowEventRequest>,
) -> Result<(StatusCode, Json<Notification>)> {
    payload.validate()?;

    let notification = state
        .notification_service
        .create_follow_notification(&payload.followed_user_id, &payload.trigger_user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(notification)))
}
