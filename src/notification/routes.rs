use crate::{notification::notification_handlers, state::AppState};
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notification_handlers::get_notifications))
        .route("/unread", get(notification_handlers::get_unread_notifications))
        .route("/read-all", put(notification_handlers::mark_all_notifications_read))
        .route("/:id/read", put(notification_handlers::mark_notification_read))
        .route("/likes", post(notification_handlers::create_like_notification))
        .route("/comments", post(notification_handlers::create_comment_notification))
        .route("/follows", post(notification_handlers::create_follow_notification))
}
