use crate::{
    notification::{
        notification_dto::{FollowEventRequest, MarkAllReadResponse, PostEventRequest},
        notification_handlers,
        routes::notification_routes,
        Notification, NotificationType,
    },
    state::AppState,
};
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        notification_handlers::get_notifications,
        notification_handlers::get_unread_notifications,
        notification_handlers::mark_notification_read,
        notification_handlers::mark_all_notifications_read,
        notification_handlers::create_like_notification,
        notification_handlers::create_comment_notification,
        notification_handlers::create_follow_notification,
    ),
    components(
        schemas(
            Notification,
            NotificationType,
            PostEventRequest,
            FollowEventRequest,
            MarkAllReadResponse,
        )
    ),
    tags(
        (name = "notifications", description = "Notification endpoints")
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new().nest("/notifications", notification_routes());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
