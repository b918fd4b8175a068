pub mod notification_models;
pub mod notification_dto;
pub mod notification_repository;
pub mod notification_memory_store;
pub mod notification_handlers;
pub mod notification_service;
pub mod routes;

pub use notification_models::{Notification, NotificationType};
pub use notification_repository::{NotificationStore, PgNotificationRepository};
pub use notification_memory_store::InMemoryNotificationStore;
pub use notification_service::NotificationService;
