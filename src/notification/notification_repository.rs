use crate::error::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use super::notification_models::Notification;

/// Persistence for notification records.
///
/// Implementors: `PgNotificationRepository` (PostgreSQL) and
/// `InMemoryNotificationStore` (tests, local runs without a database).
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Insert a new notification, assigning an id when it has none. Saving a
    /// notification whose id is already stored only updates its `read` flag.
    async fn save(&self, notification: Notification) -> Result<Notification>;

    /// All notifications for a recipient, newest first.
    async fn find_by_recipient(&self, user_id: &str) -> Result<Vec<Notification>>;

    /// Unread notifications for a recipient, newest first.
    async fn find_unread_by_recipient(&self, user_id: &str) -> Result<Vec<Notification>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>>;

    /// Flip every unread notification of a recipient to read; returns how many changed.
    async fn mark_all_read(&self, user_id: &str) -> Result<u64>;
}

#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for PgNotificationRepository {
    async fn save(&self, notification: Notification) -> Result<Notification> {
        let id = notification.id.unwrap_or_else(Uuid::new_v4);

        let saved = sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications
                (id, recipient_user_id, notification_type, related_post_id,
                 triggering_user_id, message, is_read, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (id) DO UPDATE SET is_read = EXCLUDED.is_read
             RETURNING *"
        )
        .bind(id)
        .bind(&notification.recipient_user_id)
        .bind(notification.notification_type.as_str())
        .bind(&notification.related_post_id)
        .bind(&notification.triggering_user_id)
        .bind(&notification.message)
        .bind(notification.read)
        .bind(notification.created_at)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(notification_id = %id, "Saved notification");
        Ok(saved)
    }

    async fn find_by_recipient(&self, user_id: &str) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE recipient_user_id = $1 ORDER BY created_at DESC"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    async fn find_unread_by_recipient(&self, user_id: &str) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications
             WHERE recipient_user_id = $1 AND is_read = false
             ORDER BY created_at DESC"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>> {
        let notification = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(notification)
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true
             WHERE recipient_user_id = $1 AND is_read = false"
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
