use crate::{
    error::{AppError, Result},
    notification::{
        notification_models::{Notification, NotificationType},
        notification_repository::NotificationStore,
    },
    user::UserStore,
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct NotificationService {
    users: Arc<dyn UserStore>,
    notifications: Arc<dyn NotificationStore>,
}

impl NotificationService {
    pub fn new(users: Arc<dyn UserStore>, notifications: Arc<dyn NotificationStore>) -> Self {
        Self {
            users,
            notifications,
        }
    }

    /// Records that `trigger_user_id` liked `post_id`, notifying the post owner.
    pub async fn create_like_notification(
        &self,
        post_id: &str,
        post_owner_id: &str,
        trigger_user_id: &str,
    ) -> Result<Notification> {
        self.notify(
            NotificationType::Like,
            post_owner_id,
            Some(post_id),
            trigger_user_id,
            |name| format!("{} liked your post.", name),
        )
        .await
    }

    pub async fn create_comment_notification(
        &self,
        post_id: &str,
        post_owner_id: &str,
        trigger_user_id: &str,
    ) -> Result<Notification> {
        self.notify(
            NotificationType::Comment,
            post_owner_id,
            Some(post_id),
            trigger_user_id,
            |name| format!("{} commented on your post.", name),
        )
        .await
    }

    pub async fn create_follow_notification(
        &self,
        followed_user_id: &str,
        trigger_user_id: &str,
    ) -> Result<Notification> {
        self.notify(
            NotificationType::Follow,
            followed_user_id,
            None,
            trigger_user_id,
            |name| format!("{} started following you.", name),
        )
        .await
    }

    pub async fn notifications_for(&self, user_id: &str) -> Result<Vec<Notification>> {
        self.notifications.find_by_recipient(user_id).await
    }

    pub async fn unread_notifications_for(&self, user_id: &str) -> Result<Vec<Notification>> {
        self.notifications.find_unread_by_recipient(user_id).await
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<Notification> {
        let mut notification = self
            .notifications
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

        if notification.read {
            return Ok(notification);
        }

        notification.read = true;
        self.notifications.save(notification).await
    }

    pub async fn mark_all_read(&self, user_id: &str) -> Result<u64> {
        let updated = self.notifications.mark_all_read(user_id).await?;
        info!(user_id, updated, "Marked notifications as read");
        Ok(updated)
    }

    async fn notify<F>(
        &self,
        notification_type: NotificationType,
        recipient_user_id: &str,
        related_post_id: Option<&str>,
        trigger_user_id: &str,
        compose: F,
    ) -> Result<Notification>
    where
        F: FnOnce(&str) -> String,
    {
        if notification_type.is_post_related() {
            require("postId", related_post_id.unwrap_or_default())?;
        }
        require("recipientUserId", recipient_user_id)?;
        require("triggerUserId", trigger_user_id)?;

        let trigger_user = self
            .users
            .find_by_id(trigger_user_id)
            .await?
            .ok_or_else(|| {
                warn!(trigger_user_id, "Trigger user not found");
                AppError::UserNotFound(trigger_user_id.to_string())
            })?;

        let notification = Notification::new(
            recipient_user_id,
            notification_type,
            related_post_id.map(str::to_string),
            trigger_user_id,
            compose(&trigger_user.name),
        );

        let saved = self.notifications.save(notification).await?;

        info!(
            notification_type = %notification_type,
            recipient = recipient_user_id,
            "Created notification"
        );
        Ok(saved)
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be blank", field)));
    }
    Ok(())
}
