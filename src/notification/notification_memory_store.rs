use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use super::{notification_models::Notification, notification_repository::NotificationStore};

/// Process-local notification store. Records are kept in insertion order.
#[derive(Default)]
pub struct InMemoryNotificationStore {
    notifications: RwLock<Vec<Notification>>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn select<F>(&self, predicate: F) -> Vec<Notification>
    where
        F: Fn(&Notification) -> bool,
    {
        let notifications = self.notifications.read().await;
        // Walk newest insert first so equal timestamps still come back newest first.
        let mut selected: Vec<Notification> = notifications
            .iter()
            .rev()
            .filter(|n| predicate(n))
            .cloned()
            .collect();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        selected
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn save(&self, mut notification: Notification) -> Result<Notification> {
        let mut notifications = self.notifications.write().await;

        if let Some(id) = notification.id {
            if let Some(existing) = notifications.iter_mut().find(|n| n.id == Some(id)) {
                existing.read = notification.read;
                return Ok(existing.clone());
            }
        } else {
            notification.id = Some(Uuid::new_v4());
        }

        notifications.push(notification.clone());
        Ok(notification)
    }

    async fn find_by_recipient(&self, user_id: &str) -> Result<Vec<Notification>> {
        Ok(self.select(|n| n.recipient_user_id == user_id).await)
    }

    async fn find_unread_by_recipient(&self, user_id: &str) -> Result<Vec<Notification>> {
        Ok(self
            .select(|n| n.recipient_user_id == user_id && !n.read)
            .await)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>> {
        let notifications = self.notifications.read().await;
        Ok(notifications.iter().find(|n| n.id == Some(id)).cloned())
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<u64> {
        let mut notifications = self.notifications.write().await;
        let mut updated = 0;

        for n in notifications
            .iter_mut()
            .filter(|n| n.recipient_user_id == user_id && !n.read)
        {
            n.read = true;
            updated += 1;
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::notification_models::NotificationType;
    use chrono::{Duration, Utc};

    fn like_for(recipient: &str, minutes_ago: i64) -> Notification {
        let mut n = Notification::new(
            recipient,
            NotificationType::Like,
            Some("p1".to_string()),
            "u1",
            "Alice liked your post.",
        );
        n.created_at = Utc::now() - Duration::minutes(minutes_ago);
        n
    }

    #[tokio::test]
    async fn test_save_assigns_id() {
        let store = InMemoryNotificationStore::new();
        let saved = store.save(like_for("u2", 0)).await.unwrap();

        let id = saved.id.expect("id assigned on save");
        assert_eq!(store.find_by_id(id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_find_by_recipient_newest_first() {
        let store = InMemoryNotificationStore::new();
        let oldest = store.save(like_for("u2", 30)).await.unwrap();
        let middle = store.save(like_for("u2", 20)).await.unwrap();
        let newest = store.save(like_for("u2", 10)).await.unwrap();
        store.save(like_for("u3", 5)).await.unwrap();

        let found = store.find_by_recipient("u2").await.unwrap();
        assert_eq!(found, vec![newest, middle, oldest]);
    }

    #[tokio::test]
    async fn test_find_by_recipient_empty() {
        let store = InMemoryNotificationStore::new();
        store.save(like_for("u2", 0)).await.unwrap();

        assert!(store.find_by_recipient("").await.unwrap().is_empty());
        assert!(store.find_by_recipient("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resave_only_updates_read_flag() {
        let store = InMemoryNotificationStore::new();
        let saved = store.save(like_for("u2", 0)).await.unwrap();

        let mut edited = saved.clone();
        edited.read = true;
        edited.message = "rewritten".to_string();
        edited.recipient_user_id = "u9".to_string();

        let updated = store.save(edited).await.unwrap();
        assert!(updated.read);
        assert_eq!(updated.message, saved.message);
        assert_eq!(updated.recipient_user_id, "u2");
        assert_eq!(store.find_by_recipient("u2").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unread_excludes_read() {
        let store = InMemoryNotificationStore::new();
        let first = store.save(like_for("u2", 2)).await.unwrap();
        let second = store.save(like_for("u2", 1)).await.unwrap();

        let mut read = first.clone();
        read.read = true;
        store.save(read).await.unwrap();

        let unread = store.find_unread_by_recipient("u2").await.unwrap();
        assert_eq!(unread, vec![second]);
    }

    #[tokio::test]
    async fn test_mark_all_read_counts_only_recipient_unread() {
        let store = InMemoryNotificationStore::new();
        store.save(like_for("u2", 3)).await.unwrap();
        store.save(like_for("u2", 2)).await.unwrap();
        store.save(like_for("u3", 1)).await.unwrap();

        assert_eq!(store.mark_all_read("u2").await.unwrap(), 2);
        assert_eq!(store.mark_all_read("u2").await.unwrap(), 0);
        assert!(store.find_unread_by_recipient("u2").await.unwrap().is_empty());
        assert_eq!(store.find_unread_by_recipient("u3").await.unwrap().len(), 1);
    }
}
