use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Like,
    Comment,
    Follow,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Like => "LIKE",
            NotificationType::Comment => "COMMENT",
            NotificationType::Follow => "FOLLOW",
        }
    }

    /// Whether notifications of this kind point at a post.
    pub fn is_post_related(&self) -> bool {
        matches!(self, NotificationType::Like | NotificationType::Comment)
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown notification type: {0}")]
pub struct UnknownNotificationType(pub String);

impl FromStr for NotificationType {
    type Err = UnknownNotificationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIKE" => Ok(NotificationType::Like),
            "COMMENT" => Ok(NotificationType::Comment),
            "FOLLOW" => Ok(NotificationType::Follow),
            other => Err(UnknownNotificationType(other.to_string())),
        }
    }
}

impl TryFrom<String> for NotificationType {
    type Error = UnknownNotificationType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A notification record. Everything except `read` is fixed once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Assigned by the store on first save.
    pub id: Option<Uuid>,
    pub recipient_user_id: String,
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub notification_type: NotificationType,
    pub related_post_id: Option<String>,
    pub triggering_user_id: String,
    pub message: String,
    #[sqlx(rename = "is_read")]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Builds an unsaved, unread notification stamped with the current time.
    pub fn new(
        recipient_user_id: impl Into<String>,
        notification_type: NotificationType,
        related_post_id: Option<String>,
        triggering_user_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            recipient_user_id: recipient_user_id.into(),
            notification_type,
            related_post_id,
            triggering_user_id: triggering_user_id.into(),
            message: message.into(),
            read: false,
            created_at: Utc::now(),
        }
    }
}
