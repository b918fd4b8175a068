use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RecipientQuery {
    /// Recipient whose notifications are listed
    pub user_id: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostEventRequest {
    #[validate(length(min = 1))]
    pub post_id: String,
    #[validate(length(min = 1))]
    pub post_owner_id: String,
    #[validate(length(min = 1))]
    pub trigger_user_id: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowEventRequest {
    #[validate(length(min = 1))]
    pub followed_user_id: String,
    #[validate(length(min = 1))]
    pub trigger_user_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}
