use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "notification_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    BidPlaced,
    BidAccepted,
    JobCompleted,
}

impl NotificationType {
    pub fn to_str(&self) -> &str {
        match self {
            NotificationType::BidPlaced => "bid_placed",
            NotificationType::BidAccepted => "bid_accepted",
            NotificationType::JobCompleted => "job_completed",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub related_job_id: Option<Uuid>,
    pub related_bid_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
