// service/notification_service.rs
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    db::{db::DBClient, notificationdb::NotificationExt},
    models::{jobmodel::Job, notificationmodel::NotificationType},
    utils::currency::format_paise_as_rupees,
};

/// Best-effort side channel. Every notify method writes one row; a failed
/// write is logged and dropped. Lifecycle transitions must never fail or
/// roll back because a notification could not be stored.
#[derive(Debug, Clone)]
pub struct NotificationService {
    db_client: Arc<DBClient>,
}

impl NotificationService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn notify_bid_placed(
        &self,
        client_id: Uuid,
        job: &Job,
        bid_id: Uuid,
        bid_amount: i64,
        freelancer_name: &str,
    ) {
        tracing::info!(
            "New bid notification: {} bid on job {}",
            freelancer_name,
            job.id
        );

        self.emit(
            client_id,
            NotificationType::BidPlaced,
            "New Bid Received".to_string(),
            format!(
                "{} has bid {} on your job",
                freelancer_name,
                format_paise_as_rupees(bid_amount)
            ),
            Some(job.id),
            Some(bid_id),
        )
        .await;
    }

    pub async fn notify_bid_accepted(&self, freelancer_id: Uuid, job: &Job, bid_id: Uuid) {
        tracing::info!(
            "Bid accepted notification: freelancer {} hired for job {}",
            freelancer_id,
            job.id
        );

        self.emit(
            freelancer_id,
            NotificationType::BidAccepted,
            "Your Bid Was Accepted!".to_string(),
            "Congratulations! Your bid has been accepted. Start working on the project."
                .to_string(),
            Some(job.id),
            Some(bid_id),
        )
        .await;
    }

    pub async fn notify_bid_not_selected(&self, freelancer_id: Uuid, job: &Job) {
        self.emit(
            freelancer_id,
            NotificationType::BidAccepted,
            "Bid Not Selected".to_string(),
            format!(
                "Your bid for \"{}\" was not selected. Keep trying!",
                job.title
            ),
            Some(job.id),
            None,
        )
        .await;
    }

    pub async fn notify_job_completed(&self, freelancer_id: Uuid, job: &Job) {
        tracing::info!(
            "Job completion notification: freelancer {} on job {}",
            freelancer_id,
            job.id
        );

        self.emit(
            freelancer_id,
            NotificationType::JobCompleted,
            "Job Completed".to_string(),
            format!(
                "\"{}\" has been marked as completed. Payment will be prepared by the client.",
                job.title
            ),
            Some(job.id),
            None,
        )
        .await;
    }

    async fn emit(
        &self,
        user_id: Uuid,
        notification_type: NotificationType,
        title: String,
        message: String,
        related_job_id: Option<Uuid>,
        related_bid_id: Option<Uuid>,
    ) {
        if let Err(e) = self
            .db_client
            .create_notification(
                user_id,
                notification_type,
                title,
                message,
                related_job_id,
                related_bid_id,
            )
            .await
        {
            tracing::warn!(
                "Failed to store {} notification for user {}: {}",
                notification_type.to_str(),
                user_id,
                e
            );
        }
    }
}
