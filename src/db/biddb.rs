// db/biddb.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::jobmodel::{Bid, BidStatus, JobStatus};

/// Bid row joined with the bidder's profile summary, for the job owner's
/// bid-review listing.
#[derive(Debug, sqlx::FromRow)]
pub struct BidWithFreelancerRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub freelancer_id: Uuid,
    pub amount: i64,
    pub proposal: String,
    pub delivery_time: i32,
    pub status: BidStatus,
    pub created_at: DateTime<Utc>,
    pub freelancer_full_name: String,
    pub freelancer_avatar_url: Option<String>,
    pub freelancer_skills: Vec<String>,
    pub freelancer_bio: Option<String>,
    pub freelancer_hourly_rate: Option<i64>,
}

/// Bid row joined with its job and the job's client summary, for a
/// freelancer reviewing their own bids.
#[derive(Debug, sqlx::FromRow)]
pub struct BidWithJobRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub freelancer_id: Uuid,
    pub amount: i64,
    pub proposal: String,
    pub delivery_time: i32,
    pub status: BidStatus,
    pub created_at: DateTime<Utc>,
    pub job_title: String,
    pub job_budget: i64,
    pub job_status: JobStatus,
    pub client_id: Uuid,
    pub client_full_name: String,
    pub client_avatar_url: Option<String>,
}

#[async_trait]
pub trait BidExt {
    /// Insert a pending bid. The `(job_id, freelancer_id)` uniqueness is
    /// enforced by the database, not a read-then-insert check; callers map
    /// the unique-violation error to the duplicate-bid response.
    async fn create_bid(
        &self,
        job_id: Uuid,
        freelancer_id: Uuid,
        amount: i64,
        proposal: String,
        delivery_time: i32,
    ) -> Result<Bid, Error>;

    async fn get_bid_by_id(&self, bid_id: Uuid) -> Result<Option<Bid>, Error>;

    async fn get_bids_for_job(
        &self,
        job_id: Uuid,
        status: Option<BidStatus>,
    ) -> Result<Vec<BidWithFreelancerRow>, Error>;

    async fn get_bids_for_freelancer(
        &self,
        freelancer_id: Uuid,
        status: Option<BidStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BidWithJobRow>, Error>;

    async fn count_bids_for_freelancer(
        &self,
        freelancer_id: Uuid,
        status: Option<BidStatus>,
    ) -> Result<i64, Error>;
}

#[async_trait]
impl BidExt for DBClient {
    async fn create_bid(
        &self,
        job_id: Uuid,
        freelancer_id: Uuid,
        amount: i64,
        proposal: String,
        delivery_time: i32,
    ) -> Result<Bid, Error> {
        sqlx::query_as::<_, Bid>(
            r#"
            INSERT INTO bids
            (job_id, freelancer_id, amount, proposal, delivery_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, job_id, freelancer_id, amount, proposal,
                      delivery_time, status, created_at
            "#,
        )
        .bind(job_id)
        .bind(freelancer_id)
        .bind(amount)
        .bind(proposal)
        .bind(delivery_time)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_bid_by_id(&self, bid_id: Uuid) -> Result<Option<Bid>, Error> {
        sqlx::query_as::<_, Bid>(
            r#"
            SELECT id, job_id, freelancer_id, amount, proposal,
                   delivery_time, status, created_at
            FROM bids
            WHERE id = $1
            "#,
        )
        .bind(bid_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_bids_for_job(
        &self,
        job_id: Uuid,
        status: Option<BidStatus>,
    ) -> Result<Vec<BidWithFreelancerRow>, Error> {
        sqlx::query_as::<_, BidWithFreelancerRow>(
            r#"
            SELECT b.id, b.job_id, b.freelancer_id, b.amount, b.proposal,
                   b.delivery_time, b.status, b.created_at,
                   p.full_name AS freelancer_full_name,
                   p.avatar_url AS freelancer_avatar_url,
                   p.skills AS freelancer_skills,
                   p.bio AS freelancer_bio,
                   p.hourly_rate AS freelancer_hourly_rate
            FROM bids b
            INNER JOIN profiles p ON b.freelancer_id = p.id
            WHERE b.job_id = $1
              AND ($2::bid_status IS NULL OR b.status = $2)
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(job_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_bids_for_freelancer(
        &self,
        freelancer_id: Uuid,
        status: Option<BidStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BidWithJobRow>, Error> {
        sqlx::query_as::<_, BidWithJobRow>(
            r#"
            SELECT b.id, b.job_id, b.freelancer_id, b.amount, b.proposal,
                   b.delivery_time, b.status, b.created_at,
                   j.title AS job_title,
                   j.budget AS job_budget,
                   j.status AS job_status,
                   j.client_id,
                   p.full_name AS client_full_name,
                   p.avatar_url AS client_avatar_url
            FROM bids b
            INNER JOIN jobs j ON b.job_id = j.id
            INNER JOIN profiles p ON j.client_id = p.id
            WHERE b.freelancer_id = $1
              AND ($2::bid_status IS NULL OR b.status = $2)
            ORDER BY b.created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(freelancer_id)
        .bind(status)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn count_bids_for_freelancer(
        &self,
        freelancer_id: Uuid,
        status: Option<BidStatus>,
    ) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM bids
            WHERE freelancer_id = $1
              AND ($2::bid_status IS NULL OR status = $2)
            "#,
        )
        .bind(freelancer_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
    }
}
