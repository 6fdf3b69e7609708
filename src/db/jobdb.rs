// db/jobdb.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::jobmodel::{Job, JobStatus};

const JOB_COLUMNS: &str = r#"
    id, client_id, hired_freelancer_id, title, description,
    budget, deadline, required_skills, status, created_at, updated_at
"#;

#[async_trait]
pub trait JobExt {
    async fn create_job(
        &self,
        client_id: Uuid,
        title: String,
        description: String,
        budget: i64,
        deadline: DateTime<Utc>,
        required_skills: Vec<String>,
    ) -> Result<Job, Error>;

    async fn get_job_by_id(&self, job_id: Uuid) -> Result<Option<Job>, Error>;

    async fn get_jobs(
        &self,
        status: Option<JobStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Job>, Error>;

    async fn count_jobs(&self, status: Option<JobStatus>) -> Result<i64, Error>;

    /// Accept one bid and close bidding, atomically.
    ///
    /// The job row update is conditional on `status = 'open'`, so of two
    /// concurrent hire attempts only the first commits; the second observes
    /// `None` and must surface an invalid-state error. The accepted/rejected
    /// bid updates ride the same transaction, which keeps "exactly one
    /// accepted bid per job" from ever being visible half-applied.
    ///
    /// Returns the updated job plus the freelancer ids of rejected bids.
    async fn hire_freelancer(
        &self,
        job_id: Uuid,
        bid_id: Uuid,
        freelancer_id: Uuid,
    ) -> Result<Option<(Job, Vec<Uuid>)>, Error>;

    /// Conditional in_progress -> completed transition. `None` means the job
    /// was not in progress at write time.
    async fn complete_job(&self, job_id: Uuid) -> Result<Option<Job>, Error>;
}

#[async_trait]
impl JobExt for DBClient {
    async fn create_job(
        &self,
        client_id: Uuid,
        title: String,
        description: String,
        budget: i64,
        deadline: DateTime<Utc>,
        required_skills: Vec<String>,
    ) -> Result<Job, Error> {
        sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs
            (client_id, title, description, budget, deadline, required_skills)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(client_id)
        .bind(title)
        .bind(description)
        .bind(budget)
        .bind(deadline)
        .bind(required_skills)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_job_by_id(&self, job_id: Uuid) -> Result<Option<Job>, Error> {
        sqlx::query_as::<_, Job>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            WHERE id = $1
            "#
        ))
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_jobs(
        &self,
        status: Option<JobStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Job>, Error> {
        sqlx::query_as::<_, Job>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            WHERE ($1::job_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(status)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn count_jobs(&self, status: Option<JobStatus>) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM jobs
            WHERE ($1::job_status IS NULL OR status = $1)
            "#,
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
    }

    async fn hire_freelancer(
        &self,
        job_id: Uuid,
        bid_id: Uuid,
        freelancer_id: Uuid,
    ) -> Result<Option<(Job, Vec<Uuid>)>, Error> {
        let mut tx = self.pool.begin().await?;

        let updated_job = sqlx::query_as::<_, Job>(&format!(
            r#"
            UPDATE jobs
            SET status = 'in_progress'::job_status,
                hired_freelancer_id = $2,
                updated_at = NOW()
            WHERE id = $1 AND status = 'open'::job_status
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(job_id)
        .bind(freelancer_id)
        .fetch_optional(&mut *tx)
        .await?;

        let job = match updated_job {
            Some(job) => job,
            // Lost the race or the job left 'open' some other way; nothing
            // was written.
            None => return Ok(None),
        };

        sqlx::query(
            r#"
            UPDATE bids
            SET status = 'accepted'::bid_status
            WHERE id = $1
            "#,
        )
        .bind(bid_id)
        .execute(&mut *tx)
        .await?;

        let rejected: Vec<Uuid> = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE bids
            SET status = 'rejected'::bid_status
            WHERE job_id = $1 AND id <> $2 AND status = 'pending'::bid_status
            RETURNING freelancer_id
            "#,
        )
        .bind(job_id)
        .bind(bid_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some((job, rejected)))
    }

    async fn complete_job(&self, job_id: Uuid) -> Result<Option<Job>, Error> {
        sqlx::query_as::<_, Job>(&format!(
            r#"
            UPDATE jobs
            SET status = 'completed'::job_status, updated_at = NOW()
            WHERE id = $1 AND status = 'in_progress'::job_status
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
    }
}
