// db/transactiondb.rs
use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::transactionmodel::Transaction;

#[async_trait]
pub trait TransactionExt {
    async fn create_transaction(
        &self,
        job_id: Uuid,
        client_id: Uuid,
        freelancer_id: Uuid,
        amount: i64,
        platform_fee: i64,
        freelancer_payout: i64,
    ) -> Result<Transaction, Error>;

    async fn get_transactions_for_job(&self, job_id: Uuid) -> Result<Vec<Transaction>, Error>;
}

#[async_trait]
impl TransactionExt for DBClient {
    async fn create_transaction(
        &self,
        job_id: Uuid,
        client_id: Uuid,
        freelancer_id: Uuid,
        amount: i64,
        platform_fee: i64,
        freelancer_payout: i64,
    ) -> Result<Transaction, Error> {
        sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions
            (job_id, client_id, freelancer_id, amount, platform_fee, freelancer_payout, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending'::transaction_status)
            RETURNING id, job_id, client_id, freelancer_id, amount,
                      platform_fee, freelancer_payout, status, created_at
            "#,
        )
        .bind(job_id)
        .bind(client_id)
        .bind(freelancer_id)
        .bind(amount)
        .bind(platform_fee)
        .bind(freelancer_payout)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_transactions_for_job(&self, job_id: Uuid) -> Result<Vec<Transaction>, Error> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, job_id, client_id, freelancer_id, amount,
                   platform_fee, freelancer_payout, status, created_at
            FROM transactions
            WHERE job_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await
    }
}
