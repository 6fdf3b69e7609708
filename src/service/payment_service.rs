// service/payment_service.rs
use std::sync::Arc;

use crate::{
    db::{db::DBClient, transactiondb::TransactionExt},
    models::{jobmodel::Job, transactionmodel::Transaction},
};

/// Fee split for a completed job, in paise. The payout is derived by
/// subtraction so `platform_fee + freelancer_payout == amount` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeBreakdown {
    pub amount: i64,
    pub platform_fee: i64,
    pub freelancer_payout: i64,
}

pub fn split_fee(amount: i64, fee_bps: i64) -> FeeBreakdown {
    let platform_fee = amount * fee_bps / 10_000;
    FeeBreakdown {
        amount,
        platform_fee,
        freelancer_payout: amount - platform_fee,
    }
}

/// Prepares payments: computes the fee split and records a pending
/// transaction. Settlement belongs to the external payment processor.
#[derive(Debug, Clone)]
pub struct PaymentService {
    db_client: Arc<DBClient>,
    fee_bps: i64,
}

impl PaymentService {
    pub fn new(db_client: Arc<DBClient>, fee_bps: i64) -> Self {
        Self { db_client, fee_bps }
    }

    /// Caller has already verified ownership, completed status and the
    /// presence of a hired freelancer.
    pub async fn prepare(
        &self,
        job: &Job,
        freelancer_id: uuid::Uuid,
    ) -> Result<(Transaction, FeeBreakdown), sqlx::Error> {
        let breakdown = split_fee(job.budget, self.fee_bps);

        let transaction = self
            .db_client
            .create_transaction(
                job.id,
                job.client_id,
                freelancer_id,
                breakdown.amount,
                breakdown.platform_fee,
                breakdown.freelancer_payout,
            )
            .await?;

        tracing::info!(
            "Prepared transaction {} for job {} (fee {} bps)",
            transaction.id,
            job.id,
            self.fee_bps
        );

        Ok((transaction, breakdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_fee_is_exact() {
        // 1000 rupees = 100_000 paise
        let breakdown = split_fee(100_000, 1000);
        assert_eq!(breakdown.platform_fee, 10_000);
        assert_eq!(breakdown.freelancer_payout, 90_000);
    }

    #[test]
    fn fee_and_payout_always_sum_to_amount() {
        for amount in [1, 99, 100_000, 123_457, 9_999_999_999] {
            for bps in [0, 250, 1000, 3333, 10_000] {
                let b = split_fee(amount, bps);
                assert_eq!(b.platform_fee + b.freelancer_payout, b.amount);
            }
        }
    }

    #[test]
    fn zero_fee_pays_everything_out() {
        let breakdown = split_fee(50_000, 0);
        assert_eq!(breakdown.platform_fee, 0);
        assert_eq!(breakdown.freelancer_payout, 50_000);
    }

    #[test]
    fn full_fee_pays_nothing_out() {
        let breakdown = split_fee(50_000, 10_000);
        assert_eq!(breakdown.platform_fee, 50_000);
        assert_eq!(breakdown.freelancer_payout, 0);
    }

    #[test]
    fn fee_truncates_toward_zero_on_sub_paise_fractions() {
        // 9 paise at 10% is 0.9 paise; the fee rounds down, the payout keeps
        // the remainder.
        let breakdown = split_fee(9, 1000);
        assert_eq!(breakdown.platform_fee, 0);
        assert_eq!(breakdown.freelancer_payout, 9);
    }
}
