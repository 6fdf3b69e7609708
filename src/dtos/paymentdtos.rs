use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::transactionmodel::{Transaction, TransactionStatus};
use crate::utils::currency::paise_to_rupees;

#[derive(Debug, Deserialize)]
pub struct PreparePaymentDto {
    pub job_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponseDto {
    pub id: Uuid,
    pub job_id: Uuid,
    pub client_id: Uuid,
    pub freelancer_id: Uuid,
    pub amount: f64,
    pub platform_fee: f64,
    pub freelancer_payout: f64,
    pub status: TransactionStatus,
}

impl TransactionResponseDto {
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id,
            job_id: transaction.job_id,
            client_id: transaction.client_id,
            freelancer_id: transaction.freelancer_id,
            amount: paise_to_rupees(transaction.amount),
            platform_fee: paise_to_rupees(transaction.platform_fee),
            freelancer_payout: paise_to_rupees(transaction.freelancer_payout),
            status: transaction.status,
        }
    }
}

// What the frontend hands to the external payment processor. Amounts are in
// paise, which is what processors expect; no settlement happens here.
#[derive(Debug, Serialize)]
pub struct PaymentSummaryDto {
    pub amount: i64,
    pub currency: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct PreparePaymentResponseDto {
    pub transaction: TransactionResponseDto,
    pub payment: PaymentSummaryDto,
}
