// handler/payments.rs
use std::sync::Arc;

use axum::{response::IntoResponse, routing::post, Extension, Json, Router};

use crate::{
    db::jobdb::JobExt,
    dtos::{
        common::ApiResponse,
        paymentdtos::{
            PaymentSummaryDto, PreparePaymentDto, PreparePaymentResponseDto,
            TransactionResponseDto,
        },
    },
    error::HttpError,
    middleware::AuthUser,
    models::jobmodel::JobStatus,
    AppState,
};

pub fn payments_handler() -> Router {
    Router::new().route("/prepare", post(prepare_payment))
}

pub async fn prepare_payment(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<PreparePaymentDto>,
) -> Result<impl IntoResponse, HttpError> {
    let job = app_state
        .db_client
        .get_job_by_id(body.job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    if job.client_id != auth.user_id {
        return Err(HttpError::forbidden("Only the job owner can initiate payment"));
    }

    if job.status != JobStatus::Completed {
        return Err(HttpError::bad_request(
            "Payment can only be made for completed jobs",
        ));
    }

    let freelancer_id = job
        .hired_freelancer_id
        .ok_or_else(|| HttpError::bad_request("No freelancer hired for this job"))?;

    let (transaction, breakdown) = app_state
        .payment_service
        .prepare(&job, freelancer_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Payment prepared successfully. Ready for processor integration.",
        PreparePaymentResponseDto {
            transaction: TransactionResponseDto::from_transaction(&transaction),
            payment: PaymentSummaryDto {
                amount: breakdown.amount,
                currency: "INR".to_string(),
                description: format!("Payment for job: {}", job.title),
            },
        },
    )))
}
