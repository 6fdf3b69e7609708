// handler/bids.rs
use std::sync::Arc;

use axum::{
    extract::Query,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{biddb::BidExt, jobdb::JobExt},
    dtos::{
        biddtos::*,
        common::{ApiResponse, PaginatedResponse, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT},
    },
    error::HttpError,
    middleware::AuthUser,
    models::{jobmodel::JobStatus, profilemodel::UserRole},
    utils::currency::rupees_to_paise,
    AppState,
};

pub fn bids_handler() -> Router {
    Router::new()
        .route("/", post(submit_bid))
        .route("/me", get(list_my_bids))
}

pub async fn submit_bid(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateBidDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let profile = auth.profile()?;

    if profile.role != UserRole::Freelancer {
        return Err(HttpError::forbidden("Only freelancers can create bids"));
    }

    let job = app_state
        .db_client
        .get_job_by_id(body.job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    if job.status != JobStatus::Open {
        return Err(HttpError::bad_request(
            "Cannot bid on closed or in-progress jobs",
        ));
    }

    // No existence pre-check: the (job_id, freelancer_id) unique constraint
    // decides, so two simultaneous submissions cannot both land.
    let bid = match app_state
        .db_client
        .create_bid(
            job.id,
            profile.id,
            rupees_to_paise(body.amount),
            body.proposal,
            body.delivery_time,
        )
        .await
    {
        Ok(bid) => bid,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(HttpError::bad_request("You have already bid on this job"));
        }
        Err(e) => return Err(HttpError::server_error(e.to_string())),
    };

    tracing::info!("Bid {} placed on job {} by {}", bid.id, job.id, profile.id);

    app_state
        .notification_service
        .notify_bid_placed(job.client_id, &job, bid.id, bid.amount, &profile.full_name)
        .await;

    Ok(Json(ApiResponse::success(
        "Bid submitted successfully",
        BidResponseDto::from_bid(&bid),
    )))
}

pub async fn list_my_bids(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<BidListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    query
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT);
    let offset = query.offset.unwrap_or(0);

    let bids = app_state
        .db_client
        .get_bids_for_freelancer(auth.user_id, query.status, limit, offset)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .count_bids_for_freelancer(auth.user_id, query.status)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let data: Vec<BidWithJobDto> = bids.iter().map(BidWithJobDto::from_row).collect();

    Ok(Json(PaginatedResponse::new(data, total, limit, offset)))
}
