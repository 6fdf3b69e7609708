// handler/jobs.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{biddb::BidExt, jobdb::JobExt},
    dtos::{
        biddtos::{BidListQueryDto, BidWithFreelancerDto},
        common::{ApiResponse, PaginatedResponse, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT},
        jobdtos::*,
    },
    error::HttpError,
    middleware::AuthUser,
    models::{jobmodel::JobStatus, profilemodel::UserRole},
    utils::currency::rupees_to_paise,
    AppState,
};

pub fn jobs_handler() -> Router {
    Router::new()
        .route("/", post(create_job))
        .route("/", get(list_jobs))
        .route("/:job_id", get(get_job_details))
        .route("/:job_id/bids", get(list_job_bids))
        .route("/:job_id/hire", put(hire_freelancer))
        .route("/:job_id/complete", put(complete_job))
}

pub async fn create_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateJobDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let profile = auth.profile()?;

    if profile.role != UserRole::Client {
        return Err(HttpError::forbidden("Only clients can create jobs"));
    }

    let job = app_state
        .db_client
        .create_job(
            profile.id,
            body.title,
            body.description,
            rupees_to_paise(body.budget),
            body.deadline,
            body.required_skills.unwrap_or_default(),
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    tracing::info!("Job {} created by client {}", job.id, profile.id);

    Ok(Json(ApiResponse::success(
        "Job created successfully",
        JobResponseDto::from_job(&job),
    )))
}

pub async fn list_jobs(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(_auth): Extension<AuthUser>,
    Query(query): Query<JobListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    query
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT);
    let offset = query.offset.unwrap_or(0);

    let jobs = app_state
        .db_client
        .get_jobs(query.status, limit, offset)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .count_jobs(query.status)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let data = jobs.iter().map(JobResponseDto::from_job).collect();

    Ok(Json(PaginatedResponse::new(data, total, limit, offset)))
}

pub async fn get_job_details(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(_auth): Extension<AuthUser>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let job = app_state
        .db_client
        .get_job_by_id(job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    Ok(Json(ApiResponse::success(
        "Job retrieved successfully",
        JobResponseDto::from_job(&job),
    )))
}

pub async fn list_job_bids(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(job_id): Path<Uuid>,
    Query(query): Query<BidListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let job = app_state
        .db_client
        .get_job_by_id(job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    if job.client_id != auth.user_id {
        return Err(HttpError::forbidden("Only the job owner can view bids"));
    }

    let bids = app_state
        .db_client
        .get_bids_for_job(job_id, query.status)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let data: Vec<BidWithFreelancerDto> =
        bids.iter().map(BidWithFreelancerDto::from_row).collect();

    Ok(Json(serde_json::json!({ "data": data })))
}

pub async fn hire_freelancer(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(job_id): Path<Uuid>,
    Json(body): Json<HireFreelancerDto>,
) -> Result<impl IntoResponse, HttpError> {
    let bid = app_state
        .db_client
        .get_bid_by_id(body.bid_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Bid not found"))?;

    if bid.job_id != job_id {
        return Err(HttpError::not_found("Bid does not belong to this job"));
    }

    let job = app_state
        .db_client
        .get_job_by_id(job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    if job.client_id != auth.user_id {
        return Err(HttpError::forbidden("Only the job owner can hire"));
    }

    if job.status != JobStatus::Open {
        return Err(HttpError::bad_request("Job is no longer open for hiring"));
    }

    // The transition itself is a conditional update inside one transaction;
    // a concurrent hire that slipped past the check above loses here.
    let (job, rejected) = app_state
        .db_client
        .hire_freelancer(job_id, bid.id, bid.freelancer_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::bad_request("Job is no longer open for hiring"))?;

    tracing::info!(
        "Job {} hired freelancer {} ({} bids rejected)",
        job.id,
        bid.freelancer_id,
        rejected.len()
    );

    app_state
        .notification_service
        .notify_bid_accepted(bid.freelancer_id, &job, bid.id)
        .await;

    for freelancer_id in rejected {
        app_state
            .notification_service
            .notify_bid_not_selected(freelancer_id, &job)
            .await;
    }

    Ok(Json(ApiResponse::success(
        "Freelancer hired successfully",
        HireResponseDto {
            job_id: job.id,
            freelancer_id: bid.freelancer_id,
            job_status: job.status,
        },
    )))
}

pub async fn complete_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let job = app_state
        .db_client
        .get_job_by_id(job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    if job.client_id != auth.user_id {
        return Err(HttpError::forbidden("Only the job owner can complete a job"));
    }

    if job.status != JobStatus::InProgress {
        return Err(HttpError::bad_request("Only in-progress jobs can be completed"));
    }

    let job = app_state
        .db_client
        .complete_job(job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::bad_request("Only in-progress jobs can be completed"))?;

    tracing::info!("Job {} marked {}", job.id, job.status.to_str());

    if let Some(freelancer_id) = job.hired_freelancer_id {
        app_state
            .notification_service
            .notify_job_completed(freelancer_id, &job)
            .await;
    }

    Ok(Json(ApiResponse::success(
        "Job completed successfully",
        JobResponseDto::from_job(&job),
    )))
}
