// handler/profiles.rs
use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::profiledb::ProfileExt,
    dtos::{common::ApiResponse, profiledtos::*},
    error::HttpError,
    middleware::AuthUser,
    utils::currency::rupees_to_paise,
    AppState,
};

pub fn profiles_handler() -> Router {
    Router::new()
        .route("/", post(create_profile))
        .route("/me", get(get_my_profile))
        .route("/me", put(update_my_profile))
}

pub async fn create_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateProfileDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    if auth.profile.is_some() {
        return Err(HttpError::bad_request("Profile already exists"));
    }

    let hourly_rate = body.hourly_rate.map(rupees_to_paise);

    let profile = match app_state
        .db_client
        .create_profile(
            auth.user_id,
            body.role,
            body.full_name,
            body.bio,
            body.skills.unwrap_or_default(),
            hourly_rate,
            body.portfolio_url,
            body.avatar_url,
            body.location,
        )
        .await
    {
        Ok(profile) => profile,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(HttpError::bad_request("Profile already exists"));
        }
        Err(e) => return Err(HttpError::server_error(e.to_string())),
    };

    tracing::info!(
        "Profile {} created with role {}",
        profile.id,
        profile.role.to_str()
    );

    Ok(Json(ApiResponse::success(
        "Profile created successfully",
        ProfileResponseDto::from_profile(&profile),
    )))
}

pub async fn get_my_profile(
    Extension(_app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let profile = auth.profile()?;

    Ok(Json(ApiResponse::success(
        "Profile retrieved successfully",
        ProfileResponseDto::from_profile(profile),
    )))
}

pub async fn update_my_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    // Ensures the profile exists before issuing the update.
    auth.profile()?;

    let updated = app_state
        .db_client
        .update_profile(
            auth.user_id,
            body.full_name,
            body.bio,
            body.skills,
            body.hourly_rate.map(rupees_to_paise),
            body.portfolio_url,
            body.avatar_url,
            body.location,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Profile updated successfully",
        ProfileResponseDto::from_profile(&updated),
    )))
}
