use std::sync::Arc;

use axum::{
    extract::Request, http::header, middleware::Next, response::IntoResponse, Extension,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::profiledb::ProfileExt,
    error::{ErrorMessage, HttpError},
    models::profilemodel::Profile,
    utils::token,
    AppState,
};

/// What the identity provider gives us: a stable user id resolved from the
/// bearer credential. The profile is this marketplace's own record and may
/// not exist yet (it is created through the profile endpoints).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub profile: Option<Profile>,
}

impl AuthUser {
    /// The caller's profile, required by every role- or ownership-checked
    /// operation.
    pub fn profile(&self) -> Result<&Profile, HttpError> {
        self.profile
            .as_ref()
            .ok_or_else(|| HttpError::not_found(ErrorMessage::ProfileNotFound.to_string()))
    }
}

pub async fn auth(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| {
                    auth_value
                        .strip_prefix("Bearer ")
                        .map(|value| value.to_owned())
                })
        });

    let token = token
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::TokenNotProvided.to_string()))?;

    let token_details = token::decode_token(token, app_state.env.jwt_secret.as_bytes())?;

    let user_id = Uuid::parse_str(&token_details)
        .map_err(|_| HttpError::unauthorized(ErrorMessage::InvalidToken.to_string()))?;

    let profile = app_state
        .db_client
        .get_profile(user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if let Some(ref profile) = profile {
        if profile.is_blocked {
            return Err(HttpError::forbidden(ErrorMessage::AccountBlocked.to_string()));
        }
    }

    req.extensions_mut().insert(AuthUser { user_id, profile });

    Ok(next.run(req).await)
}
