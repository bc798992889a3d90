//! Auth HTTP handlers: signup, login, current user.

use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::auth::AuthAppService;
use crate::error::{AppError, AppResult};
use crate::handlers::{http::AppState, JsonBody};
use crate::middleware::AuthUser;
use crate::models::{AuthResponse, LoginRequest, PublicUser, SignupRequest, UserResponse};

const INVALID_FORMAT: &str = "Incorrect email or password format.";
const CREDENTIALS_REQUIRED: &str = "Email and password required.";

/// POST /user/signup
#[instrument(skip(state, body))]
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(mut body): JsonBody<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    body.email = AuthAppService::normalize_email(&body.email);

    if let Err(e) = body.validate() {
        warn!(error = %e, "signup schema validation failed");
        return Err(AppError::Validation(INVALID_FORMAT.to_string()));
    }
    if body.email.is_empty() || body.password.is_empty() {
        return Err(AppError::Validation(CREDENTIALS_REQUIRED.to_string()));
    }

    if state.users().find_by_email(&body.email).await?.is_some() {
        warn!("signup with registered email");
        return Err(AppError::EmailInUse);
    }

    let password_hash = AuthAppService::hash_password(&body.password)?;
    let user = state
        .users()
        .create(&body.name, &body.email, &password_hash)
        .await?;
    let token = state.jwt_secret().issue(user.id)?;

    info!(user_id = %user.id, "user signed up");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: PublicUser::from(user),
        }),
    ))
}

/// POST /user/login
#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(mut body): JsonBody<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    body.email = AuthAppService::normalize_email(&body.email);

    if let Err(e) = body.validate() {
        warn!(error = %e, "login schema validation failed");
        return Err(AppError::Validation(INVALID_FORMAT.to_string()));
    }

    let user = state
        .users()
        .find_by_email(&body.email)
        .await?
        .ok_or(AppError::UserNotFound)?;

    if !AuthAppService::verify_password(&body.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login with wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let token = state.jwt_secret().issue(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(AuthResponse {
        token,
        user: PublicUser::from(user),
    }))
}

/// GET /user/me
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .users()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Auth("User not found".to_string()))?;
    Ok(Json(UserResponse {
        user: PublicUser::from(user),
    }))
}
