use crate::auth::{create_session, destroy_session, verify_password, AuthUser, SESSION_COOKIE, SESSION_TTL_DAYS};
use crate::handlers::users::UserResponse;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::user;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};
use utoipa::ToSchema;

/// Request body for logging in
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

fn invalid_credentials() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: "Login failed. Please check your credentials.".to_string(),
            code: "INVALID_CREDENTIALS".to_string(),
            success: false,
        }),
    )
}

/// Authenticate a user and establish a session
///
/// Unknown usernames and wrong passwords are indistinguishable to the caller.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = ApiResponse<UserResponse>),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, cookies, request))]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Login attempt for username: {}", request.username);

    let user_model = user::Entity::find()
        .filter(user::Column::Username.eq(request.username.clone()))
        .one(&state.db)
        .await
        .map_err(|db_error| {
            error!("Failed to look up user '{}': {}", request.username, db_error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error during login".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            )
        })?
        .ok_or_else(|| {
            warn!("Login failed: unknown username '{}'", request.username);
            invalid_credentials()
        })?;

    if !verify_password(&request.password, &user_model.password_hash) {
        warn!("Login failed: bad password for '{}'", request.username);
        return Err(invalid_credentials());
    }

    let token = create_session(&state.db, user_model.id).await.map_err(|db_error| {
        error!("Failed to create session for user {}: {}", user_model.id, db_error);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error during login".to_string(),
                code: "DATABASE_ERROR".to_string(),
                success: false,
            }),
        )
    })?;

    let mut session_cookie = Cookie::new(SESSION_COOKIE, token);
    session_cookie.set_http_only(true);
    session_cookie.set_same_site(SameSite::Lax);
    session_cookie.set_path("/");
    session_cookie.set_max_age(time::Duration::days(SESSION_TTL_DAYS));
    cookies.add(session_cookie);

    info!("User logged in: {} (id {})", user_model.username, user_model.id);

    Ok(Json(ApiResponse {
        data: UserResponse::from(user_model),
        message: "Login successful".to_string(),
        success: true,
    }))
}

/// End the current session
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out successfully", body = ApiResponse<String>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
#[instrument(skip(state, cookies, user_model))]
pub async fn logout(
    State(state): State<AppState>,
    cookies: Cookies,
    AuthUser(user_model): AuthUser,
) -> Result<Json<ApiResponse<String>>, StatusCode> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        if let Err(db_error) = destroy_session(&state.db, cookie.value()).await {
            error!("Failed to delete session for user {}: {}", user_model.id, db_error);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("User logged out: {}", user_model.username);

    Ok(Json(ApiResponse {
        data: "Logged out successfully".to_string(),
        message: "Logged out successfully".to_string(),
        success: true,
    }))
}

/// Current session identity
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current user profile", body = ApiResponse<UserResponse>),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    )
)]
#[instrument(skip(user_model))]
pub async fn me(AuthUser(user_model): AuthUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse {
        data: UserResponse::from(user_model),
        message: "Session identity resolved".to_string(),
        success: true,
    })
}
