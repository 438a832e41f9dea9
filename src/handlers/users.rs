use crate::auth::hash_password;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::user;
use sea_orm::{ActiveModelTrait, DbErr, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace};
use utoipa::ToSchema;

/// Request body for registering a new user
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Username (must be unique)
    pub username: String,
    /// Password (stored only as an Argon2 hash)
    pub password: String,
}

/// User response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = ApiResponse<UserResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_user function");
    debug!("Creating user with username: {}", request.username);

    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Username and password must be non-empty".to_string(),
                code: "VALIDATION_ERROR".to_string(),
                success: false,
            }),
        ));
    }

    let password_hash = hash_password(&request.password).map_err(|e| {
        error!("Failed to hash password for '{}': {}", request.username, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error while creating user".to_string(),
                code: "PASSWORD_HASH_ERROR".to_string(),
                success: false,
            }),
        )
    })?;

    let new_user = user::ActiveModel {
        username: Set(request.username.clone()),
        password_hash: Set(password_hash),
        ..Default::default()
    };

    trace!("Attempting to insert new user into database");
    match new_user.insert(&state.db).await {
        Ok(user_model) => {
            info!(
                "User created successfully with ID: {}, username: {}",
                user_model.id, user_model.username
            );
            let response = ApiResponse {
                data: UserResponse::from(user_model),
                message: "User created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!("Failed to create user '{}': {}", request.username, db_error);

            // Handle specific database errors
            let (status, error_response) = match db_error {
                DbErr::Exec(ref exec_err) => {
                    // Check for unique constraint violations
                    let error_msg = exec_err.to_string().to_lowercase();
                    if error_msg.contains("unique") || error_msg.contains("constraint") {
                        (
                            StatusCode::CONFLICT,
                            ErrorResponse {
                                error: format!("Username '{}' already exists", request.username),
                                code: "USERNAME_ALREADY_EXISTS".to_string(),
                                success: false,
                            },
                        )
                    } else {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            ErrorResponse {
                                error: "Failed to create user due to database constraint".to_string(),
                                code: "DATABASE_CONSTRAINT_ERROR".to_string(),
                                success: false,
                            },
                        )
                    }
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error while creating user".to_string(),
                        code: "DATABASE_ERROR".to_string(),
                        success: false,
                    },
                ),
            };

            Err((status, Json(error_response)))
        }
    }
}
