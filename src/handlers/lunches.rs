use crate::auth::AuthUser;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::lunch;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};
use utoipa::ToSchema;

/// Request body for creating a new lunch
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateLunchRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

/// Lunch response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LunchResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

impl From<lunch::Model> for LunchResponse {
    fn from(model: lunch::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}

/// List all lunches
///
/// The catalog is public: no session is required to browse it.
#[utoipa::path(
    get,
    path = "/api/v1/lunches",
    tag = "lunches",
    responses(
        (status = 200, description = "Lunches retrieved successfully", body = ApiResponse<Vec<LunchResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_lunches(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LunchResponse>>>, StatusCode> {
    match lunch::Entity::find().all(&state.db).await {
        Ok(lunches) => {
            debug!("Retrieved {} lunches from database", lunches.len());
            let lunch_responses: Vec<LunchResponse> =
                lunches.into_iter().map(LunchResponse::from).collect();

            let response = ApiResponse {
                data: lunch_responses,
                message: "Lunches retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!("Failed to retrieve lunches from database: {}", db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Add a lunch to the catalog
#[utoipa::path(
    post,
    path = "/api/v1/lunches",
    tag = "lunches",
    request_body = CreateLunchRequest,
    responses(
        (status = 201, description = "Lunch created successfully", body = ApiResponse<LunchResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_lunch(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(request): Json<CreateLunchRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LunchResponse>>), (StatusCode, Json<ErrorResponse>)> {
    if request.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Lunch name must be non-empty".to_string(),
                code: "VALIDATION_ERROR".to_string(),
                success: false,
            }),
        ));
    }

    let new_lunch = lunch::ActiveModel {
        name: Set(request.name.clone()),
        description: Set(request.description.clone()),
        price: Set(request.price),
        ..Default::default()
    };

    match new_lunch.insert(&state.db).await {
        Ok(lunch_model) => {
            info!(
                "Lunch created successfully with ID: {}, name: {}",
                lunch_model.id, lunch_model.name
            );
            let response = ApiResponse {
                data: LunchResponse::from(lunch_model),
                message: "Lunch created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!("Failed to create lunch '{}': {}", request.name, db_error);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error while creating lunch".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            ))
        }
    }
}
