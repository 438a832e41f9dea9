use crate::auth::AuthUser;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::meal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};
use utoipa::ToSchema;

/// Request body for recording a new meal
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateMealRequest {
    /// Name of the meal (required)
    pub name: String,
    /// Free-text description (optional)
    pub description: Option<String>,
}

/// Meal response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MealResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub user_id: i32,
}

impl From<meal::Model> for MealResponse {
    fn from(model: meal::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            user_id: model.user_id,
        }
    }
}

/// Record a meal for the current user
#[utoipa::path(
    post,
    path = "/api/v1/meals",
    tag = "meals",
    request_body = CreateMealRequest,
    responses(
        (status = 201, description = "Meal created successfully", body = ApiResponse<MealResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, user_model))]
pub async fn create_meal(
    State(state): State<AppState>,
    AuthUser(user_model): AuthUser,
    Json(request): Json<CreateMealRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MealResponse>>), (StatusCode, Json<ErrorResponse>)> {
    debug!("User {} recording meal '{}'", user_model.id, request.name);

    if request.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Meal name must be non-empty".to_string(),
                code: "VALIDATION_ERROR".to_string(),
                success: false,
            }),
        ));
    }

    let new_meal = meal::ActiveModel {
        name: Set(request.name.clone()),
        description: Set(request.description.clone()),
        user_id: Set(user_model.id),
        ..Default::default()
    };

    match new_meal.insert(&state.db).await {
        Ok(meal_model) => {
            info!(
                "Meal {} created for user {}: {}",
                meal_model.id, meal_model.user_id, meal_model.name
            );
            let response = ApiResponse {
                data: MealResponse::from(meal_model),
                message: "Meal created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!(
                "Failed to create meal for user {}: {}",
                user_model.id, db_error
            );
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error while creating meal".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            ))
        }
    }
}

/// List the current user's meals
#[utoipa::path(
    get,
    path = "/api/v1/meals",
    tag = "meals",
    responses(
        (status = 200, description = "Meals retrieved successfully", body = ApiResponse<Vec<MealResponse>>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, user_model))]
pub async fn get_meals(
    State(state): State<AppState>,
    AuthUser(user_model): AuthUser,
) -> Result<Json<ApiResponse<Vec<MealResponse>>>, StatusCode> {
    match meal::Entity::find()
        .filter(meal::Column::UserId.eq(user_model.id))
        .all(&state.db)
        .await
    {
        Ok(meals) => {
            debug!("Retrieved {} meals for user {}", meals.len(), user_model.id);
            let meal_responses: Vec<MealResponse> =
                meals.into_iter().map(MealResponse::from).collect();

            let response = ApiResponse {
                data: meal_responses,
                message: "Meals retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!(
                "Failed to retrieve meals for user {}: {}",
                user_model.id, db_error
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
