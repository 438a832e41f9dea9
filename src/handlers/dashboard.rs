use crate::auth::AuthUser;
use crate::handlers::meals::MealResponse;
use crate::handlers::orders::OrderResponse;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::{meal, order};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, error, instrument};

/// Dashboard view of the current user's meals
///
/// Same filter as the meal list; the dashboard is just another way in.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/meals",
    tag = "dashboard",
    responses(
        (status = 200, description = "Meals retrieved successfully", body = ApiResponse<Vec<MealResponse>>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, user_model))]
pub async fn get_dashboard_meals(
    State(state): State<AppState>,
    AuthUser(user_model): AuthUser,
) -> Result<Json<ApiResponse<Vec<MealResponse>>>, StatusCode> {
    match meal::Entity::find()
        .filter(meal::Column::UserId.eq(user_model.id))
        .all(&state.db)
        .await
    {
        Ok(meals) => {
            let meal_responses: Vec<MealResponse> =
                meals.into_iter().map(MealResponse::from).collect();

            Ok(Json(ApiResponse {
                data: meal_responses,
                message: "Meals retrieved successfully".to_string(),
                success: true,
            }))
        }
        Err(db_error) => {
            error!(
                "Failed to retrieve dashboard meals for user {}: {}",
                user_model.id, db_error
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Dashboard view of the current user's orders, newest first
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/orders",
    tag = "dashboard",
    responses(
        (status = 200, description = "Orders retrieved successfully", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, user_model))]
pub async fn get_dashboard_orders(
    State(state): State<AppState>,
    AuthUser(user_model): AuthUser,
) -> Result<Json<ApiResponse<Vec<OrderResponse>>>, StatusCode> {
    match order::Entity::find()
        .filter(order::Column::UserId.eq(user_model.id))
        .order_by_desc(order::Column::Timestamp)
        .all(&state.db)
        .await
    {
        Ok(orders) => {
            debug!(
                "Retrieved {} dashboard orders for user {}",
                orders.len(),
                user_model.id
            );
            let order_responses: Vec<OrderResponse> =
                orders.into_iter().map(OrderResponse::from).collect();

            Ok(Json(ApiResponse {
                data: order_responses,
                message: "Orders retrieved successfully".to_string(),
                success: true,
            }))
        }
        Err(db_error) => {
            error!(
                "Failed to retrieve dashboard orders for user {}: {}",
                user_model.id, db_error
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
