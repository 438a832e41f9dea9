use crate::auth::AuthUser;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use model::entities::{lunch, order};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};
use utoipa::ToSchema;

/// Order response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub lunch_id: i32,
    pub user_id: i32,
    pub timestamp: DateTime<Utc>,
}

impl From<order::Model> for OrderResponse {
    fn from(model: order::Model) -> Self {
        Self {
            id: model.id,
            lunch_id: model.lunch_id,
            user_id: model.user_id,
            timestamp: model.timestamp,
        }
    }
}

/// Order a lunch
///
/// Repeated calls create duplicate orders on purpose; there is no
/// idempotence key for ordering the same lunch twice.
#[utoipa::path(
    post,
    path = "/api/v1/lunches/{lunch_id}/order",
    tag = "orders",
    params(
        ("lunch_id" = i32, Path, description = "Lunch ID"),
    ),
    responses(
        (status = 201, description = "Order placed successfully", body = ApiResponse<OrderResponse>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Lunch not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, user_model))]
pub async fn place_order(
    Path(lunch_id): Path<i32>,
    State(state): State<AppState>,
    AuthUser(user_model): AuthUser,
) -> Result<(StatusCode, Json<ApiResponse<OrderResponse>>), StatusCode> {
    debug!("User {} ordering lunch {}", user_model.id, lunch_id);

    // The lunch must exist before an order may reference it
    match lunch::Entity::find_by_id(lunch_id).one(&state.db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!("Order rejected: lunch {} does not exist", lunch_id);
            return Err(StatusCode::NOT_FOUND);
        }
        Err(db_error) => {
            error!("Failed to look up lunch {}: {}", lunch_id, db_error);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    let new_order = order::ActiveModel {
        lunch_id: Set(lunch_id),
        user_id: Set(user_model.id),
        timestamp: Set(Utc::now()),
        ..Default::default()
    };

    match new_order.insert(&state.db).await {
        Ok(order_model) => {
            info!(
                "Order {} placed by user {} for lunch {}",
                order_model.id, order_model.user_id, order_model.lunch_id
            );
            let response = ApiResponse {
                data: OrderResponse::from(order_model),
                message: "Order placed successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!("Failed to create order for lunch {}: {}", lunch_id, db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Order history
///
/// Every order in the system, newest first. This view has never been
/// scoped to the caller; the per-user view lives under the dashboard.
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = "orders",
    responses(
        (status = 200, description = "Orders retrieved successfully", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_orders(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<ApiResponse<Vec<OrderResponse>>>, StatusCode> {
    match order::Entity::find()
        .order_by_desc(order::Column::Timestamp)
        .all(&state.db)
        .await
    {
        Ok(orders) => {
            debug!("Retrieved {} orders from database", orders.len());
            let order_responses: Vec<OrderResponse> =
                orders.into_iter().map(OrderResponse::from).collect();

            let response = ApiResponse {
                data: order_responses,
                message: "Orders retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!("Failed to retrieve orders from database: {}", db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
