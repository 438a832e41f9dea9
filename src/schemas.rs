use crate::handlers::auth::LoginRequest;
use crate::handlers::lunches::{CreateLunchRequest, LunchResponse};
use crate::handlers::meals::{CreateMealRequest, MealResponse};
use crate::handlers::orders::OrderResponse;
use crate::handlers::users::{CreateUserRequest, UserResponse};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::create_user,
        crate::handlers::auth::login,
        crate::handlers::auth::logout,
        crate::handlers::auth::me,
        crate::handlers::lunches::get_lunches,
        crate::handlers::lunches::create_lunch,
        crate::handlers::orders::place_order,
        crate::handlers::orders::get_orders,
        crate::handlers::meals::get_meals,
        crate::handlers::meals::create_meal,
        crate::handlers::dashboard::get_dashboard_meals,
        crate::handlers::dashboard::get_dashboard_orders,
    ),
    components(
        schemas(
            ApiResponse<UserResponse>,
            ApiResponse<Vec<LunchResponse>>,
            ApiResponse<LunchResponse>,
            ApiResponse<Vec<OrderResponse>>,
            ApiResponse<OrderResponse>,
            ApiResponse<Vec<MealResponse>>,
            ApiResponse<MealResponse>,
            ApiResponse<String>,
            ErrorResponse,
            HealthResponse,
            CreateUserRequest,
            UserResponse,
            LoginRequest,
            CreateLunchRequest,
            LunchResponse,
            OrderResponse,
            CreateMealRequest,
            MealResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User registration endpoints"),
        (name = "auth", description = "Login, logout and session identity endpoints"),
        (name = "lunches", description = "Lunch catalog endpoints"),
        (name = "orders", description = "Order placement and history endpoints"),
        (name = "meals", description = "Personal meal log endpoints"),
        (name = "dashboard", description = "Per-user dashboard views"),
    ),
    info(
        title = "FreeLunch API",
        description = "Lunch ordering service - browse lunches, place orders and keep a personal meal log",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
