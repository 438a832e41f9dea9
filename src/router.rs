use crate::handlers::{
    auth::{login, logout, me},
    dashboard::{get_dashboard_meals, get_dashboard_orders},
    health::health_check,
    lunches::{create_lunch, get_lunches},
    meals::{create_meal, get_meals},
    orders::{get_orders, place_order},
    users::create_user,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_cookies::CookieManagerLayer;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Registration and session routes
        .route("/api/v1/users", post(create_user))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/auth/me", get(me))
        // Lunch catalog routes
        .route("/api/v1/lunches", get(get_lunches))
        .route("/api/v1/lunches", post(create_lunch))
        // Order routes
        .route("/api/v1/lunches/:lunch_id/order", post(place_order))
        .route("/api/v1/orders", get(get_orders))
        // Meal log routes
        .route("/api/v1/meals", get(get_meals))
        .route("/api/v1/meals", post(create_meal))
        // Dashboard routes
        .route("/api/v1/dashboard/meals", get(get_dashboard_meals))
        .route("/api/v1/dashboard/orders", get(get_dashboard_orders))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive())
                .layer(CookieManagerLayer::new()),
        )
        .with_state(state)
}
