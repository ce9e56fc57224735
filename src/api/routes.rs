use crate::{
    api::{contact, health},
    config::Config,
    email::Mailer,
    errors::{AppError, Result},
    rate_limit::{rate_limit_middleware, RateLimiter},
};
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub limiter: Arc<RateLimiter>,
    pub mailer: Arc<dyn Mailer>,
}

pub fn create_router(config: Config, mailer: Arc<dyn Mailer>) -> Result<Router> {
    let limiter = Arc::new(RateLimiter::new(&config.rate_limit));

    let state = AppState {
        config: Arc::new(config),
        limiter,
        mailer,
    };

    // Configure CORS for the marketing site frontend
    let origin = state
        .config
        .security
        .cors_allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| AppError::Configuration(format!("Invalid CORS origin: {}", e)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    // Only the submission endpoint sits behind the rate limiter
    let contact_routes = Router::new()
        .route("/submit", post(contact::submit))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .route("/info", get(contact::info));

    Ok(Router::new()
        .route("/api/health", get(health::health))
        .route("/metrics", get(health::metrics))
        .nest("/api/contact", contact_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found",
        })),
    )
}
