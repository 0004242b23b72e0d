//! API handlers for Readlist REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use tokio::net::TcpListener;

use crate::{
    config::ServerConfig,
    error::{AppError, AppResult},
    AppState,
};

/// Bind the HTTP listener; the host may be an IP literal or a hostname
pub async fn bind_listener(config: &ServerConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port)).await
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> AppResult<Router> {
    let origin = state
        .config
        .cors
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| AppError::Config(format!("Invalid CORS origin: {}", e)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .put(books::update_book),
        )
        .route(
            "/books/:id",
            get(books::get_book).delete(books::delete_book),
        )
        .with_state(state);

    Ok(Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
