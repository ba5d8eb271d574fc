use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Assemble the full application: API routes under `/api`, request tracing,
/// permissive CORS (the UI is served separately).
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", create_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(crate::api::handlers::chat::chat))
        .route(
            "/conversations/{id}",
            get(crate::api::handlers::chat::get_transcript),
        )
        .route(
            "/instructions",
            get(crate::api::handlers::system::instructions),
        )
        .route("/health", get(crate::api::handlers::system::health))
}
