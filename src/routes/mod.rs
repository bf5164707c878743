// src/routes/mod.rs
pub mod chat;

use std::time::Duration;

use crate::state::SharedState;
use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderName, Method, StatusCode, header},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use chat::{chat_handler, get_metrics_handler};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: SharedState) -> Router {
    let admin_routes = Router::new()
        .route("/metrics", get(get_metrics_handler))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/chat", post(chat_handler))
        .nest("/admin", admin_routes)
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Any origin may call the relay. Every OPTIONS request is answered here with an empty body.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
        .max_age(Duration::from_secs(60 * 60))
}

async fn auth_middleware(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let expected = state.admin_key.as_deref().ok_or(StatusCode::UNAUTHORIZED)?;
    let authorized = req
        .headers()
        .get("x-admin-key")
        .is_some_and(|val| keys_match(val.as_bytes(), expected.as_bytes()));
    if !authorized {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(req).await)
}

/// Compares every byte so the time taken does not reveal how long a matching prefix was.
fn keys_match(given: &[u8], expected: &[u8]) -> bool {
    if given.len() != expected.len() {
        return false;
    }
    given
        .iter()
        .zip(expected)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
