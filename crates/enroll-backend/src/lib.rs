//! The Enroll backend: an axum server over the in-memory activity registry.

pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use services::ActivityServiceInMemory;

/// Shared state for the serving process.
///
/// Owns the activity registry explicitly instead of a module-level global;
/// handlers receive it through axum's `State` extractor.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            activities: ActivityServiceInMemory::with_defaults(),
            started_at: chrono::Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        let dev_ports = [3000, 8000, 8080, 8081, 5173];
        dev_ports
            .iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| origin.parse().ok())
            .collect()
    } else {
        // Production origins - add your domains here
        Vec::new()
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}

/// Build the application router.
///
/// Kept separate from `main` so integration tests can drive the router
/// without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::permanent("/static/index.html") }),
        )
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", get(handlers::health::get))
        .route("/activities", get(handlers::activities::list))
        .route(
            "/activities/{activity}/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/{activity}/unregister",
            delete(handlers::activities::unregister),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}
