use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use http::{header, Method};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{error::AppError, handlers, middleware_layer, state::AppState};

/// Builds the application router.
///
/// CORS and trace decoration are applied once here rather than per handler.
/// Logout and code validation are deliberately public: logout is advisory
/// and validation is called from customers' devices.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let public_routes = Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/tables/validate", post(handlers::tables::validate_link))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/api/auth/verify", get(handlers::auth::verify))
        .route("/api/tables/link", post(handlers::tables::create_link))
        .route("/api/tables/link/image", get(handlers::tables::link_image))
        .route("/api/tables/link/svg", get(handlers::tables::link_svg))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::auth::require_auth,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default())
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .layer(cors)
}

/// Fallback for a known path hit with the wrong HTTP verb.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Fallback for unknown paths.
async fn not_found() -> AppError {
    AppError::NotFound
}
