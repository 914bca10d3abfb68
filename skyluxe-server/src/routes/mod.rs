//! API routes.

use std::sync::Arc;

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::{Next, from_fn},
    response::Response,
    routing::get,
};

use http::Uri;

use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::app::{AppError, AppErrorKind, AppState, app_rest_headers};

pub mod health;
pub mod search;

/// Builds the gateway router with every middleware applied.
pub fn router(state: AppState) -> Router {
    Router::<AppState>::new()
        .route("/", get(health::index))
        .route("/search-flight", get(search::search_flight))
        .fallback(not_found)
        .layer(from_fn(app_rest_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request| {
                    let method = req.method();
                    let uri = req.uri();

                    // axum automatically adds this extension.
                    let matched_path = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::debug_span!("request", %method, %uri, matched_path)
                })
                // failed searches are logged by `log_app_errors`
                .on_failure(()),
        )
        .layer(from_fn(log_app_errors))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::from(AppErrorKind::NotFound)
        .with_message(format!("Path not found: {}", uri.path()))
}

// Our middleware is responsible for logging error details internally
async fn log_app_errors(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    // If the response contains an AppError Extension, log it.
    if let Some(err) = response.extensions().get::<Arc<AppError>>() {
        tracing::error!(?err, "search failed: {}", err);
    }
    response
}
