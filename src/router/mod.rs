//! Routing module for the cafe UI
//!
//! Every request runs inside a `request` span carrying the method, the path
//! and the visitor's session id (`-` before the first cookie is issued).

pub mod page;

use crate::session::{state::session_id_from, SharedState};
use axum::{body::Body, extract::Request, response::Response, Router};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let session = session_id_from(req.headers());
            tracing::info_span!(
                "request",
                method = %req.method(),
                path = %req.uri().path(),
                session = session.as_deref().unwrap_or("-"),
            )
        })
        .on_request(|_req: &Request<Body>, _span: &Span| {
            tracing::debug!("started");
        })
        .on_response(|res: &Response, latency: Duration, _span: &Span| {
            let status = res.status();
            if status.is_client_error() || status.is_server_error() {
                tracing::warn!(%status, ?latency, "request failed");
            } else {
                tracing::info!(%status, ?latency, "finished");
            }
        });

    // Permissive for local dev: the page may be served behind the gateway
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(page::routes())
        .merge(crate::cart::routes())
        .merge(crate::order::routes())
        .layer(trace_layer)
        .layer(cors_layer)
        .with_state(state)
}
