//! Form handler for the "Place Order" button.

use crate::session::{resolve_session_id, with_session_cookie, SharedState};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect},
    routing::post,
    Router,
};

/// Creates routes for order operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/order", post(place_order))
}

/// Endpoint: POST /order
/// Submits the session's cart to the order service, then redirects back to
/// the page where the outcome is shown as the status message.
async fn place_order(State(state): State<SharedState>, headers: HeaderMap) -> impl IntoResponse {
    let (session_id, is_new) = resolve_session_id(&headers);

    state.place_order(&session_id).await;

    with_session_cookie(Redirect::to("/"), &session_id, is_new)
}
