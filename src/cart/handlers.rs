//! Form handlers for cart operations
//!
//! This module implements the "Add to Cart" and "Remove" buttons of the
//! page. Both answer with a redirect back to the page.

use super::helpers::format_item_summary;
use crate::session::{resolve_session_id, with_session_cookie, SharedState};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect},
    routing::post,
    Form, Router,
};
use serde::Deserialize;

/// Form body of the "Add to Cart" button
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    pub item_id: String,
}

/// Form body of the "Remove" button
#[derive(Debug, Deserialize)]
pub struct RemoveItemForm {
    pub index: usize,
}

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart/add", post(add_item))
        .route("/cart/remove", post(remove_item))
}

/// Endpoint: POST /cart/add
async fn add_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<AddItemForm>,
) -> impl IntoResponse {
    let (session_id, is_new) = resolve_session_id(&headers);

    {
        let mut session = state.session(&session_id);
        match session.add(&form.item_id) {
            Ok(()) => tracing::debug!(
                "Cart {}: {}",
                session_id,
                format_item_summary(session.cart().entries())
            ),
            Err(e) => tracing::warn!("Cart {}: {}", session_id, e),
        }
    }

    with_session_cookie(Redirect::to("/"), &session_id, is_new)
}

/// Endpoint: POST /cart/remove
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<RemoveItemForm>,
) -> impl IntoResponse {
    let (session_id, is_new) = resolve_session_id(&headers);

    state.session(&session_id).remove_at(form.index);

    with_session_cookie(Redirect::to("/"), &session_id, is_new)
}
