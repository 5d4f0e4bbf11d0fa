//! Page rendering and read-only endpoints
//!
//! `GET /` renders the whole UI of the visitor's session as one HTML page.
//! Every button is a small form posting to the cart/order handlers. Reads
//! never create sessions; only the form posts do.

use crate::cart::helpers::format_price;
use crate::session::{resolve_session_id, with_session_cookie, CafeSession, SharedState, StatusMessage};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::fmt::Write;

/// Creates routes for the page and its JSON snapshot
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/api/cart", get(cart_snapshot))
        .route("/health", get(health))
}

/// JSON view of one session, served by `GET /api/cart`
#[derive(Debug, Serialize)]
pub struct CartSnapshot<'a> {
    pub items: &'a crate::cart::Cart,
    /// Display total, two decimals
    pub total: String,
    pub message: Option<&'a StatusMessage>,
}

/// Endpoint: GET /
async fn index(State(state): State<SharedState>, headers: HeaderMap) -> impl IntoResponse {
    let (session_id, is_new) = resolve_session_id(&headers);

    let html = state.view(&session_id, render_page);

    with_session_cookie(Html(html), &session_id, is_new)
}

/// Endpoint: GET /api/cart
async fn cart_snapshot(State(state): State<SharedState>, headers: HeaderMap) -> impl IntoResponse {
    let (session_id, is_new) = resolve_session_id(&headers);

    let body = state.view(&session_id, |session| {
        Json(CartSnapshot {
            items: session.cart(),
            total: format_price(session.total()),
            message: session.message(),
        })
        .into_response()
    });

    with_session_cookie(body, &session_id, is_new)
}

/// Endpoint: GET /health
async fn health() -> &'static str {
    "OK"
}

/// Renders the full page for `session`.
pub fn render_page(session: &CafeSession) -> String {
    let mut html = String::new();

    html.push_str(concat!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n",
        "<meta charset=\"utf-8\">\n<title>Student Cafe</title>\n",
        "</head>\n<body>\n<div class=\"App\">\n",
        "<header class=\"App-header\"><h1>Student Cafe</h1></header>\n",
        "<main class=\"container\">\n",
    ));

    // Menu
    html.push_str("<div class=\"menu\">\n<h2>Menu</h2>\n<ul>\n");
    for item in session.menu().items() {
        let _ = write!(
            html,
            concat!(
                "<li><span>{} - ${}</span>",
                "<form method=\"post\" action=\"/cart/add\">",
                "<input type=\"hidden\" name=\"item_id\" value=\"{}\">",
                "<button type=\"submit\">Add to Cart</button></form></li>\n"
            ),
            escape_html(&item.name),
            format_price(item.price),
            escape_html(&item.id),
        );
    }
    html.push_str("</ul>\n</div>\n");

    // Cart
    html.push_str("<div class=\"cart\">\n<h2>Your Cart</h2>\n");
    let cart = session.cart();
    if cart.is_empty() {
        html.push_str("<p>Your cart is empty</p>\n");
    } else {
        html.push_str("<ul>\n");
        for (index, entry) in cart.entries().iter().enumerate() {
            let _ = write!(
                html,
                concat!(
                    "<li>{} - ${}",
                    "<form method=\"post\" action=\"/cart/remove\">",
                    "<input type=\"hidden\" name=\"index\" value=\"{}\">",
                    "<button type=\"submit\" class=\"remove-btn\">Remove</button></form></li>\n"
                ),
                escape_html(&entry.name),
                format_price(entry.price),
                index,
            );
        }
        html.push_str("</ul>\n");
        let _ = writeln!(
            html,
            "<p class=\"total\">Total: ${}</p>",
            format_price(cart.total())
        );
    }
    html.push_str(concat!(
        "<form method=\"post\" action=\"/order\">",
        "<button type=\"submit\" class=\"order-btn\">Place Order</button></form>\n",
    ));

    if let Some(message) = session.message() {
        let class = if message.is_success() {
            "message success"
        } else {
            "message error"
        };
        let _ = writeln!(
            html,
            "<p class=\"{}\">{}</p>",
            class,
            escape_html(message.text())
        );
    }

    html.push_str("</div>\n</main>\n</div>\n</body>\n</html>\n");
    html
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
