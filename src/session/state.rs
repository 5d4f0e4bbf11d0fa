//! Application State Management
//!
//! This module holds the state shared by all request handlers: the loaded
//! menu, the order submitter and one [`CafeSession`] per visitor.

use super::models::CafeSession;
use crate::menu::Menu;
use crate::order::{OrderReceipt, OrderSubmitter};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use dashmap::{mapref::one::RefMut, DashMap};
use std::sync::Arc;
use uuid::Uuid;

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "cafe_session";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// Menu loaded at start-up, shared by every session
    pub menu: Arc<Menu>,

    /// UI state per visitor, keyed by session id.
    /// Guards must never be held across an `.await`.
    pub sessions: DashMap<String, CafeSession>,

    pub submitter: Arc<dyn OrderSubmitter>,
}

impl AppState {
    pub fn new(menu: Menu, submitter: Arc<dyn OrderSubmitter>) -> Self {
        Self {
            menu: Arc::new(menu),
            sessions: DashMap::new(),
            submitter,
        }
    }

    /// Returns the session `session_id`, creating an empty one on first use.
    pub fn session(&self, session_id: &str) -> RefMut<'_, String, CafeSession> {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| CafeSession::new(self.menu.clone()))
    }

    /// Runs `f` against the session `session_id` without creating it.
    ///
    /// Unknown ids see an empty, transient session, so read-only requests
    /// never grow the session map.
    pub fn view<R>(&self, session_id: &str, f: impl FnOnce(&CafeSession) -> R) -> R {
        match self.sessions.get(session_id) {
            Some(session) => f(session.value()),
            None => f(&CafeSession::new(self.menu.clone())),
        }
    }

    /// Runs one order submission for `session_id`.
    ///
    /// The session guard is released while the order service is being
    /// called, so the visitor can keep using the page in the meantime.
    /// If this future is dropped before the service answers, the session
    /// goes back to `Idle` with its cart untouched.
    pub async fn place_order(&self, session_id: &str) {
        let request = self.session(session_id).begin_order();

        if let Some(request) = request {
            let pending = PendingOrder {
                state: self,
                session_id,
                settled: false,
            };
            let outcome = self.submitter.submit(&request).await;
            pending.settle(outcome);
        }
    }
}

/// An order sent to the service on behalf of one session.
struct PendingOrder<'a> {
    state: &'a AppState,
    session_id: &'a str,
    settled: bool,
}

impl PendingOrder<'_> {
    fn settle(mut self, outcome: crate::error::Result<OrderReceipt>) {
        self.settled = true;
        self.state.session(self.session_id).finish_order(outcome);
    }
}

impl Drop for PendingOrder<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        tracing::warn!("Order for session {} abandoned before completion", self.session_id);
        if let Some(mut session) = self.state.sessions.get_mut(self.session_id) {
            session.abandon_order();
        }
    }
}

// =============================================================================
// Session Cookie
// =============================================================================

/// Reads the session id from the request cookies, or mints a new one.
///
/// Returns the id and whether it was freshly created (and so must be sent
/// back in a `Set-Cookie` header).
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    match session_id_from(headers) {
        Some(id) => (id, false),
        None => (Uuid::new_v4().simple().to_string(), true),
    }
}

/// Session id carried by the request cookies, if any.
pub fn session_id_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// `Set-Cookie` value for a new session id.
pub fn session_cookie(session_id: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, session_id
    ))
    .ok()
}

/// Attaches the session cookie to `response` when the session is new.
pub fn with_session_cookie(response: impl IntoResponse, session_id: &str, is_new: bool) -> Response {
    let mut response = response.into_response();

    if is_new {
        if let Some(cookie) = session_cookie(session_id) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }

    response
}
