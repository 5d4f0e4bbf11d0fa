//! Session Module
//!
//! This module contains the per-visitor UI state:
//! - The session model (cart, status message, order phase)
//! - Application state shared by all handlers
//! - Session cookie handling

pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{CafeSession, OrderPhase, StatusMessage};
pub use state::{resolve_session_id, with_session_cookie, AppState, SharedState};
