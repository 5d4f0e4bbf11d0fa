//! Menu Domain Module
//!
//! This module contains everything about the list of orderable items:
//! - Domain models (MenuItem, Menu)
//! - Loading strategies (built-in list, remote catalog with fallback)

pub mod loader;
pub mod models;

// Re-export commonly used types for convenience
pub use loader::{loader_for, MenuLoader, RemoteMenu, StaticMenu};
pub use models::{Menu, MenuItem};
