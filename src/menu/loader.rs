//! Menu loading strategies.
//!
//! Both strategies sit behind [`MenuLoader`] and always produce a usable
//! menu: the remote one degrades to [`Menu::fallback`] on any failure.

use super::models::{Menu, MenuItem};
use crate::config::{CafeConfig, MenuSource};
use crate::error::Result;
use crate::http::ApiClient;
use async_trait::async_trait;

/// Gateway path of the catalog listing
pub const CATALOG_ITEMS_PATH: &str = "/api/catalog/items";

#[async_trait]
pub trait MenuLoader: Send + Sync {
    /// Produces the menu. Never fails.
    async fn load(&self) -> Menu;
}

/// The built-in menu, no network involved.
#[derive(Debug, Clone, Default)]
pub struct StaticMenu;

#[async_trait]
impl MenuLoader for StaticMenu {
    async fn load(&self) -> Menu {
        Menu::fallback()
    }
}

/// Fetches the menu from the catalog service through the gateway.
#[derive(Debug, Clone)]
pub struct RemoteMenu {
    client: ApiClient,
}

impl RemoteMenu {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One catalog request, without fallback.
    pub async fn fetch(&self) -> Result<Menu> {
        let items: Vec<MenuItem> = self.client.get_json(CATALOG_ITEMS_PATH).await?;
        Menu::new(items)
    }
}

#[async_trait]
impl MenuLoader for RemoteMenu {
    async fn load(&self) -> Menu {
        match self.fetch().await {
            Ok(menu) => {
                tracing::info!("Loaded {} menu item(s) from the catalog", menu.len());
                menu
            }
            Err(e) => {
                tracing::warn!("Error fetching menu items, using the built-in menu: {}", e);
                Menu::fallback()
            }
        }
    }
}

/// Picks the loader matching the configured menu source.
pub fn loader_for(config: &CafeConfig, client: &ApiClient) -> Box<dyn MenuLoader> {
    match config.menu_source {
        MenuSource::Static => Box::new(StaticMenu),
        MenuSource::Remote => Box::new(RemoteMenu::new(client.clone())),
    }
}
