use cafe_ui::config::CafeConfig;
use cafe_ui::http::ApiClient;
use cafe_ui::menu::loader_for;
use cafe_ui::order::HttpOrderSubmitter;
use cafe_ui::router::create_app_router;
use cafe_ui::session::AppState;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO, override with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cafe_ui=debug")),
        )
        .init();

    let config = CafeConfig::from_env()?;
    tracing::info!(
        "Using API base {} (menu source: {:?})",
        config.api_base,
        config.menu_source
    );

    let client = ApiClient::new(&config.api_base)?;

    // Load the menu once, before accepting visitors
    let menu = loader_for(&config, &client).load().await;
    tracing::info!("Menu ready with {} item(s)", menu.len());

    // Initialize application state
    let submitter = Arc::new(HttpOrderSubmitter::new(client));
    let state = Arc::new(AppState::new(menu, submitter));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Student Cafe running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
