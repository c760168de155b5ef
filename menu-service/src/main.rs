use dotenvy::dotenv;
use menu_service::config::MenuConfig;
use menu_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing("menu-service", "info");

    let config = MenuConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = Application::build(config).await?;
    tracing::info!("Starting menu-service on port {}", app.port());
    app.run_until_stopped().await?;

    Ok(())
}
