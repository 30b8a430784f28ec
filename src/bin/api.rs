use finance_advisor::{
    api::start_server,
    config::ServerConfig,
    generator::load_model,
    FinanceAdvisor,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    info!("🚀 Personal Finance Advisor - API Server");
    info!("📍 Port: {}", config.port);
    info!("🌐 Allowed origins: {}", config.allowed_origins.join(", "));

    // Warm the model before the first request arrives
    let model = load_model();
    info!("✅ Model {} ready", model.model_id);

    let advisor = Arc::new(FinanceAdvisor::new());

    info!("📡 Starting API server...");
    start_server(advisor, config).await?;

    Ok(())
}
