/// Dashboard entry point: load once, optionally keep refreshing
use launch_dash::{
    AppConfig, DashboardController, LaunchApiClient, LaunchDataGateway, LaunchGateway,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded, launch API at {}", config.api_base_url);

    let client = LaunchApiClient::new(config.api_base_url.clone(), config.request_timeout)?;
    let gateway = Arc::new(LaunchDataGateway::new(client));
    let mut controller =
        DashboardController::new(gateway).with_status_filter(config.status_filter.clone());

    controller.initialize();
    controller.settle().await;
    print_view(&controller)?;

    if config.refresh_seconds == 0 {
        return Ok(());
    }

    info!(
        "Starting dashboard refresh task (interval: {}s)",
        config.refresh_seconds
    );
    loop {
        tokio::time::sleep(Duration::from_secs(config.refresh_seconds)).await;
        controller.refresh_data();
        controller.settle().await;
        if let Some(err) = &controller.view().error {
            error!("Dashboard refresh error: {}", err);
        }
        print_view(&controller)?;
    }
}

fn print_view<G: LaunchGateway + 'static>(
    controller: &DashboardController<G>,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "view": controller.view(),
        "visiblePages": controller.visible_pages(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
