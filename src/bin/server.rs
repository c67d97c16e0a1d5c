//! Launch dashboard HTTP server.
//!
//! Serves the dashboard page and its chart API from a dataset loaded once at
//! startup.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin launch-dash-server --features http-server -- spacex_launch_dash.csv
//! ```
//!
//! # Environment Variables
//!
//! - `LAUNCH_DASH_DATA`: data file when no argument is given (default: spacex_launch_dash.csv)
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8050)
//! - `RUST_LOG`: Log filter (default: info)

use tracing::info;
use tracing_subscriber::EnvFilter;

use launch_dash::config::DashboardConfig;
use launch_dash::data::loader;
use launch_dash::http::{create_router, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting launch dashboard server");

    let config = DashboardConfig::from_env();
    let dataset = loader::load_file(&config.data_path)?;
    let state = ServerState::new(dataset);
    let app = create_router(state);

    let addr = config.bind_addr()?;
    info!("Dashboard available at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
