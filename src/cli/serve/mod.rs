//! Serve command - prediction pages, JSON API and health checks

use std::net::SocketAddr;

use clap::Args;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, MetricsEndpoint};
use crate::config::AppConfig;
use crate::infrastructure::observability::init_metrics;

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}

pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let state = crate::create_app_state(&config)?;
    let metrics = init_metrics(&config.metrics).map(|metrics| MetricsEndpoint {
        metrics,
        path: config.metrics.path.clone(),
    });
    let app = create_router(state, metrics);

    let addr = build_socket_addr(&config, args.port)?;
    info!("Starting Health Assistant on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(super::shutdown_signal())
        .await?;

    Ok(())
}

fn build_socket_addr(config: &AppConfig, port: Option<u16>) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        port.unwrap_or(config.server.port),
    )))
}
