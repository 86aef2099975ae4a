//! Launch command - start the UI server, then redirect every request to it

use std::net::SocketAddr;
use std::time::Duration;

use clap::Args;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_redirect_router, RedirectState};
use crate::config::AppConfig;
use crate::infrastructure::launcher::{spawn_ui, LaunchCommand};

#[derive(Args, Clone, Debug)]
pub struct LaunchArgs {
    /// Port to listen on (overrides `PORT` and config)
    #[arg(long)]
    pub port: Option<u16>,
}

pub async fn run(args: LaunchArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let launch = LaunchCommand::from_config(&config.launcher)?;
    // Held for the lifetime of the server; never awaited
    let _child = spawn_ui(&launch);

    tokio::time::sleep(Duration::from_millis(config.launcher.startup_delay_ms)).await;

    let state = RedirectState::new(config.launcher.redirect_host.clone(), config.launcher.ui_port);
    let app = create_redirect_router(state);

    let port = resolve_port(args.port, std::env::var("PORT").ok(), &config);
    let addr = SocketAddr::from((config.server.host.parse::<std::net::IpAddr>()?, port));
    info!("Launcher redirecting on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(super::shutdown_signal())
        .await?;

    Ok(())
}

/// `--port`, then `PORT`, then `server.port`
fn resolve_port(flag: Option<u16>, env_port: Option<String>, config: &AppConfig) -> u16 {
    flag.or_else(|| env_port.and_then(|p| p.trim().parse().ok()))
        .unwrap_or(config.server.port)
}
