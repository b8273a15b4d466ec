//! promflare exporter binary.
//!
//! Startup order: parse flags -> init tracing -> load config -> register the
//! metric set -> spawn the updater -> bind and serve `/metrics`. Every
//! startup failure surfaces as a `Result` from `run`; only this entry point
//! decides to terminate the process.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, EnvFilter};

use promflare_core::error::{PromflareError, Result};
use promflare_core::metrics::MetricRegistry;

use promflare_exporter::{app_state::AppState, config, metrics::ExporterMetrics, router};
use promflare_exporter::source::RandomSource;
use promflare_exporter::updater::{Updater, DEFAULT_TICK};

#[derive(Parser)]
#[command(name = "promflare", about = "Pull-based metrics exporter skeleton")]
struct Cli {
    /// The address to listen on for HTTP requests.
    #[arg(long = "listen-address", default_value = "0.0.0.0:8080")]
    listen_address: String,

    /// Sets log level to debug.
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Path to config file.
    #[arg(long, default_value = "./config.toml")]
    config: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "exporter failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_from_file(&cli.config)?;
    tracing::info!(config = ?cfg, "configuration file settings");

    let registry = Arc::new(MetricRegistry::new());
    let metrics = ExporterMetrics::register(&registry)?;

    let shutdown = CancellationToken::new();
    let updater = Updater::new(metrics, Arc::new(RandomSource::new()), DEFAULT_TICK);
    tokio::spawn(updater.run(shutdown.clone()));

    let state = AppState::new(cfg, registry);
    let app = router::build_router(state);

    let listen: SocketAddr = cli.listen_address.parse().map_err(|e| {
        PromflareError::Bind(format!("invalid listen address `{}`: {e}", cli.listen_address))
    })?;
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| PromflareError::Bind(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "serving metrics on /metrics");

    let result = axum::serve(listener, app)
        .await
        .map_err(|e| PromflareError::Internal(format!("server failed: {e}")));
    shutdown.cancel();
    result
}
