//! fallreport server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus `FALLREPORT_*`
//! environment variables, opens the SQLite store, and serves the JSON API
//! over HTTP.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::http::HeaderValue;
use clap::Parser;
use fallreport_server::ServerConfig;
use fallreport_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Fall report server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  tracing::info!("Starting server...");

  let server_cfg = load_config(&cli.config)?;

  let cors_origin = HeaderValue::from_str(&server_cfg.cors_origin)
    .with_context(|| format!("invalid cors_origin {:?}", server_cfg.cors_origin))?;

  // The schema must be in place before anything is served.
  let store_path = expand_tilde(&server_cfg.database_path);
  let store = SqliteStore::open(&store_path)
    .await
    .inspect_err(|e| tracing::error!(error = %e, "failed to initialize database"))
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!(path = %store_path.display(), "database initialized");

  let app = fallreport_server::router(Arc::new(store.clone()), cors_origin);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Listening on http://{}", listener.local_addr()?);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  store.close().await.context("failed to close store")?;
  tracing::info!("Server shutdown complete");

  Ok(())
}

/// Layer defaults, the config file, `FALLREPORT_*` variables, and finally a
/// bare `PORT` variable.
fn load_config(path: &Path) -> anyhow::Result<ServerConfig> {
  let settings = config::Config::builder()
    .set_default("host", ServerConfig::DEFAULT_HOST)?
    .set_default("port", i64::from(ServerConfig::DEFAULT_PORT))?
    .set_default("database_path", ServerConfig::DEFAULT_DATABASE_PATH)?
    .set_default("cors_origin", ServerConfig::DEFAULT_CORS_ORIGIN)?
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("FALLREPORT"))
    .set_override_option("port", std::env::var("PORT").ok())?
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl+C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to install SIGTERM handler");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
    _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
