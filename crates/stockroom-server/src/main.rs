//! stockroom server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), seeds an
//! in-process inventory store, and serves the JSON API over HTTP.
//!
//! ```
//! cargo run -p stockroom-server -- --seed ./seed.json
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use stockroom_server::{expand_tilde, load_config};
use stockroom_store_memory::MemoryStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Stockroom inventory API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// JSON seed file; overrides `seed_path` from the configuration.
  #[arg(long, env = "STOCKROOM_SEED")]
  seed: Option<PathBuf>,
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

  let server_cfg =
    load_config(&cli.config).context("failed to load configuration")?;

  let store = match cli.seed.or_else(|| server_cfg.seed_path.clone()) {
    Some(path) => {
      let path = expand_tilde(&path);
      MemoryStore::open(&path)
        .await
        .with_context(|| format!("failed to seed store from {path:?}"))?
    }
    None => MemoryStore::builtin().context("failed to load built-in seed")?,
  };

  let app = stockroom_server::router(Arc::new(store));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}/api");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
