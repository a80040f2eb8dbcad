//! HTTP host for the Stockroom API.
//!
//! Wires configuration and request tracing around
//! [`stockroom_api::api_router`]; the binary in `main.rs` only parses flags
//! and serves.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use serde::Deserialize;
use stockroom_core::store::InventoryStore;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `STOCKROOM_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:      String,
  pub port:      u16,
  /// JSON seed file; the built-in inventory is used when unset.
  pub seed_path: Option<PathBuf>,
}

/// Layer defaults, the TOML file at `path` (if it exists) and the
/// environment, in increasing order of precedence.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 4000)?
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("STOCKROOM"))
    .build()?
    .try_deserialize()
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API mounted under `/api`, with per-request tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: InventoryStore + 'static,
{
  Router::new()
    .nest("/api", stockroom_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use stockroom_store_memory::MemoryStore;
  use tower::ServiceExt as _;

  #[test]
  fn missing_config_file_uses_defaults() {
    let cfg = load_config(Path::new("/nonexistent/stockroom.toml")).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 4000);
  }

  #[test]
  fn tilde_expansion_leaves_plain_paths_alone() {
    assert_eq!(
      expand_tilde(Path::new("/srv/seed.json")),
      PathBuf::from("/srv/seed.json")
    );
  }

  #[tokio::test]
  async fn api_is_mounted_under_prefix() {
    let store = Arc::new(MemoryStore::builtin().unwrap());

    let req = Request::get("/api/warehouses").body(Body::empty()).unwrap();
    let resp = router(store.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 3);

    let req = Request::get("/warehouses").body(Body::empty()).unwrap();
    let resp = router(store).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }
}
