//! Error type for `stockroom-store-memory`.

use std::path::PathBuf;

use stockroom_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] stockroom_core::Error),

  #[error("failed to read seed file {path:?}: {source}")]
  SeedIo {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid seed data: {0}")]
  SeedFormat(#[from] serde_json::Error),
}

impl StoreError for Error {
  fn domain(&self) -> Option<&stockroom_core::Error> {
    match self {
      Error::Core(e) => Some(e),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
