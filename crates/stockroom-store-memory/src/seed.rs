//! Start-up data for the store.

use std::{collections::HashSet, path::Path};

use serde::Deserialize;
use stockroom_core::{
  Error as CoreError,
  product::{Product, Warehouse},
};

use crate::{Error, Result};

/// The data set shipped with the crate.
const BUILTIN: &str = include_str!("../seed/inventory.json");

/// Initial warehouse and product rows, in store order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
  #[serde(default)]
  pub warehouses: Vec<Warehouse>,
  #[serde(default)]
  pub products:   Vec<Product>,
}

impl Seed {
  /// The built-in demo inventory.
  pub fn builtin() -> Result<Self> { Self::from_json(BUILTIN) }

  /// Parse a seed document of the form
  /// `{"warehouses": [...], "products": [...]}`. Duplicates are rejected
  /// later, by [`MemoryStore::new`](crate::MemoryStore::new).
  pub fn from_json(raw: &str) -> Result<Self> {
    Ok(serde_json::from_str(raw)?)
  }

  /// Read and parse a seed file.
  pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
      .await
      .map_err(|source| Error::SeedIo {
        path: path.to_path_buf(),
        source,
      })?;
    Self::from_json(&raw)
  }

  /// Reject duplicate `(id, warehouse)` rows and duplicate warehouse codes.
  /// Product rows may reference warehouse codes that are not listed.
  pub fn validate(&self) -> Result<()> {
    let mut codes = HashSet::new();
    for w in &self.warehouses {
      if !codes.insert(w.code.as_str()) {
        return Err(CoreError::DuplicateWarehouse(w.code.clone()).into());
      }
    }

    let mut keys = HashSet::new();
    for p in &self.products {
      if !keys.insert((p.id.as_str(), p.warehouse.as_str())) {
        return Err(
          CoreError::DuplicateProductRow {
            id:        p.id.clone(),
            warehouse: p.warehouse.clone(),
          }
          .into(),
        );
      }
    }
    Ok(())
  }
}
