//! [`MemoryStore`], the in-process implementation of [`InventoryStore`].

use std::{path::Path, sync::Arc};

use chrono::{Local, NaiveDate};
use tokio::sync::RwLock;

use stockroom_core::{
  kpi::{self, KpiPoint},
  mutation::{self, Transfer},
  product::{Product, Warehouse},
  query::{self, InventorySummary, ProductFilter, ProductPage, ProductQuery},
  store::InventoryStore,
};

use crate::{Error, Result, Seed};

// ─── Store ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Inventory {
  products:   Vec<Product>,
  warehouses: Vec<Warehouse>,
}

/// An inventory store held entirely in memory.
///
/// Cloning is cheap; clones share the same rows. Reads take a shared lock;
/// each mutation holds the exclusive lock from lookup to write-back.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
  inner: Arc<RwLock<Inventory>>,
}

impl MemoryStore {
  /// Build a store from seed data, rejecting duplicate rows and codes.
  pub fn new(seed: Seed) -> Result<Self> {
    seed.validate()?;
    tracing::info!(
      products = seed.products.len(),
      warehouses = seed.warehouses.len(),
      "seeded inventory store"
    );
    Ok(Self {
      inner: Arc::new(RwLock::new(Inventory {
        products:   seed.products,
        warehouses: seed.warehouses,
      })),
    })
  }

  /// A store populated with the built-in demo inventory.
  pub fn builtin() -> Result<Self> { Self::new(Seed::builtin()?) }

  /// A store populated from a JSON seed file.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::new(Seed::load(path).await?)
  }

  /// A copy of every product row, in store order.
  pub async fn products(&self) -> Vec<Product> {
    self.inner.read().await.products.clone()
  }

  /// KPI series ending at `today` rather than the local date.
  pub async fn kpis_as_of(
    &self,
    range: &str,
    today: NaiveDate,
  ) -> Result<Vec<KpiPoint>> {
    let inv = self.inner.read().await;
    Ok(kpi::kpis(&inv.products, range, today)?)
  }
}

// ─── InventoryStore impl ─────────────────────────────────────────────────────

impl InventoryStore for MemoryStore {
  type Error = Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage> {
    let inv = self.inner.read().await;
    Ok(query::list_products(&inv.products, query))
  }

  async fn summarize_products(
    &self,
    filter: &ProductFilter,
  ) -> Result<InventorySummary> {
    let inv = self.inner.read().await;
    Ok(query::summarize_products(&inv.products, filter))
  }

  async fn list_warehouses(&self) -> Result<Vec<Warehouse>> {
    let inv = self.inner.read().await;
    Ok(query::sorted_warehouses(&inv.warehouses))
  }

  async fn kpis(&self, range: &str) -> Result<Vec<KpiPoint>> {
    self.kpis_as_of(range, Local::now().date_naive()).await
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  async fn update_demand(&self, id: &str, demand: i64) -> Result<Product> {
    let mut inv = self.inner.write().await;
    match mutation::update_demand(&mut inv.products, id, demand) {
      Ok(row) => {
        tracing::info!(
          id,
          warehouse = %row.warehouse,
          demand,
          "updated demand"
        );
        Ok(row)
      }
      Err(e) => {
        tracing::debug!(id, demand, error = %e, "rejected demand update");
        Err(e.into())
      }
    }
  }

  async fn transfer_stock(&self, transfer: &Transfer) -> Result<Product> {
    let mut inv = self.inner.write().await;
    match mutation::transfer_stock(&mut inv.products, transfer) {
      Ok(row) => {
        tracing::info!(
          id = %transfer.id,
          from = %transfer.from,
          to = %transfer.to,
          qty = transfer.qty,
          "transferred stock"
        );
        Ok(row)
      }
      Err(e) => {
        tracing::debug!(
          id = %transfer.id,
          from = %transfer.from,
          to = %transfer.to,
          qty = transfer.qty,
          error = %e,
          "rejected stock transfer"
        );
        Err(e.into())
      }
    }
  }
}
