//! The `InventoryStore` trait.
//!
//! The trait is implemented by record-store backends (e.g.
//! `stockroom-store-memory`). The API layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  Error,
  kpi::KpiPoint,
  mutation::Transfer,
  product::{Product, Warehouse},
  query::{InventorySummary, ProductFilter, ProductPage, ProductQuery},
};

// ─── Errors ──────────────────────────────────────────────────────────────────

/// An error raised by a store backend.
///
/// Backends wrap domain failures alongside their own (I/O, decoding, ...);
/// callers use [`StoreError::domain`] to tell the two apart.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// The domain failure behind this error, if it is one.
  fn domain(&self) -> Option<&Error>;
}

impl StoreError for Error {
  fn domain(&self) -> Option<&Error> { Some(self) }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the inventory record store.
///
/// Each call runs to completion before the next mutation is observed: a
/// mutation either applies fully or not at all, and no reader sees it half
/// done.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait InventoryStore: Send + Sync {
  type Error: StoreError;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Filter and paginate product rows.
  fn list_products<'a>(
    &'a self,
    query: &'a ProductQuery,
  ) -> impl Future<Output = Result<ProductPage, Self::Error>> + Send + 'a;

  /// Stock, demand and fill rate over every row matching `filter`.
  fn summarize_products<'a>(
    &'a self,
    filter: &'a ProductFilter,
  ) -> impl Future<Output = Result<InventorySummary, Self::Error>> + Send + 'a;

  /// All warehouses, ordered by code.
  fn list_warehouses(
    &self,
  ) -> impl Future<Output = Result<Vec<Warehouse>, Self::Error>> + Send + '_;

  /// Synthetic KPI series for a range token (`7d`, `1m`, ...), ending today
  /// in local time.
  fn kpis<'a>(
    &'a self,
    range: &'a str,
  ) -> impl Future<Output = Result<Vec<KpiPoint>, Self::Error>> + Send + 'a;

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Set the demand of the first row carrying `id` and return it.
  fn update_demand<'a>(
    &'a self,
    id: &'a str,
    demand: i64,
  ) -> impl Future<Output = Result<Product, Self::Error>> + Send + 'a;

  /// Move stock between warehouses and return the destination row.
  fn transfer_stock<'a>(
    &'a self,
    transfer: &'a Transfer,
  ) -> impl Future<Output = Result<Product, Self::Error>> + Send + 'a;
}
