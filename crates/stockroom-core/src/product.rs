//! Product and warehouse records, plus the values derived from them.
//!
//! A logical product may have several rows, one per warehouse it has stock
//! in. Rows share `id`, `name` and `sku`; the pair `(id, warehouse)` is the
//! effective key. Warehouse codes on product rows are never checked against
//! the warehouse list.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

// ─── Records ─────────────────────────────────────────────────────────────────

/// One `(id, warehouse)` stock record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id:        String,
  pub name:      String,
  pub sku:       String,
  /// Warehouse code.
  pub warehouse: String,
  pub stock:     u32,
  pub demand:    u32,
}

/// Static reference data for a stocking location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
  pub code:    String,
  pub name:    String,
  pub city:    String,
  pub country: String,
}

// ─── Derived values ──────────────────────────────────────────────────────────

/// Stock health relative to demand.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProductStatus {
  /// `stock < demand`
  Critical,
  /// `stock == demand`, including `0 == 0`.
  Low,
  /// `stock > demand`
  Healthy,
}

/// Which side of demand the stock sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Balance {
  Surplus,
  Shortage,
  Balanced,
}

impl Product {
  pub fn status(&self) -> ProductStatus {
    use std::cmp::Ordering::*;
    match self.stock.cmp(&self.demand) {
      Less => ProductStatus::Critical,
      Greater => ProductStatus::Healthy,
      Equal => ProductStatus::Low,
    }
  }

  pub fn balance(&self) -> Balance {
    match self.status() {
      ProductStatus::Critical => Balance::Shortage,
      ProductStatus::Healthy => Balance::Surplus,
      ProductStatus::Low => Balance::Balanced,
    }
  }

  /// Stock as a percentage of demand, capped at 100. A zero demand counts as
  /// one unit so the ratio stays finite.
  pub fn stock_percentage(&self) -> u8 {
    let ratio = f64::from(self.stock) / f64::from(self.demand.max(1));
    (ratio * 100.0).round().min(100.0) as u8
  }

  /// Units of demand this row can actually serve.
  pub fn fillable(&self) -> u32 { self.stock.min(self.demand) }
}
