//! Product filtering, pagination and aggregate summaries.
//!
//! Every read works over the rows in store (insertion) order; nothing here
//! sorts products.

use serde::{Deserialize, Serialize};

use crate::product::{Product, Warehouse};

/// Upper bound on rows per page. Also the page size used when the caller
/// asks for none, or for a non-positive one.
pub const MAX_PAGE_SIZE: usize = 10;

// ─── Query types ─────────────────────────────────────────────────────────────

/// Row predicates shared by [`list_products`] and [`summarize_products`].
///
/// Blank (empty or whitespace-only) values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductFilter {
  /// Case-insensitive substring match over `id`, `sku` and `name`.
  pub search:    Option<String>,
  /// Case-insensitive exact match against the row's computed status. A value
  /// that is not a known status matches nothing.
  pub status:    Option<String>,
  /// Case-insensitive exact match against the row's warehouse code.
  pub warehouse: Option<String>,
}

/// Parameters for [`list_products`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
  pub filter:    ProductFilter,
  /// 1-indexed; defaults to 1.
  pub page:      Option<i64>,
  /// Clamped to [`MAX_PAGE_SIZE`].
  pub page_size: Option<i64>,
}

impl ProductQuery {
  /// Rows per page after clamping.
  pub fn page_size(&self) -> usize {
    match self.page_size {
      Some(n) if n > 0 => (n as u64).min(MAX_PAGE_SIZE as u64) as usize,
      _ => MAX_PAGE_SIZE,
    }
  }

  /// Index of the first row on the requested page, or `None` when the page
  /// precedes the first one.
  fn offset(&self) -> Option<usize> {
    let page = self.page.unwrap_or(1);
    if page < 1 {
      return None;
    }
    usize::try_from(page - 1).ok()?.checked_mul(self.page_size())
  }
}

/// One page of filtered products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
  pub products: Vec<Product>,
  /// Count after filtering, before pagination.
  pub total:    usize,
}

/// Aggregate stock/demand across the rows matching a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
  pub total_stock:  u64,
  pub total_demand: u64,
  /// Percentage of demand that current stock can serve; `0.0` when there is
  /// no demand at all.
  pub fill_rate:    f64,
}

// ─── Matching ────────────────────────────────────────────────────────────────

/// Trimmed, case-folded forms of the filter values, computed once per query.
struct Needles {
  search:    Option<String>,
  warehouse: Option<String>,
  status:    Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
  value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ProductFilter {
  fn needles(&self) -> Needles {
    Needles {
      search:    non_blank(&self.search).map(str::to_lowercase),
      warehouse: non_blank(&self.warehouse).map(str::to_uppercase),
      status:    non_blank(&self.status).map(str::to_lowercase),
    }
  }

  /// Rows passing the filter, in store order.
  pub fn apply<'a>(
    &self,
    rows: &'a [Product],
  ) -> impl Iterator<Item = &'a Product> + use<'a> {
    let needles = self.needles();
    rows.iter().filter(move |p| needles.matches(p))
  }
}

impl Needles {
  fn matches(&self, p: &Product) -> bool {
    if let Some(q) = &self.search {
      let hit = p.id.to_lowercase().contains(q.as_str())
        || p.sku.to_lowercase().contains(q.as_str())
        || p.name.to_lowercase().contains(q.as_str());
      if !hit {
        return false;
      }
    }
    if let Some(w) = &self.warehouse
      && p.warehouse.to_uppercase() != *w
    {
      return false;
    }
    if let Some(s) = &self.status {
      let status: &'static str = p.status().into();
      if status != s.as_str() {
        return false;
      }
    }
    true
  }
}

// ─── Operations ──────────────────────────────────────────────────────────────

/// Filter `rows` and cut out the requested page. Pages past the end (or
/// before the first) come back empty with the correct `total`.
pub fn list_products(rows: &[Product], query: &ProductQuery) -> ProductPage {
  let matched: Vec<&Product> = query.filter.apply(rows).collect();
  let total = matched.len();

  let products = match query.offset() {
    Some(start) => matched
      .into_iter()
      .skip(start)
      .take(query.page_size())
      .cloned()
      .collect(),
    None => Vec::new(),
  };

  ProductPage { products, total }
}

/// Totals over every row matching `filter`, ignoring pagination.
pub fn summarize_products(
  rows: &[Product],
  filter: &ProductFilter,
) -> InventorySummary {
  let (mut stock, mut demand, mut fillable) = (0u64, 0u64, 0u64);
  for p in filter.apply(rows) {
    stock += u64::from(p.stock);
    demand += u64::from(p.demand);
    fillable += u64::from(p.fillable());
  }

  let fill_rate = if demand > 0 {
    fillable as f64 / demand as f64 * 100.0
  } else {
    0.0
  };

  InventorySummary {
    total_stock: stock,
    total_demand: demand,
    fill_rate,
  }
}

/// A fresh copy of `warehouses`, ordered by code.
pub fn sorted_warehouses(warehouses: &[Warehouse]) -> Vec<Warehouse> {
  let mut out = warehouses.to_vec();
  out.sort_by(|a, b| a.code.cmp(&b.code));
  out
}
