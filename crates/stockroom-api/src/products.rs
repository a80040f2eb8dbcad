//! Handlers for `/products` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/products` | Optional `search`, `status`, `warehouse`, `page`, `page_size` |
//! | `GET`  | `/products/summary` | Optional `search`, `status`, `warehouse` |
//! | `POST` | `/products/:id/demand` | Body: `{"demand": 12}`; returns the updated row |
//! | `POST` | `/products/:id/transfer` | Body: [`TransferBody`]; returns the destination row |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
};
use serde::Deserialize;
use stockroom_core::{
  mutation::Transfer,
  product::Product,
  query::{InventorySummary, ProductFilter, ProductPage, ProductQuery},
  store::InventoryStore,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Substring over id, SKU and name.
  pub search:    Option<String>,
  /// `critical`, `low` or `healthy`.
  pub status:    Option<String>,
  /// Warehouse code.
  pub warehouse: Option<String>,
  /// 1-indexed page number.
  pub page:      Option<i64>,
  /// At most 10.
  #[serde(alias = "pageSize")]
  pub page_size: Option<i64>,
}

impl From<ListParams> for ProductQuery {
  fn from(p: ListParams) -> Self {
    ProductQuery {
      filter:    ProductFilter {
        search:    p.search,
        status:    p.status,
        warehouse: p.warehouse,
      },
      page:      p.page,
      page_size: p.page_size,
    }
  }
}

/// `GET /products[?search=...][&status=...][&warehouse=...][&page=...][&page_size=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ProductPage>, ApiError>
where
  S: InventoryStore,
{
  let Query(params) = params?;
  let page = store
    .list_products(&ProductQuery::from(params))
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(page))
}

// ─── Summary ──────────────────────────────────────────────────────────────────

/// `GET /products/summary[?search=...][&status=...][&warehouse=...]`
pub async fn summary<S>(
  State(store): State<Arc<S>>,
  filter: Result<Query<ProductFilter>, QueryRejection>,
) -> Result<Json<InventorySummary>, ApiError>
where
  S: InventoryStore,
{
  let Query(filter) = filter?;
  let summary = store
    .summarize_products(&filter)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(summary))
}

// ─── Demand ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DemandBody {
  pub demand: i64,
}

/// `POST /products/:id/demand`, body: `{"demand": 12}`
pub async fn update_demand<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Result<Json<DemandBody>, JsonRejection>,
) -> Result<Json<Product>, ApiError>
where
  S: InventoryStore,
{
  let Json(body) = body?;
  let product = store
    .update_demand(&id, body.demand)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(product))
}

// ─── Transfer ─────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /products/:id/transfer`.
#[derive(Debug, Deserialize)]
pub struct TransferBody {
  pub from: String,
  pub to:   String,
  pub qty:  i64,
}

/// `POST /products/:id/transfer`: returns the destination row after the move.
pub async fn transfer<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Result<Json<TransferBody>, JsonRejection>,
) -> Result<Json<Product>, ApiError>
where
  S: InventoryStore,
{
  let Json(body) = body?;
  let transfer = Transfer {
    id,
    from: body.from,
    to: body.to,
    qty: body.qty,
  };
  let product = store
    .transfer_stock(&transfer)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(product))
}
