//! Handler for `GET /warehouses`.

use std::sync::Arc;

use axum::{Json, extract::State};
use stockroom_core::{product::Warehouse, store::InventoryStore};

use crate::error::ApiError;

/// `GET /warehouses`: every warehouse, ordered by code.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Warehouse>>, ApiError>
where
  S: InventoryStore,
{
  let warehouses = store
    .list_warehouses()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(warehouses))
}
