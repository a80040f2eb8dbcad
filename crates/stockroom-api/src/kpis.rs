//! Handler for `GET /kpis`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use stockroom_core::{
  kpi::{self, KpiPoint},
  store::InventoryStore,
};

use crate::error::ApiError;

/// Longest series one request may ask for.
pub const MAX_RANGE_DAYS: u64 = 3650;

#[derive(Debug, Deserialize)]
pub struct KpiParams {
  /// Required range token, e.g. `7d`, `14d`, `1m`, `3m`.
  pub range: String,
}

/// `GET /kpis?range=<token>`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<KpiParams>, QueryRejection>,
) -> Result<Json<Vec<KpiPoint>>, ApiError>
where
  S: InventoryStore,
{
  let Query(params) = params?;
  let days = kpi::parse_range(&params.range);
  if days > MAX_RANGE_DAYS {
    return Err(ApiError::BadRequest(format!(
      "range of {days} days exceeds the limit of {MAX_RANGE_DAYS}"
    )));
  }
  let points = store
    .kpis(&params.range)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(points))
}
