//! JSON REST API for Stockroom.
//!
//! Exposes an axum [`Router`] backed by any
//! [`stockroom_core::store::InventoryStore`]. Auth, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", stockroom_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod kpis;
pub mod products;
pub mod warehouses;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use stockroom_core::store::InventoryStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: InventoryStore + 'static,
{
  Router::new()
    // Products
    .route("/products", get(products::list::<S>))
    .route("/products/summary", get(products::summary::<S>))
    .route("/products/{id}/demand", post(products::update_demand::<S>))
    .route("/products/{id}/transfer", post(products::transfer::<S>))
    // Reference data
    .route("/warehouses", get(warehouses::list::<S>))
    // KPIs
    .route("/kpis", get(kpis::handler::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
