//! Core types and pure inventory logic for Stockroom.
//!
//! This crate is deliberately free of HTTP and storage dependencies. It owns
//! the product/warehouse records, the status classifier, and the query, KPI
//! and mutation rules; the [`store::InventoryStore`] trait is the seam that
//! backends implement and the API layer consumes.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod kpi;
pub mod mutation;
pub mod product;
pub mod query;
pub mod store;

pub use error::{Error, ErrorKind, Result};
