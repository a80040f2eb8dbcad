//! Error types for `stockroom-core`.

use serde::Serialize;
use strum::{Display, IntoStaticStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("demand must be a non-negative integer")]
  InvalidDemand(i64),

  #[error("qty must be a positive integer")]
  InvalidQuantity(i64),

  #[error("product with id {0} not found")]
  ProductNotFound(String),

  #[error("product {id} is not located in warehouse {from} (current: {current})")]
  WrongWarehouse {
    id:      String,
    from:    String,
    /// Warehouse of the first row carrying `id`, in store order.
    current: String,
  },

  #[error(
    "insufficient stock in {warehouse}: requested {requested}, available \
     {available}"
  )]
  InsufficientStock {
    warehouse: String,
    requested: i64,
    available: u32,
  },

  #[error("stock of product {id} in warehouse {warehouse} would overflow")]
  StockOverflow { id: String, warehouse: String },

  #[error("duplicate product row: {id} in warehouse {warehouse}")]
  DuplicateProductRow { id: String, warehouse: String },

  #[error("duplicate warehouse code: {0}")]
  DuplicateWarehouse(String),

  #[error("a range of {0} days starts before the earliest representable date")]
  RangeOutOfCalendar(u64),
}

/// The three families of failure a caller has to tell apart.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
  /// Malformed input.
  Validation,
  /// The referenced product id does not exist anywhere.
  NotFound,
  /// The product exists but the request contradicts its current state.
  StateConflict,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::InvalidDemand(_)
      | Self::InvalidQuantity(_)
      | Self::DuplicateProductRow { .. }
      | Self::DuplicateWarehouse(_)
      | Self::RangeOutOfCalendar(_) => ErrorKind::Validation,
      Self::ProductNotFound(_) => ErrorKind::NotFound,
      Self::WrongWarehouse { .. }
      | Self::InsufficientStock { .. }
      | Self::StockOverflow { .. } => ErrorKind::StateConflict,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
