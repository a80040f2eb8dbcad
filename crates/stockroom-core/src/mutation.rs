//! Demand updates and stock transfers over an ordered list of product rows.
//!
//! Both operations validate everything before touching a row: on error the
//! slice is exactly as it was. Callers sharing the rows between threads must
//! hold one exclusive lock across the whole call.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, product::Product};

/// Move `qty` units of product `id` from warehouse `from` to warehouse `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
  pub id:   String,
  pub from: String,
  pub to:   String,
  pub qty:  i64,
}

/// Set the demand of the first row carrying `id`.
///
/// When `id` has rows in several warehouses only the first one in store order
/// is updated.
pub fn update_demand(
  rows: &mut [Product],
  id: &str,
  demand: i64,
) -> Result<Product> {
  let demand = u32::try_from(demand).map_err(|_| Error::InvalidDemand(demand))?;
  let row = rows
    .iter_mut()
    .find(|p| p.id == id)
    .ok_or_else(|| Error::ProductNotFound(id.to_owned()))?;
  row.demand = demand;
  Ok(row.clone())
}

/// Move stock between two warehouse rows of the same product and return the
/// destination row.
///
/// A destination row is created (with zero demand) when the product has no
/// row in `to` yet. Demand never moves.
pub fn transfer_stock(
  rows: &mut Vec<Product>,
  transfer: &Transfer,
) -> Result<Product> {
  let Transfer { id, from, to, qty } = transfer;
  if *qty <= 0 {
    return Err(Error::InvalidQuantity(*qty));
  }

  let src = position(rows, id, from).ok_or_else(|| {
    match rows.iter().find(|p| p.id == *id) {
      Some(other) => Error::WrongWarehouse {
        id:      id.clone(),
        from:    from.clone(),
        current: other.warehouse.clone(),
      },
      None => Error::ProductNotFound(id.clone()),
    }
  })?;

  let available = rows[src].stock;
  let qty = match u32::try_from(*qty) {
    Ok(q) if q <= available => q,
    _ => {
      return Err(Error::InsufficientStock {
        warehouse: from.clone(),
        requested: *qty,
        available,
      });
    }
  };

  match position(rows, id, to) {
    // Same warehouse on both ends: nothing moves.
    Some(dest) if dest == src => Ok(rows[dest].clone()),
    Some(dest) => {
      let grown = rows[dest].stock.checked_add(qty).ok_or_else(|| {
        Error::StockOverflow {
          id:        id.clone(),
          warehouse: to.clone(),
        }
      })?;
      rows[src].stock -= qty;
      rows[dest].stock = grown;
      Ok(rows[dest].clone())
    }
    None => {
      rows[src].stock -= qty;
      let source = &rows[src];
      let created = Product {
        id:        id.clone(),
        name:      source.name.clone(),
        sku:       source.sku.clone(),
        warehouse: to.clone(),
        stock:     qty,
        demand:    0,
      };
      rows.push(created.clone());
      Ok(created)
    }
  }
}

fn position(rows: &[Product], id: &str, warehouse: &str) -> Option<usize> {
  rows.iter().position(|p| p.id == id && p.warehouse == warehouse)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ErrorKind;

  fn row(id: &str, warehouse: &str, stock: u32, demand: u32) -> Product {
    Product {
      id: id.into(),
      name: format!("Item {id}"),
      sku: format!("SKU-{id}"),
      warehouse: warehouse.into(),
      stock,
      demand,
    }
  }

  fn transfer(id: &str, from: &str, to: &str, qty: i64) -> Transfer {
    Transfer {
      id:   id.into(),
      from: from.into(),
      to:   to.into(),
      qty,
    }
  }

  // ── update_demand ─────────────────────────────────────────────────────────

  #[test]
  fn update_demand_sets_value_in_place() {
    let mut rows = vec![row("P1", "A", 50, 30), row("P2", "A", 5, 5)];
    let updated = update_demand(&mut rows, "P2", 12).unwrap();
    assert_eq!(updated.demand, 12);
    assert_eq!(rows[1].demand, 12);
    assert_eq!(rows[0].demand, 30);
  }

  #[test]
  fn update_demand_touches_only_first_matching_row() {
    let mut rows = vec![row("P1", "A", 50, 30), row("P1", "B", 20, 7)];
    let updated = update_demand(&mut rows, "P1", 0).unwrap();
    assert_eq!(updated.warehouse, "A");
    assert_eq!(rows[0].demand, 0);
    assert_eq!(rows[1].demand, 7);
  }

  #[test]
  fn update_demand_rejects_negative_and_oversized() {
    let mut rows = vec![row("P1", "A", 50, 30)];
    let err = update_demand(&mut rows, "P1", -1).unwrap_err();
    assert_eq!(err, Error::InvalidDemand(-1));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "demand must be a non-negative integer");

    let too_big = i64::from(u32::MAX) + 1;
    assert_eq!(
      update_demand(&mut rows, "P1", too_big).unwrap_err().kind(),
      ErrorKind::Validation
    );
    assert_eq!(rows[0].demand, 30);
  }

  #[test]
  fn update_demand_unknown_id() {
    let mut rows = vec![row("P1", "A", 50, 30)];
    let err = update_demand(&mut rows, "nope", 5).unwrap_err();
    assert_eq!(err, Error::ProductNotFound("nope".into()));
    assert_eq!(err.kind(), ErrorKind::NotFound);
  }

  // ── transfer_stock ────────────────────────────────────────────────────────

  #[test]
  fn transfer_creates_destination_row() {
    let mut rows = vec![row("P1", "A", 50, 30)];
    let t = transfer("P1", "A", "B", 20);
    let dest = transfer_stock(&mut rows, &t).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].stock, 30);
    assert_eq!(rows[0].demand, 30);
    assert_eq!(dest, rows[1]);
    assert_eq!(dest.warehouse, "B");
    assert_eq!(dest.stock, 20);
    assert_eq!(dest.demand, 0);
    assert_eq!(dest.name, "Item P1");
    assert_eq!(dest.sku, "SKU-P1");
  }

  #[test]
  fn repeated_transfer_accumulates() {
    let mut rows = vec![row("P1", "A", 50, 30)];
    transfer_stock(&mut rows, &transfer("P1", "A", "B", 20)).unwrap();
    let t = transfer("P1", "A", "B", 20);
    let dest = transfer_stock(&mut rows, &t).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].stock, 10);
    assert_eq!(dest.stock, 40);
    assert_eq!(rows[1].stock, 40);
  }

  #[test]
  fn transfer_can_drain_source_to_zero() {
    let mut rows = vec![row("P1", "A", 10, 3), row("P1", "B", 1, 9)];
    let t = transfer("P1", "A", "B", 10);
    let dest = transfer_stock(&mut rows, &t).unwrap();
    assert_eq!(rows[0].stock, 0);
    assert_eq!(dest.stock, 11);
    assert_eq!(dest.demand, 9);
    assert_eq!(rows.len(), 2);
  }

  #[test]
  fn transfer_insufficient_stock_mutates_nothing() {
    let mut rows = vec![row("P1", "A", 10, 30), row("P1", "B", 40, 0)];
    let before = rows.clone();
    let t = transfer("P1", "A", "B", 999);
    let err = transfer_stock(&mut rows, &t).unwrap_err();
    assert_eq!(err, Error::InsufficientStock {
      warehouse: "A".into(),
      requested: 999,
      available: 10,
    });
    assert_eq!(err.kind(), ErrorKind::StateConflict);
    assert_eq!(rows, before);
  }

  #[test]
  fn transfer_from_wrong_warehouse_names_actual_one() {
    let mut rows = vec![row("P1", "A", 10, 30)];
    let t = transfer("P1", "C", "B", 5);
    let err = transfer_stock(&mut rows, &t).unwrap_err();
    assert_eq!(err, Error::WrongWarehouse {
      id:      "P1".into(),
      from:    "C".into(),
      current: "A".into(),
    });
    assert_eq!(err.kind(), ErrorKind::StateConflict);
    assert_eq!(rows.len(), 1);
  }

  #[test]
  fn transfer_unknown_product() {
    let mut rows = vec![row("P1", "A", 10, 30)];
    let t = transfer("P9", "A", "B", 5);
    let err = transfer_stock(&mut rows, &t).unwrap_err();
    assert_eq!(err, Error::ProductNotFound("P9".into()));
  }

  #[test]
  fn transfer_rejects_non_positive_qty_before_lookup() {
    let mut rows = vec![row("P1", "A", 10, 30)];
    for qty in [0, -4] {
      let t = transfer("P9", "A", "B", qty);
      let err = transfer_stock(&mut rows, &t).unwrap_err();
      assert_eq!(err, Error::InvalidQuantity(qty));
      assert_eq!(err.to_string(), "qty must be a positive integer");
    }
  }

  #[test]
  fn transfer_qty_beyond_u32_is_insufficient() {
    let mut rows = vec![row("P1", "A", 10, 30)];
    let qty = i64::from(u32::MAX) + 10;
    let t = transfer("P1", "A", "B", qty);
    let err = transfer_stock(&mut rows, &t).unwrap_err();
    assert!(matches!(
      err,
      Error::InsufficientStock { requested, .. } if requested == qty
    ));
  }

  #[test]
  fn transfer_to_same_warehouse_is_a_no_op() {
    let mut rows = vec![row("P1", "A", 10, 30)];
    let dest = transfer_stock(&mut rows, &transfer("P1", "A", "A", 4)).unwrap();
    assert_eq!(dest.stock, 10);
    assert_eq!(rows, vec![row("P1", "A", 10, 30)]);
  }

  #[test]
  fn transfer_overflow_is_rejected_atomically() {
    let mut rows = vec![row("P1", "A", 10, 0), row("P1", "B", u32::MAX - 5, 0)];
    let before = rows.clone();
    let t = transfer("P1", "A", "B", 10);
    let err = transfer_stock(&mut rows, &t).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StateConflict);
    assert_eq!(rows, before);
  }
}
