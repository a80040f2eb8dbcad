//! Synthetic stock/demand time series.
//!
//! The series is not a historical record. Each point is the current aggregate
//! stock and demand scaled by a fixed weekly ripple, so the same totals always
//! produce the same curve.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, product::Product};

/// Range used when a token cannot be interpreted.
pub const DEFAULT_RANGE_DAYS: u64 = 7;

/// Aggregate stock and demand for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiPoint {
  /// Serialised as `YYYY-MM-DD`.
  pub date:   NaiveDate,
  pub stock:  u64,
  pub demand: u64,
}

// ─── Range tokens ────────────────────────────────────────────────────────────

/// Number of trailing days selected by a range token such as `7d` or `1m`.
///
/// Unknown tokens fall back to their leading integer when it is positive, and
/// to [`DEFAULT_RANGE_DAYS`] otherwise.
pub fn parse_range(range: &str) -> u64 {
  match range.to_lowercase().as_str() {
    "7d" => 7,
    "14d" => 14,
    "30d" | "1m" => 30,
    "90d" | "3m" => 90,
    other => match leading_integer(other) {
      Some(n) if n > 0 => n.unsigned_abs(),
      _ => DEFAULT_RANGE_DAYS,
    },
  }
}

/// The integer prefix of `s` after leading whitespace and an optional sign.
fn leading_integer(s: &str) -> Option<i64> {
  let s = s.trim_start();
  let (negative, digits) = match s.as_bytes().first() {
    Some(b'-') => (true, &s[1..]),
    Some(b'+') => (false, &s[1..]),
    _ => (false, s),
  };
  let end = digits
    .find(|c: char| !c.is_ascii_digit())
    .unwrap_or(digits.len());
  if end == 0 {
    return None;
  }
  let magnitude = digits[..end].bytes().fold(0i64, |acc, d| {
    acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
  });
  Some(if negative { -magnitude } else { magnitude })
}

// ─── Synthesis ───────────────────────────────────────────────────────────────

fn ripple(base: u64, phase: u64) -> u64 {
  let factor = 0.9 + ((phase % 7) as i64 - 3) as f64 * 0.02;
  (base as f64 * factor).round().max(0.0) as u64
}

/// `days` points ending at `today`, oldest first.
///
/// Fails when the first day would fall before [`NaiveDate::MIN`].
pub fn synthesize(
  rows: &[Product],
  days: u64,
  today: NaiveDate,
) -> Result<Vec<KpiPoint>> {
  let Some(span) = days.checked_sub(1) else {
    return Ok(Vec::new());
  };
  let first = today
    .checked_sub_days(Days::new(span))
    .ok_or(Error::RangeOutOfCalendar(days))?;

  let base_stock: u64 = rows.iter().map(|p| u64::from(p.stock)).sum();
  let base_demand: u64 = rows.iter().map(|p| u64::from(p.demand)).sum();

  Ok(
    first
      .iter_days()
      .zip((0..days).rev())
      .map(|(date, i)| KpiPoint {
        date,
        stock: ripple(base_stock, i),
        demand: ripple(base_demand, i + 3),
      })
      .collect(),
  )
}

/// Parse `range` and synthesise the matching series.
pub fn kpis(
  rows: &[Product],
  range: &str,
  today: NaiveDate,
) -> Result<Vec<KpiPoint>> {
  synthesize(rows, parse_range(range), today)
}
