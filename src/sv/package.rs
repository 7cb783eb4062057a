//! Static investment tiers. Not persisted.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
  pub id: &'static str,
  pub name: &'static str,
  pub min_amount: f64,
  /// `None` for the open-ended top tier
  pub max_amount: Option<f64>,
  /// Monthly return, percent
  pub return_percent: f64,
  pub duration_months: u32,
}

pub const PACKAGES: [Package; 4] = [
  Package {
    id: "starter",
    name: "Starter",
    min_amount: 100.0,
    max_amount: Some(999.0),
    return_percent: 5.0,
    duration_months: 12,
  },
  Package {
    id: "silver",
    name: "Silver",
    min_amount: 1_000.0,
    max_amount: Some(4_999.0),
    return_percent: 7.0,
    duration_months: 12,
  },
  Package {
    id: "gold",
    name: "Gold",
    min_amount: 5_000.0,
    max_amount: Some(9_999.0),
    return_percent: 9.0,
    duration_months: 12,
  },
  Package {
    id: "platinum",
    name: "Platinum",
    min_amount: 10_000.0,
    max_amount: None,
    return_percent: 12.0,
    duration_months: 12,
  },
];

pub fn all() -> &'static [Package] {
  &PACKAGES
}
