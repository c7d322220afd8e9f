//! Income analysis: per-driver income and the Pareto check.

use std::collections::BTreeMap;

use crate::types::{Driver, TaxiPark};

/// Shares used by [`check_pareto_principle_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParetoThresholds {
    /// Fraction of the driver roster counted as "top" drivers (truncated to a whole number).
    pub top_drivers_share: f64,
    /// Fraction of total income the top drivers must reach.
    pub income_share: f64,
}

impl Default for ParetoThresholds {
    fn default() -> Self {
        Self {
            top_drivers_share: 0.2,
            income_share: 0.8,
        }
    }
}

/// Sum of trip costs per driver.
///
/// Drivers without trips are absent. Drivers missing from the roster are still included since
/// grouping follows the trips.
pub fn income_per_driver(park: &TaxiPark) -> BTreeMap<Driver, f64> {
    let mut out: BTreeMap<Driver, f64> = BTreeMap::new();
    for trip in &park.trips {
        *out.entry(trip.driver.clone()).or_insert(0.0) += trip.cost;
    }
    out
}

/// Whether 20% of the drivers earn at least 80% of the income.
///
/// Always `false` when there are no trips.
pub fn check_pareto_principle(park: &TaxiPark) -> bool {
    check_pareto_principle_with(park, &ParetoThresholds::default())
}

/// [`check_pareto_principle`] with custom shares.
///
/// The number of top drivers is `floor(top_drivers_share * roster size)`. With fewer than one
/// top driver the top income is zero, so the check only passes for a non-positive total.
pub fn check_pareto_principle_with(park: &TaxiPark, thresholds: &ParetoThresholds) -> bool {
    if park.trips.is_empty() {
        return false;
    }

    let total_income: f64 = park.trips.iter().map(|t| t.cost).sum();

    let mut incomes: Vec<f64> = income_per_driver(park).into_values().collect();
    incomes.sort_by(|a, b| b.total_cmp(a));

    let n_top_drivers = (park.driver_count() as f64 * thresholds.top_drivers_share) as usize;
    let top_income: f64 = incomes.iter().take(n_top_drivers).sum();

    let holds = top_income >= total_income * thresholds.income_share;
    tracing::debug!(
        total_income,
        top_income,
        n_top_drivers,
        holds,
        "checked pareto principle"
    );
    holds
}
