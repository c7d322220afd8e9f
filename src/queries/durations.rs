//! Trip duration analysis.

use std::collections::BTreeMap;

use crate::types::{DurationPeriod, TaxiPark};

const PERIOD_MINUTES: u32 = 10;

/// Count trips per 10-minute duration period, keyed by the period's lower bound.
pub fn trip_counts_per_duration_period(park: &TaxiPark) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for trip in &park.trips {
        let low = trip.duration / PERIOD_MINUTES * PERIOD_MINUTES;
        *counts.entry(low).or_insert(0) += 1;
    }
    counts
}

/// The most frequent trip duration period among `0..=9`, `10..=19`, `20..=29`, ...
///
/// Returns `None` when there are no trips. If several periods tie, the lowest one is returned;
/// callers should not rely on which tied period they get.
pub fn find_the_most_frequent_trip_duration_period(park: &TaxiPark) -> Option<DurationPeriod> {
    let counts = trip_counts_per_duration_period(park);

    // BTreeMap iterates in ascending order, so keeping the first strict maximum favours the
    // lowest period on ties.
    let mut best: Option<(u32, usize)> = None;
    for (low, n) in counts {
        match best {
            Some((_, m)) if m >= n => {}
            _ => best = Some((low, n)),
        }
    }

    let (low, n) = best?;
    tracing::debug!(low, trips = n, "most frequent duration period");
    Some(low..=low.saturating_add(PERIOD_MINUTES - 1))
}
