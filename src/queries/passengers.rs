//! Passenger-centric queries over a [`crate::types::TaxiPark`].
//!
//! All of them are built on one private helper that counts, for every rostered passenger, the
//! trips they took that match a predicate.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Driver, Passenger, TaxiPark, Trip};

/// Passengers with at least `min_trips` trips.
///
/// `min_trips == 0` returns the whole passenger roster, including passengers with no trips.
pub fn find_faithful_passengers(park: &TaxiPark, min_trips: usize) -> BTreeSet<Passenger> {
    let out: BTreeSet<Passenger> = count_trips_per_passenger(park, min_trips, |_| true)
        .into_keys()
        .cloned()
        .collect();

    tracing::debug!(min_trips, faithful = out.len(), "found faithful passengers");
    out
}

/// Passengers taken by `driver` more than once.
pub fn find_frequent_passengers(park: &TaxiPark, driver: &Driver) -> BTreeSet<Passenger> {
    let out: BTreeSet<Passenger> = count_trips_per_passenger(park, 2, |t| t.driver == *driver)
        .into_keys()
        .cloned()
        .collect();

    tracing::debug!(driver = %driver, frequent = out.len(), "found frequent passengers");
    out
}

/// Passengers who had a discount on the majority of their trips.
///
/// A passenger qualifies when their discounted trips strictly outnumber their full-price ones.
pub fn find_smart_passengers(park: &TaxiPark) -> BTreeSet<Passenger> {
    let with_discount = count_trips_per_passenger(park, 0, Trip::has_discount);
    let without_discount = count_trips_per_passenger(park, 0, |t| !t.has_discount());

    let out: BTreeSet<Passenger> = with_discount
        .into_iter()
        .filter(|(p, n)| without_discount.get(p).copied().unwrap_or(0) < *n)
        .map(|(p, _)| p.clone())
        .collect();

    tracing::debug!(smart = out.len(), "found smart passengers");
    out
}

/// For every passenger in the roster, count trips containing them for which `predicate` holds.
///
/// Entries with fewer than `min_trips` trips are dropped; zero counts are kept when
/// `min_trips == 0`.
fn count_trips_per_passenger<F>(
    park: &TaxiPark,
    min_trips: usize,
    predicate: F,
) -> BTreeMap<&Passenger, usize>
where
    F: Fn(&Trip) -> bool,
{
    park.all_passengers
        .iter()
        .map(|p| {
            let n = park
                .trips
                .iter()
                .filter(|t| t.passengers.contains(p) && predicate(*t))
                .count();
            (p, n)
        })
        .filter(|(_, n)| *n >= min_trips)
        .collect()
}
