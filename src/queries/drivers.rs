//! Driver-centric queries over a [`crate::types::TaxiPark`].

use std::collections::BTreeSet;

use crate::types::{Driver, TaxiPark};

/// Drivers from the roster who performed no trips at all.
///
/// With no trips this is the whole roster. Trips by drivers missing from the roster are
/// ignored.
pub fn find_fake_drivers(park: &TaxiPark) -> BTreeSet<Driver> {
    let with_trips: BTreeSet<&Driver> = park.trips.iter().map(|t| &t.driver).collect();
    let fake: BTreeSet<Driver> = park
        .all_drivers
        .iter()
        .filter(|d| !with_trips.contains(d))
        .cloned()
        .collect();

    tracing::debug!(
        drivers = park.driver_count(),
        fake = fake.len(),
        "found fake drivers"
    );
    fake
}

#[cfg(test)]
mod tests {
    use super::find_fake_drivers;
    use crate::types::{Driver, Passenger, TaxiPark, Trip};

    fn drivers(ids: &[&str]) -> Vec<Driver> {
        ids.iter().map(|id| Driver::new(*id)).collect()
    }

    #[test]
    fn no_trips_means_every_driver_is_fake() {
        let park = TaxiPark::new(drivers(&["D-0", "D-1"]), vec![], vec![]);
        assert_eq!(find_fake_drivers(&park), park.all_drivers);
    }

    #[test]
    fn drivers_with_trips_are_excluded() {
        let park = TaxiPark::new(
            drivers(&["D-0", "D-1", "D-2"]),
            vec![Passenger::new("P-0")],
            vec![
                Trip::new(Driver::new("D-0"), vec![Passenger::new("P-0")], 3, 10.0),
                Trip::new(Driver::new("D-2"), vec![], 7, 4.0),
            ],
        );
        let fake = find_fake_drivers(&park);
        assert_eq!(fake.into_iter().collect::<Vec<_>>(), drivers(&["D-1"]));
    }

    #[test]
    fn unknown_trip_drivers_are_tolerated() {
        let park = TaxiPark::new(
            drivers(&["D-0"]),
            vec![],
            vec![Trip::new(Driver::new("D-9"), vec![], 3, 10.0)],
        );
        assert_eq!(find_fake_drivers(&park), park.all_drivers);
    }
}
