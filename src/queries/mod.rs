//! Read-only queries over a [`crate::types::TaxiPark`].
//!
//! Every function takes the dataset by shared reference and returns a freshly built result; none
//! of them depend on each other or on any state outside their arguments.
//!
//! - [`find_fake_drivers()`]: drivers who performed no trips
//! - [`find_faithful_passengers()`]: passengers with at least `n` trips
//! - [`find_frequent_passengers()`]: passengers taken by one driver more than once
//! - [`find_smart_passengers()`]: passengers discounted on most of their trips
//! - [`find_the_most_frequent_trip_duration_period()`]: the busiest 10-minute duration period
//! - [`check_pareto_principle()`]: do 20% of drivers earn 80% of the income?
//!
//! ## Example
//!
//! ```rust
//! use taxi_park::queries::{find_fake_drivers, find_the_most_frequent_trip_duration_period};
//! use taxi_park::types::{Driver, Passenger, TaxiPark, Trip};
//!
//! let park = TaxiPark::new(
//!     vec![Driver::new("D-0"), Driver::new("D-1")],
//!     vec![Passenger::new("P-0")],
//!     vec![Trip::new(Driver::new("D-0"), vec![Passenger::new("P-0")], 12, 20.0)],
//! );
//!
//! let fake = find_fake_drivers(&park);
//! assert!(fake.contains(&Driver::new("D-1")));
//! assert_eq!(find_the_most_frequent_trip_duration_period(&park), Some(10..=19));
//! ```

pub mod drivers;
pub mod durations;
pub mod income;
pub mod passengers;

pub use drivers::find_fake_drivers;
pub use durations::{find_the_most_frequent_trip_duration_period, trip_counts_per_duration_period};
pub use income::{
    check_pareto_principle, check_pareto_principle_with, income_per_driver, ParetoThresholds,
};
pub use passengers::{find_faithful_passengers, find_frequent_passengers, find_smart_passengers};
