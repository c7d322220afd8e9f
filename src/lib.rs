//! `taxi-park` answers a handful of questions about an in-memory taxi-park dataset, and ships a
//! small "nice string" classifier alongside.
//!
//! The dataset is a [`types::TaxiPark`]: a roster of [`types::Driver`]s, a roster of
//! [`types::Passenger`]s and a list of [`types::Trip`]s. Each query in [`queries`] is a pure
//! function over `&TaxiPark`; none of them mutate the dataset or depend on each other.
//!
//! ## Queries
//!
//! - [`queries::find_fake_drivers`]: drivers who performed no trips
//! - [`queries::find_faithful_passengers`]: passengers with at least `n` trips
//! - [`queries::find_frequent_passengers`]: passengers taken by a driver more than once
//! - [`queries::find_smart_passengers`]: passengers with a discount on most of their trips
//! - [`queries::find_the_most_frequent_trip_duration_period`]: busiest 10-minute period
//! - [`queries::check_pareto_principle`]: do 20% of drivers earn 80% of the income?
//!
//! Degenerate inputs give defined results: with no trips, every driver is fake, the duration
//! period is `None` and the Pareto check is `false`.
//!
//! ## Quick example
//!
//! ```rust
//! use taxi_park::queries::{check_pareto_principle, find_frequent_passengers};
//! use taxi_park::types::{Driver, Passenger, TaxiPark, Trip};
//!
//! let alice = Passenger::new("alice");
//! let park = TaxiPark::new(
//!     vec![Driver::new("D-0"), Driver::new("D-1")],
//!     vec![alice.clone()],
//!     vec![
//!         Trip::new(Driver::new("D-0"), vec![alice.clone()], 12, 20.0),
//!         Trip::new(Driver::new("D-0"), vec![alice.clone()], 7, 8.5).with_discount(0.2),
//!     ],
//! );
//!
//! assert!(find_frequent_passengers(&park, &Driver::new("D-0")).contains(&alice));
//! // Two drivers -> floor(0.4) = 0 top drivers, so the check cannot pass.
//! assert!(!check_pareto_principle(&park));
//! ```
//!
//! ## Loading a dataset
//!
//! ```rust
//! use taxi_park::ingestion::{load_from_str, LoadOptions};
//!
//! # fn main() -> Result<(), taxi_park::TaxiParkError> {
//! let park = load_from_str(
//!     r#"{"drivers": ["D-0"], "passengers": ["P-0"],
//!         "trips": [{"driver": "D-0", "passengers": ["P-0"], "duration": 12, "cost": 20.0}]}"#,
//!     &LoadOptions::default(),
//! )?;
//! assert_eq!(park.trip_count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Nice strings
//!
//! ```rust
//! use taxi_park::nice_string::is_nice;
//!
//! assert!(is_nice("aeiou"));
//! assert!(!is_nice("bac"));
//! ```
//!
//! ## Modules
//!
//! - [`types`]: drivers, passengers, trips and the dataset
//! - [`queries`]: the taxi-park queries
//! - [`ingestion`]: building a dataset from JSON or CSV text
//! - [`nice_string`]: the nice-string classifier
//! - [`error`]: error types used by ingestion

pub mod error;
pub mod ingestion;
pub mod nice_string;
pub mod queries;
pub mod types;

pub use error::{TaxiParkError, TaxiParkResult};
