//! Core data model for the taxi park.
//!
//! A [`TaxiPark`] is built once by the caller and handed to the query functions in
//! [`crate::queries`] by shared reference. Nothing in this crate mutates it after construction.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Opaque driver identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Driver(pub String);

impl Driver {
    /// Create a driver from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque passenger identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passenger(pub String);

impl Passenger {
    /// Create a passenger from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single ride: one driver, zero or more passengers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Driver who performed the trip.
    pub driver: Driver,
    /// Passengers riding; a set, so no duplicates.
    #[serde(default)]
    pub passengers: BTreeSet<Passenger>,
    /// Trip length in minutes.
    pub duration: u32,
    /// Fare amount.
    pub cost: f64,
    /// Discount fraction, `None` if no discount was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl Trip {
    /// Create a trip without a discount.
    pub fn new(
        driver: Driver,
        passengers: impl IntoIterator<Item = Passenger>,
        duration: u32,
        cost: f64,
    ) -> Self {
        Self {
            driver,
            passengers: passengers.into_iter().collect(),
            duration,
            cost,
            discount: None,
        }
    }

    /// Return the same trip with `discount` applied.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Whether a discount was applied to this trip.
    pub fn has_discount(&self) -> bool {
        self.discount.is_some()
    }

    /// Check that cost and discount lie in their valid domains.
    ///
    /// Cost must be finite and non-negative; a discount must be a fraction in `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), String> {
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(format!("cost must be a non-negative number, got {}", self.cost));
        }
        if let Some(d) = self.discount {
            if !(0.0..=1.0).contains(&d) {
                return Err(format!("discount must be a fraction in 0..=1, got {d}"));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.driver)?;
        for (i, p) in self.passengers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "] {} min, cost {}", self.duration, self.cost)?;
        if let Some(d) = self.discount {
            write!(f, ", discount {d}")?;
        }
        Ok(())
    }
}

/// The read-only dataset every query operates on.
///
/// Trips should only reference members of `all_drivers` / `all_passengers`, but this is not
/// enforced: queries tolerate dangling references and simply never report them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxiPark {
    /// Every known driver.
    #[serde(rename = "drivers", default)]
    pub all_drivers: BTreeSet<Driver>,
    /// Every known passenger.
    #[serde(rename = "passengers", default)]
    pub all_passengers: BTreeSet<Passenger>,
    /// Ride records.
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl TaxiPark {
    /// Create a dataset from its rosters and trips.
    pub fn new(
        drivers: impl IntoIterator<Item = Driver>,
        passengers: impl IntoIterator<Item = Passenger>,
        trips: Vec<Trip>,
    ) -> Self {
        Self {
            all_drivers: drivers.into_iter().collect(),
            all_passengers: passengers.into_iter().collect(),
            trips,
        }
    }

    /// Create a dataset whose rosters are exactly the drivers and passengers seen in `trips`.
    pub fn from_trips(trips: Vec<Trip>) -> Self {
        let all_drivers = trips.iter().map(|t| t.driver.clone()).collect();
        let all_passengers = trips
            .iter()
            .flat_map(|t| t.passengers.iter().cloned())
            .collect();
        Self {
            all_drivers,
            all_passengers,
            trips,
        }
    }

    /// Number of trips.
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// Number of drivers in the roster.
    pub fn driver_count(&self) -> usize {
        self.all_drivers.len()
    }

    /// Number of passengers in the roster.
    pub fn passenger_count(&self) -> usize {
        self.all_passengers.len()
    }

    /// Drivers referenced by trips but missing from `all_drivers`.
    pub fn unknown_drivers(&self) -> BTreeSet<&Driver> {
        self.trips
            .iter()
            .map(|t| &t.driver)
            .filter(|d| !self.all_drivers.contains(*d))
            .collect()
    }

    /// Passengers referenced by trips but missing from `all_passengers`.
    pub fn unknown_passengers(&self) -> BTreeSet<&Passenger> {
        self.trips
            .iter()
            .flat_map(|t| t.passengers.iter())
            .filter(|p| !self.all_passengers.contains(*p))
            .collect()
    }
}

impl fmt::Display for TaxiPark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let drivers: Vec<&str> = self.all_drivers.iter().map(Driver::id).collect();
        let passengers: Vec<&str> = self.all_passengers.iter().map(Passenger::id).collect();
        writeln!(f, "drivers: {}", drivers.join(", "))?;
        writeln!(f, "passengers: {}", passengers.join(", "))?;
        write!(f, "trips:")?;
        for trip in &self.trips {
            write!(f, "\n  {trip}")?;
        }
        Ok(())
    }
}

/// A 10-minute trip duration period, e.g. `10..=19`.
pub type DurationPeriod = RangeInclusive<u32>;
