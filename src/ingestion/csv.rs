//! CSV ingestion implementation.
//!
//! One row per trip. Rosters are derived from the trips (see [`TaxiPark::from_trips`]), so a CSV
//! source cannot express drivers or passengers without trips.

use std::io::Read;

use crate::error::{TaxiParkError, TaxiParkResult};
use crate::types::{Driver, Passenger, TaxiPark, Trip};

const DRIVER: &str = "driver";
const PASSENGERS: &str = "passengers";
const DURATION: &str = "duration";
const COST: &str = "cost";
const DISCOUNT: &str = "discount";

/// Separator between passenger ids inside the `passengers` cell.
pub const PASSENGER_SEPARATOR: char = ';';

/// Load a [`TaxiPark`] from CSV text.
pub fn load_csv_from_str(input: &str) -> TaxiParkResult<TaxiPark> {
    if input.trim().is_empty() {
        return Err(TaxiParkError::SchemaMismatch {
            message: "csv input is empty".to_string(),
        });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());
    let trips = load_trips_csv_from_reader(&mut rdr)?;
    Ok(TaxiPark::from_trips(trips))
}

/// Read trips from an existing CSV reader.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain `driver`, `passengers`, `duration` and `cost` (order can differ).
/// - `discount` is optional; an empty cell means no discount.
/// - Passenger ids are separated by `;` and the cell may be empty.
pub fn load_trips_csv_from_reader<R: Read>(rdr: &mut csv::Reader<R>) -> TaxiParkResult<Vec<Trip>> {
    let headers = rdr.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    let mut required = Vec::with_capacity(4);
    for name in [DRIVER, PASSENGERS, DURATION, COST] {
        match position(name) {
            Some(idx) => required.push(idx),
            None => {
                return Err(TaxiParkError::SchemaMismatch {
                    message: format!(
                        "missing required column '{name}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>()
                    ),
                });
            }
        }
    }
    let (driver_idx, passengers_idx, duration_idx, cost_idx) =
        (required[0], required[1], required[2], required[3]);
    let discount_idx = position(DISCOUNT);

    let mut trips = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based, and the header is row 1.
        let row = row_idx0 + 2;
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let driver = cell(driver_idx);
        if driver.is_empty() {
            return Err(parse_error(row, DRIVER, driver, "expected driver id".to_string()));
        }

        let passengers = cell(passengers_idx)
            .split(PASSENGER_SEPARATOR)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Passenger::new);

        let raw_duration = cell(duration_idx);
        let duration = raw_duration
            .parse::<u32>()
            .map_err(|e| parse_error(row, DURATION, raw_duration, e.to_string()))?;

        let raw_cost = cell(cost_idx);
        let cost = raw_cost
            .parse::<f64>()
            .map_err(|e| parse_error(row, COST, raw_cost, e.to_string()))?;

        let mut trip = Trip::new(Driver::new(driver), passengers, duration, cost);
        if let Some(idx) = discount_idx {
            let raw = cell(idx);
            if !raw.is_empty() {
                let discount = raw
                    .parse::<f64>()
                    .map_err(|e| parse_error(row, DISCOUNT, raw, e.to_string()))?;
                trip = trip.with_discount(discount);
            }
        }

        trip.validate()
            .map_err(|message| TaxiParkError::InvalidTrip { row, message })?;
        trips.push(trip);
    }

    Ok(trips)
}

fn parse_error(row: usize, column: &str, raw: &str, message: String) -> TaxiParkError {
    TaxiParkError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    }
}
