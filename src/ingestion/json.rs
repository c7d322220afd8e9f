//! JSON ingestion implementation.
//!
//! Expected document shape:
//!
//! ```json
//! {
//!   "drivers": ["D-0", "D-1"],
//!   "passengers": ["P-0"],
//!   "trips": [
//!     {"driver": "D-0", "passengers": ["P-0"], "duration": 12, "cost": 20.0, "discount": 0.1}
//!   ]
//! }
//! ```
//!
//! `discount` may be omitted or `null`. Missing rosters default to empty.

use std::io::Read;

use crate::error::{TaxiParkError, TaxiParkResult};
use crate::types::TaxiPark;

/// Load a [`TaxiPark`] from JSON text.
pub fn load_json_from_str(input: &str) -> TaxiParkResult<TaxiPark> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TaxiParkError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    let park: TaxiPark = serde_json::from_str(trimmed)?;
    for (idx0, trip) in park.trips.iter().enumerate() {
        trip.validate()
            .map_err(|message| TaxiParkError::InvalidTrip { row: idx0 + 1, message })?;
    }
    Ok(park)
}

/// Load a [`TaxiPark`] from a caller-supplied reader producing JSON.
pub fn load_json_from_reader<R: Read>(mut reader: R) -> TaxiParkResult<TaxiPark> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_json_from_str(&text)
}
