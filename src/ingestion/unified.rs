//! Unified loading entrypoint.
//!
//! Most callers should use [`load_from_str`] (or [`load_from_reader`]), which builds a
//! [`crate::types::TaxiPark`] from in-memory text in the format chosen by [`LoadOptions`].
//!
//! - If [`LoadOptions::strict_references`] is set, trips referencing drivers or passengers
//!   outside the rosters are rejected.
//! - If a [`super::observability::LoadObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use crate::error::{TaxiParkError, TaxiParkResult};
use crate::types::TaxiPark;

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};
use super::{csv, json};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadFormat {
    /// A JSON document with `drivers`, `passengers` and `trips`.
    #[default]
    Json,
    /// One trip per CSV row; rosters are derived from the trips.
    Csv,
}

impl LoadFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Options controlling unified loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Input format.
    pub format: LoadFormat,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
    /// Reject trips whose driver or passengers are missing from the rosters.
    pub strict_references: bool,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .field("strict_references", &self.strict_references)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: LoadFormat::default(),
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
            strict_references: false,
        }
    }
}

/// Load a [`TaxiPark`] from in-memory text.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with roster and trip counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```rust
/// use taxi_park::ingestion::{load_from_str, LoadFormat, LoadOptions};
///
/// # fn main() -> Result<(), taxi_park::TaxiParkError> {
/// let opts = LoadOptions {
///     format: LoadFormat::Csv,
///     ..Default::default()
/// };
/// let park = load_from_str("driver,passengers,duration,cost\nD-0,P-0;P-1,12,20.0\n", &opts)?;
/// assert_eq!(park.trip_count(), 1);
/// assert_eq!(park.passenger_count(), 2);
/// # Ok(())
/// # }
/// ```
pub fn load_from_str(input: &str, options: &LoadOptions) -> TaxiParkResult<TaxiPark> {
    let ctx = LoadContext {
        format: options.format,
        input_bytes: input.len(),
    };

    let result = match options.format {
        LoadFormat::Json => json::load_json_from_str(input),
        LoadFormat::Csv => csv::load_csv_from_str(input),
    }
    .and_then(|park| {
        if options.strict_references {
            check_references(&park)?;
        }
        Ok(park)
    });

    report(options, &ctx, result)
}

/// Read all of `reader` and load it with [`load_from_str`].
///
/// Reader failures are reported as [`LoadSeverity::Critical`].
pub fn load_from_reader<R: Read>(mut reader: R, options: &LoadOptions) -> TaxiParkResult<TaxiPark> {
    let mut text = String::new();
    if let Err(e) = reader.read_to_string(&mut text) {
        let ctx = LoadContext {
            format: options.format,
            input_bytes: 0,
        };
        return report(options, &ctx, Err(e.into()));
    }
    load_from_str(&text, options)
}

fn report(
    options: &LoadOptions,
    ctx: &LoadContext,
    result: TaxiParkResult<TaxiPark>,
) -> TaxiParkResult<TaxiPark> {
    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(park) => obs.on_success(
                ctx,
                LoadStats {
                    drivers: park.driver_count(),
                    passengers: park.passenger_count(),
                    trips: park.trip_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(ctx, sev, e);
                }
            }
        }
    }
    result
}

fn check_references(park: &TaxiPark) -> TaxiParkResult<()> {
    if let Some(driver) = park.unknown_drivers().into_iter().next() {
        return Err(TaxiParkError::UnknownReference {
            kind: "driver",
            id: driver.to_string(),
        });
    }
    if let Some(passenger) = park.unknown_passengers().into_iter().next() {
        return Err(TaxiParkError::UnknownReference {
            kind: "passenger",
            id: passenger.to_string(),
        });
    }
    Ok(())
}

fn severity_for_error(e: &TaxiParkError) -> LoadSeverity {
    match e {
        TaxiParkError::Io(_) => LoadSeverity::Critical,
        TaxiParkError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        TaxiParkError::Json(err) if err.is_io() => LoadSeverity::Critical,
        TaxiParkError::Json(_)
        | TaxiParkError::SchemaMismatch { .. }
        | TaxiParkError::ParseError { .. }
        | TaxiParkError::InvalidTrip { .. }
        | TaxiParkError::UnknownReference { .. } => LoadSeverity::Error,
    }
}
