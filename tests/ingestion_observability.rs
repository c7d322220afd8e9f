use std::io::{self, Read};
use std::sync::{Arc, Mutex};

use taxi_park::TaxiParkError;
use taxi_park::ingestion::{
    load_from_reader, load_from_str, CompositeObserver, LoadContext, LoadFormat, LoadObserver,
    LoadOptions, LoadSeverity, LoadStats, TracingObserver,
};

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<LoadStats>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &TaxiParkError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &TaxiParkError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

#[test]
fn observer_receives_stats_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let park = load_from_str(include_str!("fixtures/park.json"), &opts).unwrap();
    assert_eq!(park.trip_count(), 5);

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![LoadStats {
            drivers: 5,
            passengers: 4,
            trips: 5
        }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        format: LoadFormat::Csv,
        observer: Some(obs.clone()),
        alert_at_or_above: LoadSeverity::Critical,
        ..Default::default()
    };

    let err = load_from_reader(FailingReader, &opts).unwrap_err();
    assert!(matches!(err, TaxiParkError::Io(_)));

    assert_eq!(*obs.failures.lock().unwrap(), vec![LoadSeverity::Critical]);
    assert_eq!(*obs.alerts.lock().unwrap(), vec![LoadSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        format: LoadFormat::Csv,
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let _ = load_from_str("driver,cost\nD-0,1.0\n", &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn strict_references_reject_unknown_drivers() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: LoadSeverity::Error,
        strict_references: true,
        ..Default::default()
    };
    let input = r#"{"drivers": ["D-0"], "passengers": ["P-0"],
        "trips": [{"driver": "D-9", "passengers": ["P-0"], "duration": 3, "cost": 1.0}]}"#;

    let err = load_from_str(input, &opts).unwrap_err();
    assert_eq!(err.to_string(), "trip references unknown driver 'D-9'");
    assert_eq!(*obs.alerts.lock().unwrap(), vec![LoadSeverity::Error]);

    // Lenient by default.
    let park = load_from_str(input, &LoadOptions::default()).unwrap();
    assert_eq!(park.unknown_drivers().len(), 1);
}

#[test]
fn strict_references_reject_unknown_passengers() {
    let opts = LoadOptions {
        strict_references: true,
        ..Default::default()
    };
    let input = r#"{"drivers": ["D-0"], "passengers": ["P-0"],
        "trips": [{"driver": "D-0", "passengers": ["P-0", "P-5"], "duration": 3, "cost": 1.0}]}"#;

    let err = load_from_str(input, &opts).unwrap_err();
    assert!(matches!(
        err,
        TaxiParkError::UnknownReference { kind: "passenger", ref id } if id == "P-5"
    ));
}

#[test]
fn composite_observer_fans_out() {
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn LoadObserver>> =
        vec![a.clone(), b.clone(), Arc::new(TracingObserver)];
    let composite = CompositeObserver::new(observers);
    let opts = LoadOptions {
        observer: Some(Arc::new(composite)),
        ..Default::default()
    };

    let _ = load_from_str("{}", &opts).unwrap();
    let _ = load_from_str("", &opts).unwrap_err();

    for obs in [&a, &b] {
        assert_eq!(obs.successes.lock().unwrap().len(), 1);
        assert_eq!(*obs.failures.lock().unwrap(), vec![LoadSeverity::Error]);
    }
}
