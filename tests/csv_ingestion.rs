use taxi_park::ingestion::csv::{load_csv_from_str, load_trips_csv_from_reader};
use taxi_park::queries::{check_pareto_principle, find_fake_drivers, find_smart_passengers};
use taxi_park::types::{Driver, Passenger};

#[test]
fn load_csv_happy_path() {
    let park = load_csv_from_str(include_str!("fixtures/trips.csv")).unwrap();

    assert_eq!(park.trip_count(), 5);
    assert_eq!(park.driver_count(), 3);
    assert_eq!(park.passenger_count(), 3);
    assert_eq!(park.trips[0].driver, Driver::new("D-0"));
    assert_eq!(park.trips[0].duration, 5);
    assert_eq!(park.trips[0].cost, 300.0);
    assert_eq!(park.trips[0].discount, Some(0.1));
    assert_eq!(park.trips[2].discount, None);
}

#[test]
fn csv_rosters_come_from_trips() {
    let park = load_csv_from_str(include_str!("fixtures/trips.csv")).unwrap();

    // Every rostered driver has a trip, and three drivers give no top-20% driver.
    assert!(find_fake_drivers(&park).is_empty());
    assert!(!check_pareto_principle(&park));
    assert!(find_smart_passengers(&park).contains(&Passenger::new("P-1")));
}

#[test]
fn load_csv_allows_reordered_columns() {
    let input = "cost,discount,duration,passengers,driver\n12.5,,30,P-0,D-7\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let trips = load_trips_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].driver, Driver::new("D-7"));
    assert_eq!(trips[0].duration, 30);
    assert_eq!(trips[0].cost, 12.5);
}

#[test]
fn load_csv_errors_on_missing_required_column() {
    let err = load_csv_from_str("driver,passengers,cost\nD-0,P-0,1.0\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'duration'"));
}

#[test]
fn load_csv_errors_on_type_parse() {
    let err = load_csv_from_str("driver,passengers,duration,cost\nD-0,P-0,-5,1.0\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("row 2"));
    assert!(msg.contains("column 'duration'"));
}

#[test]
fn load_csv_errors_on_negative_cost() {
    let err = load_csv_from_str("driver,passengers,duration,cost\nD-0,P-0,5,1.0\nD-0,P-0,5,-1.0\n")
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("invalid trip at row 3"));
    assert!(msg.contains("cost"));
}

#[test]
fn load_csv_errors_on_empty_input() {
    let err = load_csv_from_str("  \n").unwrap_err();
    assert!(err.to_string().contains("csv input is empty"));
}
