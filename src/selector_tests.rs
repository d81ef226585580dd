use super::*;
use crate::model::test_fixtures::obs;
use crate::model::Status;

fn with(mut o: Observation, trend: Trend, status: Status) -> Observation {
    o.trend = trend;
    o.status = status;
    o
}

#[test]
fn flat_green_single_observation_is_excluded() {
    let table = MetricTable::new(vec![with(
        obs("M1", (2024, 3, 31), 10.0),
        Trend::Flat,
        Status::Green,
    )]);

    assert!(select(&table).is_empty());
}

#[test]
fn latest_red_with_flat_trend_is_included() {
    let table = MetricTable::new(vec![with(
        obs("M1", (2024, 3, 31), 10.0),
        Trend::Flat,
        Status::Red,
    )]);

    assert!(select(&table).contains("M1"));
}

#[test]
fn directional_trend_is_included() {
    let table = MetricTable::new(vec![
        with(obs("UP", (2024, 3, 31), 1.0), Trend::Rising, Status::Green),
        with(obs("DOWN", (2024, 3, 31), 1.0), Trend::Falling, Status::Amber),
    ]);

    let selection = select(&table);
    assert!(selection.contains("UP"));
    assert!(selection.contains("DOWN"));
}

#[test]
fn only_latest_observation_decides() {
    // Earlier rows are red and rising; the latest is flat green.
    let table = MetricTable::new(vec![
        with(obs("M1", (2024, 9, 30), 3.0), Trend::Flat, Status::Green),
        with(obs("M1", (2024, 3, 31), 1.0), Trend::Rising, Status::Red),
        with(obs("M1", (2024, 6, 30), 2.0), Trend::Falling, Status::Red),
    ]);
    assert!(select(&table).is_empty());

    // And the reverse: only the latest row is red.
    let table = MetricTable::new(vec![
        with(obs("M2", (2024, 3, 31), 1.0), Trend::Flat, Status::Green),
        with(obs("M2", (2024, 6, 30), 2.0), Trend::Flat, Status::Red),
    ]);
    assert!(select(&table).contains("M2"));
}

#[test]
fn tied_latest_dates_use_last_row_in_input_order() {
    let table = MetricTable::new(vec![
        with(obs("M1", (2024, 6, 30), 1.0), Trend::Rising, Status::Red),
        with(obs("M1", (2024, 6, 30), 2.0), Trend::Flat, Status::Green),
    ]);
    assert!(select(&table).is_empty());

    let table = MetricTable::new(vec![
        with(obs("M1", (2024, 6, 30), 2.0), Trend::Flat, Status::Green),
        with(obs("M1", (2024, 6, 30), 1.0), Trend::Rising, Status::Red),
    ]);
    assert!(select(&table).contains("M1"));
}

#[test]
fn selection_is_ordered_by_reference_and_input_order_independent() {
    let rows = vec![
        with(obs("C", (2024, 3, 31), 1.0), Trend::Rising, Status::Green),
        with(obs("A", (2024, 3, 31), 1.0), Trend::Flat, Status::Red),
        with(obs("B", (2024, 3, 31), 1.0), Trend::Flat, Status::Green),
    ];
    let mut reversed = rows.clone();
    reversed.reverse();

    let forward = select(&MetricTable::new(rows));
    let backward = select(&MetricTable::new(reversed));

    assert_eq!(forward.iter().collect::<Vec<_>>(), vec!["A", "C"]);
    assert_eq!(forward, backward);
}

#[test]
fn explain_reports_every_metric() {
    let table = MetricTable::new(vec![
        with(obs("B", (2024, 3, 31), 1.0), Trend::Flat, Status::Green),
        with(obs("A", (2024, 3, 31), 1.0), Trend::Rising, Status::Amber),
    ]);

    let entries = explain(&table);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].reference, "A");
    assert!(entries[0].selected);
    assert_eq!(entries[0].status, "Amber");
    assert_eq!(entries[1].reference, "B");
    assert!(!entries[1].selected);
    assert_eq!(entries[1].latest_date, "2024-03-31");
}
