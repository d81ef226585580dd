//! Tests for `TrendChart`.

use super::*;
use crate::layout::test_fixtures::sample_chart;

fn render() -> String {
    TrendChart::new(&sample_chart()).render()
}

#[test]
fn renders_standalone_document() {
    let svg = render();
    assert!(svg.starts_with("<svg width=\"800\" height=\"400\""));
    assert!(svg.contains("<title>Sickness &amp; absence</title>"));
    assert!(svg.contains(r#"<rect width="100%" height="100%" fill="white"/>"#));
}

#[test]
fn title_is_placed_top_left() {
    let svg = render();
    assert!(svg.contains(r#"<text x="40" y="20" text-anchor="start""#));
    assert!(svg.contains(">Sickness &amp; absence</text>"));
}

#[test]
fn period_and_year_labels_are_drawn() {
    let svg = render();
    for label in [">Q1<", ">Q2<", ">Q3<", ">2024<"] {
        assert!(svg.contains(label), "missing {label}");
    }
    assert_eq!(svg.matches(">2024<").count(), 1);
}

#[test]
fn target_line_is_dotted_green() {
    let svg = render();
    let line = svg
        .lines()
        .find(|line| line.contains(r#"stroke="green""#))
        .unwrap();
    assert!(line.contains("stroke-dasharray"));
}

#[test]
fn trend_line_is_smoothed() {
    let svg = render();
    let path = svg.lines().find(|line| line.contains("<path")).unwrap();
    assert!(path.contains(" C"));
    assert!(path.contains(r##"stroke="#2E74B5""##));
    assert!(path.contains(r#"stroke-width="3""#));
}

#[test]
fn latest_value_is_marked_and_labelled() {
    let svg = render();
    assert!(svg.contains(r#"r="5.5""#));
    assert!(svg.contains("<title>15</title>"));
    assert!(svg.contains(">15</text>"));
}

#[test]
fn five_y_tick_labels() {
    let svg = render();
    let y_labels = svg
        .lines()
        .filter(|line| line.contains(r#"text-anchor="end""#))
        .count();
    assert_eq!(y_labels, 5);
}

#[test]
fn threshold_lines_drawn_before_trend() {
    let svg = render();
    let threshold = svg.find(r#"stroke="green""#).unwrap();
    let trend = svg.find("<path").unwrap();
    let marker = svg.find("<circle").unwrap();
    assert!(threshold < trend);
    assert!(trend < marker);
}
