use super::*;

fn render_error(
    use_colors: bool,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(use_colors).write_error(&mut buf, "Input", message, detail, suggestion);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    assert_eq!(
        render_error(false, "no usable rows", None, None),
        "✖ Input: no usable rows\n"
    );
}

#[test]
fn error_without_colors_full() {
    let result = render_error(
        false,
        "missing column",
        Some("Value"),
        Some("Map the header under [input.columns]"),
    );
    assert_eq!(
        result,
        "✖ Input: missing column\n  × Value\n  help: Map the header under [input.columns]\n"
    );
}

#[test]
fn error_with_colors_contains_ansi() {
    let result = render_error(true, "missing column", Some("Value"), Some("fix it"));
    assert!(result.contains(ansi::RED));
    assert!(result.contains(ansi::DIM));
    assert!(result.contains(ansi::CYAN));
    assert!(result.contains("missing column"));
}

#[test]
fn warning_without_colors() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_warning(
        &mut buf,
        "2 rows skipped",
        Some("line 4: unrecognized date"),
    );
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "⚠ Warning: 2 rows skipped\n  × line 4: unrecognized date\n"
    );
}

#[test]
fn warning_with_colors_uses_yellow() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(true).write_warning(&mut buf, "skipped", None);
    assert!(String::from_utf8(buf).unwrap().contains(ansi::YELLOW));
}

#[test]
fn never_mode_disables_colors() {
    let out = ErrorOutput::new(ColorMode::Never);
    let mut buf = Vec::new();
    out.write_warning(&mut buf, "plain", None);
    assert!(!String::from_utf8(buf).unwrap().contains('\x1b'));
}

#[test]
fn suggestions_for_input_errors() {
    let missing = MetricTrendsError::MissingColumn {
        column: "Value".to_string(),
    };
    assert!(suggestion_for(&missing).unwrap().contains("[input.columns]"));
    assert!(suggestion_for(&MetricTrendsError::NoRows).is_some());
    assert!(suggestion_for(&MetricTrendsError::Config("x".to_string())).is_none());
}
