//! Tests for the CSV metric-log reader.

use super::*;

const HEADER: &str = "Metric Reference,Metric Name,Date,Quarter,Year,Value,Units of Measure,3Q Trend,RAG Text,Red Above,Target";

fn read(body: &str) -> Result<IngestReport> {
    let text = format!("{HEADER}\n{body}");
    read_table(text.as_bytes(), &InputConfig::default())
}

#[test]
fn reads_complete_rows() {
    let report = read(
        "KPI-1,Sickness rate,2024-03-31,Q1,2024,0.045,Percentage,↗,Red,0.05,0.03\n\
         KPI-1,Sickness rate,2024-06-30,Q2,2024,0.052,Percentage,↗,Red,0.05,0.03\n",
    )
    .unwrap();

    assert_eq!(report.rows_read, 2);
    assert!(report.row_errors.is_empty());
    let rows = report.table.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].reference, "KPI-1");
    assert_eq!(rows[0].name, "Sickness rate");
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    assert_eq!(rows[0].period, "Q1");
    assert_eq!(rows[0].year, 2024);
    assert_eq!(rows[0].value, RawValue::Number(0.045));
    assert_eq!(rows[0].unit, UnitKind::Percentage);
    assert_eq!(rows[0].trend, Trend::Rising);
    assert_eq!(rows[0].status, Status::Red);
    assert_eq!(rows[0].thresholds.red_above, Some(0.05));
    assert_eq!(rows[0].thresholds.target, Some(0.03));
}

#[test]
fn absent_threshold_columns_mean_no_threshold() {
    let report = read("KPI-1,Name,2024-03-31,Q1,2024,1,Whole number,,Green,,\n").unwrap();

    let thresholds = report.table.rows()[0].thresholds;
    assert_eq!(thresholds.red_above, None);
    assert_eq!(thresholds.amber_below, None);
    assert_eq!(thresholds.target, None);
}

#[test]
fn non_numeric_threshold_is_absent() {
    let report = read("KPI-1,Name,2024-03-31,Q1,2024,1,Whole number,,Green,tbc,10\n").unwrap();

    let thresholds = report.table.rows()[0].thresholds;
    assert_eq!(thresholds.red_above, None);
    assert_eq!(thresholds.target, Some(10.0));
}

#[test]
fn malformed_value_is_kept_as_text() {
    let report = read("KPI-1,Name,2024-03-31,Q1,2024,n/a,Currency,,Red,,\n").unwrap();
    assert_eq!(
        report.table.rows()[0].value,
        RawValue::Text("n/a".to_string())
    );
}

#[test]
fn bad_date_is_a_row_error() {
    let report = read(
        "KPI-1,Name,not-a-date,Q1,2024,1,Decimal,,Red,,\n\
         KPI-1,Name,2024-06-30,Q2,2024,2,Decimal,,Red,,\n",
    )
    .unwrap();

    assert_eq!(report.rows_read, 2);
    assert_eq!(report.table.len(), 1);
    assert_eq!(report.row_errors.len(), 1);
    assert_eq!(report.row_errors[0].line, 2);
    assert!(report.row_errors[0].message.contains("not-a-date"));
}

#[test]
fn missing_reference_is_a_row_error() {
    let report = read(
        ",Name,2024-03-31,Q1,2024,1,Decimal,,Red,,\n\
         KPI-2,Name,2024-03-31,Q1,2024,1,Decimal,,Red,,\n",
    )
    .unwrap();

    assert_eq!(report.row_errors.len(), 1);
    assert!(report.row_errors[0].message.contains("reference"));
}

#[test]
fn alternative_date_formats() {
    let report = read(
        "A,Name,31/03/2024,Q1,2024,1,Decimal,,Red,,\n\
         B,Name,2024-06-30 00:00:00,Q2,2024,1,Decimal,,Red,,\n",
    )
    .unwrap();

    let dates: Vec<_> = report.table.rows().iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        ]
    );
}

#[test]
fn spreadsheet_float_year_and_blank_year() {
    let report = read(
        "A,Name,2024-03-31,Q1,2024.0,1,Decimal,,Red,,\n\
         B,Name,2023-12-31,Q4,,1,Decimal,,Red,,\n",
    )
    .unwrap();

    let rows = report.table.rows();
    assert_eq!(rows[0].year, 2024);
    assert_eq!(rows[1].year, 2023);
}

#[test]
fn blank_name_falls_back_to_reference() {
    let report = read("KPI-9,,2024-03-31,Q1,2024,1,Decimal,,Red,,\n").unwrap();
    assert_eq!(report.table.rows()[0].name, "KPI-9");
}

#[test]
fn missing_required_column_is_fatal() {
    let text = "Metric Reference,Metric Name,Date\nA,B,2024-03-31\n";
    let err = read_table(text.as_bytes(), &InputConfig::default()).unwrap_err();

    assert!(
        matches!(err, MetricTrendsError::MissingColumn { ref column } if column == "Quarter")
    );
}

#[test]
fn header_matching_ignores_case_and_bom() {
    let text = "\u{feff}metric reference,METRIC NAME,date,quarter,year,value,units of measure,3q trend,rag text\n\
                A,Name,2024-03-31,Q1,2024,5,Thousands,↘,Amber\n";
    let report = read_table(text.as_bytes(), &InputConfig::default()).unwrap();

    let row = &report.table.rows()[0];
    assert_eq!(row.unit, UnitKind::Thousands);
    assert_eq!(row.trend, Trend::Falling);
}

#[test]
fn no_usable_rows_is_fatal() {
    let err = read("A,Name,someday,Q1,2024,1,Decimal,,Red,,\n").unwrap_err();
    assert!(matches!(err, MetricTrendsError::NoRows));
}

#[test]
fn custom_delimiter_and_columns() {
    let mut input = InputConfig {
        delimiter: ';',
        ..InputConfig::default()
    };
    input.columns.period = "Period".to_string();
    let text = "Metric Reference;Metric Name;Date;Period;Year;Value;Units of Measure;3Q Trend;RAG Text\n\
                A;Name;2024-03-31;Mar;2024;1;Decimal;;Red\n";

    let report = read_table(text.as_bytes(), &input).unwrap();
    assert_eq!(report.table.rows()[0].period, "Mar");
}

#[test]
fn non_ascii_delimiter_is_config_error() {
    let input = InputConfig {
        delimiter: '→',
        ..InputConfig::default()
    };
    let err = read_table(HEADER.as_bytes(), &input).unwrap_err();
    assert!(matches!(err, MetricTrendsError::Config(_)));
}

#[test]
fn loader_reports_unreadable_file() {
    let loader = CsvTableLoader::new("/definitely/not/here.csv", InputConfig::default());
    let err = loader.load().unwrap_err();
    assert!(matches!(err, MetricTrendsError::FileRead { .. }));
}
