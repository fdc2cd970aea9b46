use scatter_rs::ChartError;
use scatter_rs::core::{Dataset, StateRecord, XMetric, YMetric};

const SAMPLE_CSV: &str = "\
state,abbr,income,obesity,smokes,healthcare
Ohio,OH,50000,30,20,10
Texas,TX,60000,25,15,12
Utah,UT,55000,27,19,11
";

#[test]
fn csv_rows_are_coerced_to_finite_numbers() {
    let dataset = Dataset::from_csv_reader(SAMPLE_CSV.as_bytes()).expect("csv parses");

    assert_eq!(dataset.len(), 3);
    let ohio = &dataset.records()[0];
    assert_eq!(ohio.state, "Ohio");
    assert_eq!(ohio.abbr, "OH");
    assert_eq!(ohio.income, 50_000.0);
    assert_eq!(ohio.obesity, 30.0);
    assert_eq!(ohio.smokes, 20.0);
    assert_eq!(ohio.healthcare, 10.0);
    assert!(
        dataset
            .records()
            .iter()
            .all(|r| r.income.is_finite()
                && r.obesity.is_finite()
                && r.smokes.is_finite()
                && r.healthcare.is_finite())
    );
}

#[test]
fn extra_csv_columns_are_ignored() {
    let csv = "\
state,abbr,poverty,income,obesity,smokes,healthcare
Ohio,OH,14.8,50000,30,20,10
";
    let dataset = Dataset::from_csv_reader(csv.as_bytes()).expect("csv parses");
    assert_eq!(dataset.records()[0].income, 50_000.0);
}

#[test]
fn non_numeric_metric_fails_the_load() {
    let csv = "\
state,abbr,income,obesity,smokes,healthcare
Ohio,OH,not-a-number,30,20,10
";
    let result = Dataset::from_csv_reader(csv.as_bytes());
    assert!(matches!(result, Err(ChartError::DatasetCsv(_))));
}

#[test]
fn non_finite_metric_fails_validation_with_named_field() {
    let result = Dataset::new(vec![StateRecord {
        state: "Ohio".to_owned(),
        abbr: "OH".to_owned(),
        income: f64::NAN,
        obesity: 30.0,
        smokes: 20.0,
        healthcare: 10.0,
    }]);

    match result {
        Err(ChartError::InvalidData(message)) => {
            assert!(message.contains("Ohio"));
            assert!(message.contains("income"));
        }
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn empty_dataset_is_rejected() {
    assert!(Dataset::new(Vec::new()).is_err());
}

#[test]
fn metric_domains_cover_observed_extent() {
    let dataset = Dataset::from_csv_reader(SAMPLE_CSV.as_bytes()).expect("csv parses");

    assert_eq!(dataset.x_domain(XMetric::Obesity), (25.0, 30.0));
    assert_eq!(dataset.x_domain(XMetric::Smokes), (15.0, 20.0));
    assert_eq!(dataset.y_domain(YMetric::Income), (50_000.0, 60_000.0));
    assert_eq!(dataset.y_domain(YMetric::Healthcare), (10.0, 12.0));
}

#[test]
fn abbr_lookup_preserves_row_order() {
    let dataset = Dataset::from_csv_reader(SAMPLE_CSV.as_bytes()).expect("csv parses");

    assert_eq!(dataset.index_by_abbr("OH"), Some(0));
    assert_eq!(dataset.index_by_abbr("UT"), Some(2));
    assert_eq!(dataset.index_by_abbr("ZZ"), None);
}
