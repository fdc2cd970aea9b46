use scatter_rs::ScatterChartConfig;
use scatter_rs::core::{Margin, Viewport, XMetric, YMetric};

#[test]
fn default_config_matches_the_reference_chart_geometry() {
    let config = ScatterChartConfig::default();

    assert_eq!(config.viewport, Viewport::new(750, 500));
    assert_eq!(config.margin, Margin::default());
    assert_eq!(config.initial_x, XMetric::Obesity);
    assert_eq!(config.initial_y, YMetric::Income);
    assert_eq!(config.transition_seconds, 1.0);
    assert_eq!(config.circle_radius_px, 12.0);
    assert_eq!(config.abbr_font_size_px, 9.0);
    config.validate().expect("default config validates");

    let plot = config.plot_area().expect("plot area");
    assert_eq!(plot.width, 610.0);
    assert_eq!(plot.height, 420.0);
}

#[test]
fn empty_json_object_deserializes_to_defaults() {
    let config = ScatterChartConfig::from_json_str("{}").expect("parse");
    assert_eq!(config, ScatterChartConfig::default());
}

#[test]
fn json_round_trip_preserves_builder_overrides() {
    let config = ScatterChartConfig::default()
        .with_viewport(Viewport::new(900, 600))
        .with_initial_metrics(XMetric::Smokes, YMetric::Healthcare)
        .with_transition_seconds(0.25)
        .with_tick_counts(6, 8)
        .with_hover_hit_radius_px(16.0);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ScatterChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn metrics_serialize_as_lowercase_field_names() {
    let json = ScatterChartConfig::default()
        .with_initial_metrics(XMetric::Smokes, YMetric::Healthcare)
        .to_json_pretty()
        .expect("serialize");

    assert!(json.contains(r#""initial_x": "smokes""#));
    assert!(json.contains(r#""initial_y": "healthcare""#));
}

#[test]
fn margins_swallowing_the_viewport_fail_validation() {
    let config = ScatterChartConfig::default().with_viewport(Viewport::new(120, 70));
    assert!(config.validate().is_err());
}

#[test]
fn degenerate_style_values_fail_validation() {
    let base = ScatterChartConfig::default();

    let mut config = base;
    config.transition_seconds = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = base;
    config.circle_radius_px = 0.0;
    assert!(config.validate().is_err());

    let mut config = base;
    config.x_tick_count = 1;
    assert!(config.validate().is_err());
}

#[test]
fn malformed_json_is_reported_as_invalid_data() {
    let result = ScatterChartConfig::from_json_str("{ not json");
    assert!(result.is_err());
}
