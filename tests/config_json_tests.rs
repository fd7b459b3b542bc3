use census_scatter::api::{ScatterChart, ScatterConfig};
use census_scatter::core::{XAttribute, YAttribute};
use census_scatter::data::{DataSchema, parse_data_points};
use census_scatter::interaction::SelectionState;
use census_scatter::render::NullRenderer;

#[test]
fn partial_json_config_falls_back_to_defaults() {
    let config = ScatterConfig::from_json_str(
        r#"{
            "transition_ms": 250,
            "initial_x": "age",
            "data_schema": { "obesity_column": "obsesity" }
        }"#,
    )
    .expect("parse config");

    assert_eq!(config.transition_ms, 250);
    assert_eq!(config.initial_x, XAttribute::Age);
    assert_eq!(config.initial_y, YAttribute::Healthcare);
    assert_eq!(config.viewport.width, 680);
    assert_eq!(config.mark_radius, 14.0);
    assert_eq!(config.data_schema.obesity_column, "obsesity");
    assert_eq!(config.data_schema.state_column, "state");
}

#[test]
fn config_round_trips_through_pretty_json() {
    let config = ScatterConfig::default()
        .with_transition_ms(600)
        .with_initial_selection(XAttribute::Income, YAttribute::Smokes)
        .with_data_schema(DataSchema::default().with_obesity_column("obese_pct"));
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ScatterConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn invalid_json_config_is_rejected() {
    assert!(ScatterConfig::from_json_str(r#"{"mark_radius": -2.0}"#).is_err());
    assert!(ScatterConfig::from_json_str(r#"{"initial_y": "poverty"}"#).is_err());
    assert!(ScatterConfig::from_json_str("not json").is_err());
}

#[test]
fn chart_uses_configured_schema_and_selection() {
    let csv = "state,abbr,poverty,age,income,healthcare,smokes,obsesity\n\
               Alabama,AL,19.3,38.6,42830,13.9,21.1,33.5\n\
               Alaska,AK,11.2,33.3,71583,15,19.9,29.7\n";
    let config = ScatterConfig::default()
        .with_initial_selection(XAttribute::Age, YAttribute::Obesity)
        .with_data_schema(DataSchema::default().with_obesity_column("obsesity"));
    let points =
        parse_data_points(csv.as_bytes(), &config.data_schema, "inline").expect("parse csv");

    let mut chart = ScatterChart::new(NullRenderer::default(), config).expect("chart init");
    let ticket = chart.begin_rebuild().expect("begin");
    assert!(chart.finish_rebuild(ticket, points).expect("finish"));

    assert_eq!(
        chart.selection(),
        SelectionState::new(XAttribute::Age, YAttribute::Obesity)
    );
    assert_eq!(chart.y_scale().expect("y scale").domain(), (29.7, 33.5));
}

#[test]
fn csv_source_reads_the_configured_obesity_column() {
    let config = ScatterConfig::default()
        .with_initial_selection(XAttribute::Poverty, YAttribute::Obesity)
        .with_data_schema(DataSchema::default().with_obesity_column("obsesity"));
    let mut chart = ScatterChart::new(NullRenderer::default(), config).expect("chart init");
    let source = chart.csv_source(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/census_obsesity.csv"
    ));
    chart.mount(&source).expect("mount");

    assert_eq!(chart.y_scale().expect("y scale").domain(), (28.9, 33.5));
}

#[test]
fn default_schema_rejects_a_misspelled_obesity_header() {
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ScatterConfig::default()).expect("chart init");
    let source = chart.csv_source(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/census_obsesity.csv"
    ));
    assert!(chart.mount(&source).is_err());
}
