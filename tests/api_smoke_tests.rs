use census_scatter::api::{ChartSnapshot, ScatterChart, ScatterConfig};
use census_scatter::core::{Attribute, Axis, Viewport, XAttribute, YAttribute};
use census_scatter::data::CsvDataSource;
use census_scatter::interaction::{SelectionState, SelectionTransition};
use census_scatter::render::NullRenderer;
use census_scatter::ChartError;

fn fixture() -> CsvDataSource {
    CsvDataSource::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/census_sample.csv"
    ))
}

#[test]
fn chart_smoke_flow() {
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ScatterConfig::default()).expect("chart init");
    chart.mount(&fixture()).expect("mount should succeed");

    assert_eq!(chart.points().len(), 5);
    assert_eq!(chart.points()[0].state, "Alabama");
    assert_eq!(chart.selection(), SelectionState::default());

    let renderer = chart.renderer();
    assert_eq!(renderer.live_surfaces(), 1);
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_circle_count, 5);
    // Five abbreviations plus six axis labels, before any tick labels.
    assert!(renderer.last_text_count > 11);
    assert!(renderer.last_line_count > 2);

    let transition = chart.click_label(Axis::X, "income").expect("click income");
    assert_eq!(
        transition,
        SelectionTransition::XChanged {
            from: XAttribute::Poverty,
            to: XAttribute::Income
        }
    );
    assert_eq!(chart.selection().x(), XAttribute::Income);
    assert_eq!(chart.selection().y(), YAttribute::Healthcare);

    let (min, max) = chart.x_scale().expect("x scale").domain();
    assert_eq!(min, 41_262.0);
    assert_eq!(max, 71_583.0);
}

#[test]
fn chart_rejects_invalid_viewport() {
    let mut config = ScatterConfig::default();
    config.viewport = Viewport::new(0, 500);
    assert!(matches!(
        ScatterChart::new(NullRenderer::default(), config),
        Err(ChartError::InvalidViewport {
            width: 0,
            height: 500
        })
    ));
}

#[test]
fn snapshot_reflects_selection_and_domains() {
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ScatterConfig::default()).expect("chart init");

    let before = chart.snapshot();
    assert_eq!(before.mark_count, 0);
    assert_eq!(before.x_domain, None);
    assert!(!before.has_surface);

    chart.mount(&fixture()).expect("mount");
    chart.click_label(Axis::Y, "smokes").expect("click smokes");

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.mark_count, 5);
    assert_eq!(snapshot.y_domain, Some((11.7, 24.7)));
    assert!(snapshot.animating);
    let active: Vec<Attribute> = snapshot
        .y_labels
        .iter()
        .filter(|label| label.is_active())
        .map(|label| label.attribute)
        .collect();
    assert_eq!(active, vec![Attribute::Smokes]);

    let json = chart
        .snapshot_json_contract_v1_pretty()
        .expect("snapshot json");
    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse snapshot");
    assert_eq!(parsed, snapshot);
}
