use std::time::Duration;

use approx::assert_relative_eq;
use census_scatter::api::{ScatterChart, ScatterConfig};
use census_scatter::core::{Attribute, Axis, DataPoint};
use census_scatter::data::{CsvDataSource, StaticDataSource};
use census_scatter::render::NullRenderer;

fn mounted() -> ScatterChart<NullRenderer> {
    let source = CsvDataSource::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/census_sample.csv"
    ));
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ScatterConfig::default()).expect("chart init");
    chart.mount(&source).expect("mount");
    chart
}

#[test]
fn tooltip_shows_current_selection_values() {
    let mut chart = mounted();
    let mark = chart.mark_id(0).expect("alabama");

    assert!(chart.pointer_enter(mark).expect("enter"));
    let tooltip = chart.tooltip().expect("visible tooltip");
    assert_eq!(tooltip.text(), "Alabama\npoverty: 19.3\nhealthcare: 13.9");
    assert_eq!(chart.renderer().last_rect_count, 1);

    assert!(chart.pointer_leave().expect("leave"));
    assert!(chart.tooltip().is_none());
    assert_eq!(chart.renderer().last_rect_count, 0);
}

#[test]
fn tooltip_anchor_is_offset_from_mark_top() {
    let mut chart = mounted();
    let plot = chart.layout().plot;
    let (cx, cy) = chart.mark_position(4).expect("california");
    let (sx, sy) = plot.to_surface(cx, cy);

    chart
        .pointer_enter(chart.mark_id(4).expect("california"))
        .expect("enter");
    let tooltip = chart.tooltip().expect("visible tooltip");
    assert_relative_eq!(tooltip.anchor_x, sx - 30.0);
    assert_relative_eq!(tooltip.anchor_y, sy - 14.0 + 80.0);
}

#[test]
fn handlers_follow_the_redrawn_marks() {
    let mut chart = mounted();
    let stale = chart.mark_id(0).expect("alabama");
    chart.pointer_enter(stale).expect("enter");

    chart.click_label(Axis::X, "age").expect("click age");
    // The redraw hides the popup built from the old marks.
    assert!(chart.tooltip().is_none());

    assert!(!chart.pointer_enter(stale).expect("stale enter"));
    assert!(chart.tooltip().is_none());

    let fresh = chart.mark_id(0).expect("alabama");
    assert_ne!(fresh.generation, stale.generation);
    assert!(chart.pointer_enter(fresh).expect("fresh enter"));
    assert_eq!(
        chart.tooltip().expect("visible tooltip").text(),
        "Alabama\nage: 38.6\nhealthcare: 13.9"
    );
}

#[test]
fn pointer_move_synthesizes_enter_and_leave() {
    let mut chart = mounted();
    chart.click_label(Axis::Y, "smokes").expect("click smokes");
    chart.advance(Duration::from_millis(1000)).expect("settle");

    let plot = chart.layout().plot;
    let (cx, cy) = chart.mark_position(0).expect("alabama");
    let (sx, sy) = plot.to_surface(cx, cy);

    let hit = chart.pointer_move(sx + 2.0, sy - 2.0).expect("move");
    assert_eq!(hit, chart.mark_id(0));
    assert_eq!(
        chart.tooltip().expect("visible tooltip").text(),
        "Alabama\npoverty: 19.3\nsmokes: 21.1"
    );

    // Moving within the same mark keeps the popup without re-entering.
    let renders = chart.renderer().render_count;
    chart.pointer_move(sx, sy).expect("move");
    assert_eq!(chart.renderer().render_count, renders);

    let miss = chart
        .pointer_move(plot.left + 5.0, plot.top + 5.0)
        .expect("move");
    assert_eq!(miss, None);
    assert!(chart.tooltip().is_none());
}

#[test]
fn pointer_events_before_mount_are_ignored() {
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ScatterConfig::default()).expect("chart init");
    assert_eq!(chart.pointer_move(100.0, 100.0).expect("move"), None);
    assert!(!chart.pointer_leave().expect("leave"));
    assert!(chart.mark_id(0).is_none());
}

#[test]
fn hovering_a_row_without_state_name_keeps_the_chart_responsive() {
    let source = StaticDataSource::new(vec![
        DataPoint::new("", "AL")
            .with_value(Attribute::Poverty, 20.0)
            .with_value(Attribute::Age, 38.0)
            .with_value(Attribute::Healthcare, 11.0),
        DataPoint::new("Alaska", "AK")
            .with_value(Attribute::Poverty, 12.0)
            .with_value(Attribute::Age, 33.0)
            .with_value(Attribute::Healthcare, 9.0),
    ]);
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ScatterConfig::default()).expect("chart init");
    chart.mount(&source).expect("mount");

    assert!(chart.pointer_enter(chart.mark_id(0).expect("nameless")).expect("enter"));
    assert_eq!(chart.renderer().last_rect_count, 1);
    assert_eq!(
        chart.tooltip().expect("visible tooltip").text(),
        "\npoverty: 20\nhealthcare: 11"
    );

    chart.advance(Duration::from_millis(16)).expect("advance");
    chart.click_label(Axis::X, "age").expect("click age");
    chart.advance(Duration::from_millis(1000)).expect("settle");
    assert!(chart.pointer_enter(chart.mark_id(0).expect("nameless")).expect("re-enter"));
}
