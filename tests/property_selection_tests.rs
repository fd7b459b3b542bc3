use census_scatter::core::{Attribute, Axis, DataPoint, XAttribute, YAttribute, build_scale};
use census_scatter::interaction::{SelectionEvent, SelectionState};
use proptest::prelude::*;

fn x_attribute() -> impl Strategy<Value = XAttribute> {
    prop::sample::select(XAttribute::ALL.to_vec())
}

fn y_attribute() -> impl Strategy<Value = YAttribute> {
    prop::sample::select(YAttribute::ALL.to_vec())
}

fn selection_event() -> impl Strategy<Value = SelectionEvent> {
    prop_oneof![
        x_attribute().prop_map(SelectionEvent::SelectX),
        y_attribute().prop_map(SelectionEvent::SelectY),
    ]
}

fn assert_single_active(state: SelectionState) -> Result<(), TestCaseError> {
    for axis in [Axis::X, Axis::Y] {
        let labels = state.label_states(axis);
        prop_assert_eq!(labels.len(), 3);
        let active: Vec<Attribute> = labels
            .iter()
            .filter(|label| label.is_active())
            .map(|label| label.attribute)
            .collect();
        prop_assert_eq!(active, vec![state.selected(axis)]);
    }
    Ok(())
}

proptest! {
    #[test]
    fn every_selection_has_one_active_label_per_axis(
        x in x_attribute(),
        y in y_attribute()
    ) {
        assert_single_active(SelectionState::new(x, y))?;
    }

    #[test]
    fn click_sequences_keep_labels_exclusive(
        events in prop::collection::vec(selection_event(), 1..24)
    ) {
        let mut state = SelectionState::default();
        for event in events {
            let before = state;
            let transition = state.apply(event);
            if transition.is_noop() {
                prop_assert_eq!(state, before);
            }
            match event {
                SelectionEvent::SelectX(x) => {
                    prop_assert_eq!(state.x(), x);
                    prop_assert_eq!(state.y(), before.y());
                }
                SelectionEvent::SelectY(y) => {
                    prop_assert_eq!(state.y(), y);
                    prop_assert_eq!(state.x(), before.x());
                }
            }
            assert_single_active(state)?;
        }
    }

    #[test]
    fn scale_maps_extremes_to_range_ends(
        attribute in prop::sample::select(Attribute::ALL.to_vec()),
        values in prop::collection::vec(-1.0e6f64..1.0e6, 2..32),
        range_end in 10.0f64..2_000.0,
        inverted in any::<bool>()
    ) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(max - min > 1e-6);

        let points: Vec<DataPoint> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                DataPoint::new(format!("State {i}"), "ST").with_value(attribute, value)
            })
            .collect();
        let range = if inverted { (range_end, 0.0) } else { (0.0, range_end) };
        let scale = build_scale(&points, attribute, range).expect("scale");

        prop_assert_eq!(scale.domain(), (min, max));
        prop_assert!((scale.map(min) - range.0).abs() <= 1e-6);
        prop_assert!((scale.map(max) - range.1).abs() <= 1e-6);
    }
}
