use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Attribute, Axis, XAttribute, YAttribute};
use crate::error::{ChartError, ChartResult};

/// Visual state of one clickable axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelState {
    Active,
    Inactive,
}

/// One clickable axis label and its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub attribute: Attribute,
    pub state: LabelState,
}

impl AxisLabel {
    #[must_use]
    pub fn text(self) -> &'static str {
        self.attribute.label()
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.state == LabelState::Active
    }
}

/// Click on an axis label as delivered by the host: the axis group and the
/// label's value key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelClick {
    pub axis: Axis,
    pub value: String,
}

impl LabelClick {
    #[must_use]
    pub fn new(axis: Axis, value: impl Into<String>) -> Self {
        Self {
            axis,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    SelectX(XAttribute),
    SelectY(YAttribute),
}

/// Outcome of applying a [`SelectionEvent`]; tells the chart which cascade to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionTransition {
    NoOp,
    XChanged { from: XAttribute, to: XAttribute },
    YChanged { from: YAttribute, to: YAttribute },
}

impl SelectionTransition {
    #[must_use]
    pub fn is_noop(self) -> bool {
        self == Self::NoOp
    }
}

/// Static table from `(axis, clicked value)` to the selection event it triggers.
#[derive(Debug, Clone)]
pub struct SelectionDispatch {
    table: IndexMap<(Axis, Attribute), SelectionEvent>,
}

impl Default for SelectionDispatch {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionDispatch {
    #[must_use]
    pub fn new() -> Self {
        let x_entries = XAttribute::ALL
            .into_iter()
            .map(|x| ((Axis::X, x.attribute()), SelectionEvent::SelectX(x)));
        let y_entries = YAttribute::ALL
            .into_iter()
            .map(|y| ((Axis::Y, y.attribute()), SelectionEvent::SelectY(y)));
        Self {
            table: x_entries.chain(y_entries).collect(),
        }
    }

    pub fn resolve(&self, click: &LabelClick) -> ChartResult<SelectionEvent> {
        Attribute::from_key(&click.value)
            .and_then(|attribute| self.table.get(&(click.axis, attribute)))
            .copied()
            .ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "no {:?} axis label with value `{}`",
                    click.axis, click.value
                ))
            })
    }

    /// Every `(axis, value)` key in label order.
    pub fn keys(&self) -> impl Iterator<Item = (Axis, &'static str)> + '_ {
        self.table
            .keys()
            .map(|&(axis, attribute)| (axis, attribute.key()))
    }
}

/// The two currently selected attributes, one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    x: XAttribute,
    y: YAttribute,
}

impl SelectionState {
    #[must_use]
    pub fn new(x: XAttribute, y: YAttribute) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn x(self) -> XAttribute {
        self.x
    }

    #[must_use]
    pub fn y(self) -> YAttribute {
        self.y
    }

    #[must_use]
    pub fn selected(self, axis: Axis) -> Attribute {
        match axis {
            Axis::X => self.x.attribute(),
            Axis::Y => self.y.attribute(),
        }
    }

    /// Applies an event; selecting the current value leaves the state untouched.
    pub fn apply(&mut self, event: SelectionEvent) -> SelectionTransition {
        match event {
            SelectionEvent::SelectX(to) if to != self.x => {
                let from = std::mem::replace(&mut self.x, to);
                SelectionTransition::XChanged { from, to }
            }
            SelectionEvent::SelectY(to) if to != self.y => {
                let from = std::mem::replace(&mut self.y, to);
                SelectionTransition::YChanged { from, to }
            }
            SelectionEvent::SelectX(_) | SelectionEvent::SelectY(_) => SelectionTransition::NoOp,
        }
    }

    /// The three labels of `axis`, exactly one of them active.
    #[must_use]
    pub fn label_states(self, axis: Axis) -> SmallVec<[AxisLabel; 3]> {
        let selected = self.selected(axis);
        let attributes: [Attribute; 3] = match axis {
            Axis::X => XAttribute::ALL.map(XAttribute::attribute),
            Axis::Y => YAttribute::ALL.map(YAttribute::attribute),
        };
        attributes
            .into_iter()
            .map(|attribute| AxisLabel {
                attribute,
                state: if attribute == selected {
                    LabelState::Active
                } else {
                    LabelState::Inactive
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_poverty_healthcare() {
        let state = SelectionState::default();
        assert_eq!(state.x(), XAttribute::Poverty);
        assert_eq!(state.y(), YAttribute::Healthcare);
    }

    #[test]
    fn dispatch_rejects_cross_axis_values() {
        let dispatch = SelectionDispatch::new();
        assert_eq!(
            dispatch.resolve(&LabelClick::new(Axis::X, "age")).expect("age"),
            SelectionEvent::SelectX(XAttribute::Age)
        );
        assert!(dispatch.resolve(&LabelClick::new(Axis::X, "smokes")).is_err());
        assert!(dispatch.resolve(&LabelClick::new(Axis::Y, "obsesity")).is_err());
        assert_eq!(dispatch.keys().count(), 6);
    }

    #[test]
    fn reselecting_current_value_is_noop() {
        let mut state = SelectionState::default();
        let transition = state.apply(SelectionEvent::SelectX(XAttribute::Poverty));
        assert!(transition.is_noop());
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn x_change_leaves_y_alone() {
        let mut state = SelectionState::new(XAttribute::Poverty, YAttribute::Smokes);
        let transition = state.apply(SelectionEvent::SelectX(XAttribute::Income));
        assert_eq!(
            transition,
            SelectionTransition::XChanged {
                from: XAttribute::Poverty,
                to: XAttribute::Income
            }
        );
        assert_eq!(state.y(), YAttribute::Smokes);
        let y_labels = state.label_states(Axis::Y);
        assert!(y_labels[1].is_active());
    }
}
