use serde::{Deserialize, Serialize};

use crate::core::{Attribute, Axis, Margins, PlotArea};
use crate::interaction::{AxisLabel, SelectionState};
use crate::render::{TextHAlign, TextPrimitive};

use super::RenderStyle;

/// Gap between the plot bottom and the X label group origin.
const X_GROUP_OFFSET_PX: f64 = 20.0;
/// Baseline offsets of the three X labels below the group origin.
const X_LABEL_ROWS_PX: [f64; 3] = [20.0, 40.0, 60.0];
/// Offsets of the three rotated Y labels from the surface's left edge.
const Y_LABEL_COLUMNS_PX: [f64; 3] = [50.0, 33.0, 15.0];
const GLYPH_WIDTH_RATIO: f64 = 0.55;

/// Axis-aligned box around a laid-out label, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl LabelBounds {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }
}

/// One clickable axis label placed on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelLayout {
    pub axis: Axis,
    pub label: AxisLabel,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub bounds: LabelBounds,
}

/// Lays out both label groups for the current selection.
///
/// X labels stack under the plot, centred horizontally. Y labels are rotated
/// a quarter turn counter-clockwise and stack outwards from the plot's left edge.
#[must_use]
pub fn axis_label_layouts(
    selection: SelectionState,
    plot: PlotArea,
    margins: Margins,
    style: &RenderStyle,
) -> Vec<AxisLabelLayout> {
    let font = style.axis_label_font_size_px;
    let text_width = |label: AxisLabel| label.text().chars().count() as f64 * font * GLYPH_WIDTH_RATIO;

    let x_labels = selection
        .label_states(Axis::X)
        .into_iter()
        .zip(X_LABEL_ROWS_PX)
        .map(|(label, row)| {
            let x = plot.left + plot.width / 2.0;
            let y = plot.top + plot.height + X_GROUP_OFFSET_PX + row;
            let half = text_width(label) / 2.0;
            AxisLabelLayout {
                axis: Axis::X,
                label,
                x,
                y,
                rotation_deg: 0.0,
                bounds: LabelBounds {
                    left: x - half,
                    top: y - font,
                    right: x + half,
                    bottom: y,
                },
            }
        });

    let y_labels = selection
        .label_states(Axis::Y)
        .into_iter()
        .zip(Y_LABEL_COLUMNS_PX)
        .map(|(label, column)| {
            let x = plot.left - margins.left + column;
            let y = plot.top + plot.height / 2.0;
            let half = text_width(label) / 2.0;
            AxisLabelLayout {
                axis: Axis::Y,
                label,
                x,
                y,
                rotation_deg: -90.0,
                bounds: LabelBounds {
                    left: x - font,
                    top: y - half,
                    right: x,
                    bottom: y + half,
                },
            }
        });

    x_labels.chain(y_labels).collect()
}

/// The label under surface point `(x, y)`, if any.
#[must_use]
pub fn label_at(layouts: &[AxisLabelLayout], x: f64, y: f64) -> Option<(Axis, Attribute)> {
    layouts
        .iter()
        .find(|layout| layout.bounds.contains(x, y))
        .map(|layout| (layout.axis, layout.label.attribute))
}

#[must_use]
pub fn label_primitives(layouts: &[AxisLabelLayout], style: &RenderStyle) -> Vec<TextPrimitive> {
    layouts
        .iter()
        .map(|layout| {
            let active = layout.label.is_active();
            let color = if active {
                style.active_label_color
            } else {
                style.inactive_label_color
            };
            TextPrimitive::new(
                layout.label.text(),
                layout.x,
                layout.y,
                style.axis_label_font_size_px,
                color,
                TextHAlign::Center,
            )
            .with_rotation(layout.rotation_deg)
            .with_bold(active)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Viewport, XAttribute, YAttribute};

    fn layouts() -> Vec<AxisLabelLayout> {
        let margins = Margins::default();
        let plot = PlotArea::from_viewport(Viewport::new(680, 500), margins);
        axis_label_layouts(SelectionState::default(), plot, margins, &RenderStyle::default())
    }

    #[test]
    fn labels_follow_the_page_layout() {
        let layouts = layouts();
        assert_eq!(layouts.len(), 6);

        let income = layouts[2];
        assert_eq!(income.label.attribute, XAttribute::Income.attribute());
        assert_eq!((income.x, income.y), (352.5, 480.0));

        let healthcare = layouts[3];
        assert_eq!(healthcare.label.attribute, YAttribute::Healthcare.attribute());
        assert_eq!((healthcare.x, healthcare.y), (50.0, 210.0));
        assert_eq!(healthcare.rotation_deg, -90.0);
    }

    #[test]
    fn hit_testing_finds_labels() {
        let layouts = layouts();
        assert_eq!(
            label_at(&layouts, 352.5, 455.0),
            Some((Axis::X, Attribute::Age))
        );
        assert_eq!(
            label_at(&layouts, 10.0, 210.0),
            Some((Axis::Y, Attribute::Obesity))
        );
        assert_eq!(label_at(&layouts, 300.0, 200.0), None);
    }

    #[test]
    fn active_labels_are_emphasised() {
        let texts = label_primitives(&layouts(), &RenderStyle::default());
        let active: Vec<_> = texts.iter().filter(|text| text.bold).map(|t| t.text.as_str()).collect();
        assert_eq!(active, vec!["In Poverty (%)", "Lacks Healthcare (%)"]);
    }
}
