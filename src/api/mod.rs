mod axis_renderer;
mod chart_config;
mod chart_snapshot;
mod label_renderer;
mod layout_controller;
mod mark_renderer;
mod render_style;
mod scatter_chart;
mod tooltip_controller;
mod validation;

pub use axis_renderer::{AxisLayer, AxisOrientation, AxisPrimitives};
pub use chart_config::{ScatterConfig, TooltipOffset};
pub use chart_snapshot::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1,
};
pub use label_renderer::{
    AxisLabelLayout, LabelBounds, axis_label_layouts, label_at, label_primitives,
};
pub use layout_controller::{ChartLayout, LayoutController, PipelineTicket};
pub use mark_renderer::{MarkId, MarkLayer};
pub use render_style::RenderStyle;
pub use scatter_chart::ScatterChart;
pub use tooltip_controller::{Tooltip, TooltipController};
