use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, Viewport, XAttribute, YAttribute};
use crate::data::DataSchema;
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;
use super::validation::validate_config;

/// Pixel offset of the tooltip anchor relative to the hovered mark centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self { dx: -30.0, dy: 80.0 }
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default = "default_mark_radius")]
    pub mark_radius: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default)]
    pub tooltip_offset: TooltipOffset,
    #[serde(default)]
    pub initial_x: XAttribute,
    #[serde(default)]
    pub initial_y: YAttribute,
    /// CSV column names. `mount` takes any [`crate::data::DataSource`], so the
    /// schema only applies to sources built with [`super::ScatterChart::csv_source`]
    /// or [`crate::data::CsvDataSource::with_schema`].
    #[serde(default)]
    pub data_schema: DataSchema,
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: Margins::default(),
            transition_ms: default_transition_ms(),
            mark_radius: default_mark_radius(),
            tick_count: default_tick_count(),
            tooltip_offset: TooltipOffset::default(),
            initial_x: XAttribute::default(),
            initial_y: YAttribute::default(),
            data_schema: DataSchema::default(),
            render_style: RenderStyle::default(),
        }
    }
}

impl ScatterConfig {
    /// Sets the transition duration used by axes and marks.
    #[must_use]
    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    #[must_use]
    pub fn with_initial_selection(mut self, x: XAttribute, y: YAttribute) -> Self {
        self.initial_x = x;
        self.initial_y = y;
        self
    }

    #[must_use]
    pub fn with_data_schema(mut self, data_schema: DataSchema) -> Self {
        self.data_schema = data_schema;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, render_style: RenderStyle) -> Self {
        self.render_style = render_style;
        self
    }

    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::from_viewport(self.viewport, self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_config(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(680, 500)
}

fn default_transition_ms() -> u64 {
    1000
}

fn default_mark_radius() -> f64 {
    14.0
}

fn default_tick_count() -> usize {
    10
}
