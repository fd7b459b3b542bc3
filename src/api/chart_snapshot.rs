use serde::{Deserialize, Serialize};

use crate::core::{Axis, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{AxisLabel, SelectionState};
use crate::render::Renderer;

use super::{ScatterChart, Tooltip};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub selection: SelectionState,
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
    pub x_domain: Option<(f64, f64)>,
    pub y_domain: Option<(f64, f64)>,
    pub mark_count: usize,
    pub mark_generation: Option<u64>,
    pub tooltip: Option<Tooltip>,
    pub has_surface: bool,
    pub rebuild_count: u64,
    pub clock_ms: u64,
    pub animating: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ScatterChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let scene = self.scene.as_ref();
        ChartSnapshot {
            viewport: self.layout.layout().viewport,
            selection: self.selection,
            x_labels: self.selection.label_states(Axis::X).into_vec(),
            y_labels: self.selection.label_states(Axis::Y).into_vec(),
            x_domain: scene.map(|scene| scene.x_scale.domain()),
            y_domain: scene.map(|scene| scene.y_scale.domain()),
            mark_count: self.marks.len(),
            mark_generation: scene.map(|_| self.marks.generation()),
            tooltip: self.tooltip.visible().cloned(),
            has_surface: self.renderer.has_surface(),
            rebuild_count: self.layout.rebuild_count(),
            clock_ms: u64::try_from(self.clock.as_millis()).unwrap_or(u64::MAX),
            animating: self.is_animating(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ScatterConfig;
    use crate::core::{Attribute, DataPoint};
    use crate::data::StaticDataSource;
    use crate::render::NullRenderer;

    fn point(state: &str, abbr: &str, poverty: f64, healthcare: f64) -> DataPoint {
        DataPoint::new(state, abbr)
            .with_value(Attribute::Poverty, poverty)
            .with_value(Attribute::Healthcare, healthcare)
    }

    #[test]
    fn snapshot_contract_round_trips_through_compat_parser() {
        let mut chart =
            ScatterChart::new(NullRenderer::default(), ScatterConfig::default()).expect("chart");
        chart
            .mount(&StaticDataSource::new(vec![
                point("Alabama", "AL", 20.0, 11.0),
                point("Alaska", "AK", 11.0, 15.0),
            ]))
            .expect("mount");

        let snapshot = chart.snapshot();
        assert_eq!(snapshot.mark_count, 2);
        assert_eq!(snapshot.x_domain, Some((11.0, 20.0)));
        assert!(snapshot.has_surface);

        let json = snapshot.to_json_contract_v1_pretty().expect("json");
        assert!(json.contains("\"schema_version\": 1"));
        let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse");
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        let json = r#"{"schema_version": 9, "snapshot": {}}"#;
        assert!(ChartSnapshot::from_json_compat_str(json).is_err());
    }
}
