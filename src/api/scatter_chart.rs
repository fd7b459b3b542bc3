use std::path::PathBuf;
use std::time::Duration;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Axis, DataPoint, LinearScale, build_scale};
use crate::data::{CsvDataSource, DataSource};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    AxisLabel, LabelClick, SelectionDispatch, SelectionEvent, SelectionState, SelectionTransition,
};
use crate::render::{RenderFrame, Renderer};

use super::{
    AxisLabelLayout, AxisLayer, AxisOrientation, ChartLayout, LayoutController, MarkId,
    MarkLayer, PipelineTicket, ScatterConfig, Tooltip, TooltipController, axis_label_layouts,
    label_at, label_primitives,
};

/// Everything derived from one loaded data set.
#[derive(Debug, Clone)]
pub(super) struct ChartScene {
    pub(super) points: Vec<DataPoint>,
    pub(super) x_scale: LinearScale,
    pub(super) y_scale: LinearScale,
    pub(super) x_axis: AxisLayer,
    pub(super) y_axis: AxisLayer,
}

/// Main orchestration facade consumed by host applications.
///
/// `ScatterChart` owns the selection state, the scales derived from it and
/// the layers drawn from those scales. Hosts feed it label clicks, pointer
/// events, resizes and clock ticks; it answers by rendering frames through `R`.
pub struct ScatterChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ScatterConfig,
    pub(super) layout: LayoutController,
    pub(super) dispatch: SelectionDispatch,
    pub(super) selection: SelectionState,
    pub(super) scene: Option<ChartScene>,
    pub(super) marks: MarkLayer,
    pub(super) tooltip: TooltipController,
    pub(super) hovered: Option<MarkId>,
    pub(super) clock: Duration,
}

impl<R: Renderer> ScatterChart<R> {
    pub fn new(renderer: R, config: ScatterConfig) -> ChartResult<Self> {
        config.validate()?;
        let layout = LayoutController::new(ChartLayout::new(config.viewport, config.margins));
        Ok(Self {
            renderer,
            selection: SelectionState::new(config.initial_x, config.initial_y),
            marks: MarkLayer::new(config.mark_radius, config.transition_duration()),
            tooltip: TooltipController::new(config.tooltip_offset),
            config,
            layout,
            dispatch: SelectionDispatch::new(),
            scene: None,
            hovered: None,
            clock: Duration::ZERO,
        })
    }

    /// CSV source for `path` reading columns by the configured
    /// [`ScatterConfig::data_schema`].
    #[must_use]
    pub fn csv_source(&self, path: impl Into<PathBuf>) -> CsvDataSource {
        CsvDataSource::new(path).with_schema(self.config.data_schema.clone())
    }

    /// Builds the surface and runs the load→scale→render pipeline.
    pub fn mount<S: DataSource + ?Sized>(&mut self, source: &S) -> ChartResult<()> {
        self.rebuild(source)
    }

    /// Handles a viewport resize: a full teardown and restart, selections included.
    pub fn resize<S: DataSource + ?Sized>(&mut self, source: &S) -> ChartResult<()> {
        self.rebuild(source)
    }

    fn rebuild<S: DataSource + ?Sized>(&mut self, source: &S) -> ChartResult<()> {
        let ticket = self.begin_rebuild()?;
        let points = source.load()?;
        self.finish_rebuild(ticket, points)?;
        Ok(())
    }

    /// First half of a rebuild for hosts that load data asynchronously.
    ///
    /// The old surface is gone once this returns; the new one stays blank
    /// until [`ScatterChart::finish_rebuild`] is called with the returned ticket.
    pub fn begin_rebuild(&mut self) -> ChartResult<PipelineTicket> {
        let ticket = self.layout.begin_rebuild(&mut self.renderer)?;
        self.selection = SelectionState::new(self.config.initial_x, self.config.initial_y);
        self.scene = None;
        self.marks.clear();
        self.tooltip.detach();
        self.hovered = None;
        Ok(ticket)
    }

    /// Completes a rebuild with freshly loaded points.
    ///
    /// Returns `Ok(false)` without touching the surface when `ticket` was
    /// superseded by a later rebuild.
    pub fn finish_rebuild(
        &mut self,
        ticket: PipelineTicket,
        points: Vec<DataPoint>,
    ) -> ChartResult<bool> {
        if !self.layout.is_current(ticket) {
            debug!(
                ticket = ticket.generation(),
                current = self.layout.rebuild_count(),
                "ignoring superseded chart pipeline"
            );
            return Ok(false);
        }

        let plot = self.layout.layout().plot;
        let x_attribute = self.selection.x().attribute();
        let y_attribute = self.selection.y().attribute();
        let x_scale = build_scale(&points, x_attribute, plot.x_range())?;
        let y_scale = build_scale(&points, y_attribute, plot.y_range())?;

        let generation = self.marks.render_marks(
            &points,
            x_scale,
            x_attribute,
            y_scale,
            y_attribute,
            self.clock,
        );
        self.tooltip.attach(generation, x_attribute, y_attribute);

        debug!(
            points = points.len(),
            x = x_attribute.key(),
            y = y_attribute.key(),
            "chart pipeline ready"
        );
        self.scene = Some(ChartScene {
            points,
            x_scale,
            y_scale,
            x_axis: AxisLayer::new(AxisOrientation::Bottom, x_scale, self.config.tick_count),
            y_axis: AxisLayer::new(AxisOrientation::Left, y_scale, self.config.tick_count),
        });
        self.render()?;
        Ok(true)
    }

    /// Handles a click on the label with value `value` in the `axis` group.
    pub fn click_label(&mut self, axis: Axis, value: &str) -> ChartResult<SelectionTransition> {
        let event = self.dispatch.resolve(&LabelClick::new(axis, value))?;
        self.select(event)
    }

    /// Handles a click at surface point `(x, y)`; returns `None` when no label is hit.
    pub fn click_at(&mut self, x: f64, y: f64) -> ChartResult<Option<SelectionTransition>> {
        if self.scene.is_none() {
            return Ok(None);
        }
        match label_at(&self.label_layouts(), x, y) {
            Some((axis, attribute)) => self.click_label(axis, attribute.key()).map(Some),
            None => Ok(None),
        }
    }

    /// Applies a selection event and runs the redraw cascade for the changed axis.
    ///
    /// Re-selecting the current attribute is a no-op: no scale is rebuilt and
    /// nothing is redrawn.
    pub fn select(&mut self, event: SelectionEvent) -> ChartResult<SelectionTransition> {
        let plot = self.layout.layout().plot;
        let duration = self.config.transition_duration();
        let Some(scene) = self.scene.as_mut() else {
            return Err(ChartError::InvalidData(
                "axis labels are not available before data has loaded".to_owned(),
            ));
        };

        let transition = self.selection.apply(event);
        match transition {
            SelectionTransition::NoOp => {
                trace!(?event, "selection unchanged");
                return Ok(transition);
            }
            SelectionTransition::XChanged { to, .. } => {
                scene.x_scale = build_scale(&scene.points, to.attribute(), plot.x_range())?;
                scene.x_axis.update(scene.x_scale, self.clock, duration);
            }
            SelectionTransition::YChanged { to, .. } => {
                scene.y_scale = build_scale(&scene.points, to.attribute(), plot.y_range())?;
                scene.y_axis.update(scene.y_scale, self.clock, duration);
            }
        }

        self.redraw_marks();
        debug!(?transition, "selection changed");
        self.render()?;
        Ok(transition)
    }

    /// Redraws marks for the current selection, then re-binds tooltip handlers
    /// to the new generation.
    fn redraw_marks(&mut self) {
        let Some(scene) = self.scene.as_ref() else {
            return;
        };
        let x_attribute = self.selection.x().attribute();
        let y_attribute = self.selection.y().attribute();
        let generation = self.marks.render_marks(
            &scene.points,
            scene.x_scale,
            x_attribute,
            scene.y_scale,
            y_attribute,
            self.clock,
        );
        self.tooltip.attach(generation, x_attribute, y_attribute);
        self.hovered = None;
    }

    /// Pointer entered `mark`. Returns whether a tooltip is now shown.
    pub fn pointer_enter(&mut self, mark: MarkId) -> ChartResult<bool> {
        let Some(scene) = self.scene.as_ref() else {
            return Ok(false);
        };
        let Some((cx, cy)) = self.marks.position(mark.index, self.clock) else {
            return Ok(false);
        };
        let center = self.layout.layout().plot.to_surface(cx, cy);
        let shown = self
            .tooltip
            .pointer_enter(mark, &scene.points, center, self.marks.radius());
        if shown {
            self.hovered = Some(mark);
            self.render()?;
        }
        Ok(shown)
    }

    /// Pointer left the hovered mark. Returns whether a tooltip was hidden.
    pub fn pointer_leave(&mut self) -> ChartResult<bool> {
        self.hovered = None;
        let hidden = self.tooltip.pointer_leave();
        if hidden {
            self.render()?;
        }
        Ok(hidden)
    }

    /// Hit-tests marks at surface point `(x, y)` and synthesizes enter/leave
    /// events when the mark under the pointer changes.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<MarkId>> {
        if self.scene.is_none() {
            return Ok(None);
        }
        let hit = self
            .marks
            .hit_test(x, y, self.clock, self.layout.layout().plot);
        if hit != self.hovered {
            if self.hovered.is_some() {
                self.pointer_leave()?;
            }
            if let Some(mark) = hit {
                self.pointer_enter(mark)?;
            }
        }
        Ok(hit)
    }

    /// Advances the animation clock, rendering while any transition is running.
    pub fn advance(&mut self, delta: Duration) -> ChartResult<()> {
        let was_animating = self.is_animating();
        self.clock += delta;
        if was_animating {
            self.render()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scene.as_ref().is_some_and(|scene| {
            scene.x_axis.is_transitioning(self.clock)
                || scene.y_axis.is_transitioning(self.clock)
                || self.marks.is_transitioning(self.clock)
        })
    }

    /// Draws the frame for the current clock. Does nothing before data has loaded.
    pub fn render(&mut self) -> ChartResult<()> {
        if self.scene.is_none() {
            return Ok(());
        }
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    /// Frame as displayed at the current clock, mid-transition included.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        self.frame_at(self.clock)
    }

    /// Frame once every running transition has settled.
    #[must_use]
    pub fn target_frame(&self) -> RenderFrame {
        self.frame_at(self.clock + self.config.transition_duration())
    }

    fn frame_at(&self, now: Duration) -> RenderFrame {
        let layout = self.layout.layout();
        let style = &self.config.render_style;
        let mut frame = RenderFrame::new(layout.viewport);
        let Some(scene) = self.scene.as_ref() else {
            return frame;
        };

        for axis in [&scene.x_axis, &scene.y_axis] {
            let primitives = axis.primitives(now, layout.plot, style);
            frame.lines.extend(primitives.lines);
            frame.texts.extend(primitives.texts);
        }

        let (circles, mark_texts) = self.marks.primitives(now, layout.plot, style);
        frame.circles.extend(circles);
        frame.texts.extend(mark_texts);

        frame
            .texts
            .extend(label_primitives(&self.label_layouts(), style));

        if let Some((rect, texts)) = self.tooltip.primitives(style) {
            frame.overlay_rects.push(rect);
            frame.overlay_texts.extend(texts);
        }

        frame
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn label_states(&self, axis: Axis) -> SmallVec<[AxisLabel; 3]> {
        self.selection.label_states(axis)
    }

    #[must_use]
    pub fn label_layouts(&self) -> Vec<AxisLabelLayout> {
        let layout = self.layout.layout();
        axis_label_layouts(
            self.selection,
            layout.plot,
            layout.margins,
            &self.config.render_style,
        )
    }

    #[must_use]
    pub fn x_scale(&self) -> Option<LinearScale> {
        self.scene.as_ref().map(|scene| scene.x_scale)
    }

    #[must_use]
    pub fn y_scale(&self) -> Option<LinearScale> {
        self.scene.as_ref().map(|scene| scene.y_scale)
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        self.scene
            .as_ref()
            .map_or(&[], |scene| scene.points.as_slice())
    }

    /// Id of mark `index` in the current generation.
    #[must_use]
    pub fn mark_id(&self, index: usize) -> Option<MarkId> {
        (index < self.marks.len()).then(|| MarkId {
            generation: self.marks.generation(),
            index,
        })
    }

    /// Plot-local centre of mark `index` as displayed now.
    #[must_use]
    pub fn mark_position(&self, index: usize) -> Option<(f64, f64)> {
        self.marks.position(index, self.clock)
    }

    /// Plot-local centre mark `index` settles at.
    #[must_use]
    pub fn mark_target(&self, index: usize) -> Option<(f64, f64)> {
        self.marks.target_position(index)
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.visible()
    }

    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    #[must_use]
    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout.layout()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
