use tracing::debug;

use crate::core::{Dataset, LinearScale, XMetric, YMetric};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{AxisSelection, ChartEvent, hit_test_circles};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::build_frame;
use super::tooltip::TooltipContent;
use super::{ChartModel, ScatterChartConfig};

/// Main orchestration facade consumed by host applications.
///
/// `ScatterEngine` coordinates axis selection, scales, motion, hover state,
/// and renderer calls. All state changes flow through `dispatch`.
pub struct ScatterEngine<R: Renderer> {
    renderer: R,
    config: ScatterChartConfig,
    model: ChartModel,
}

impl<R: Renderer> ScatterEngine<R> {
    pub fn new(config: ScatterChartConfig, dataset: Dataset, renderer: R) -> ChartResult<Self> {
        config.validate()?;
        let model = ChartModel::new(&config, dataset)?;
        Ok(Self {
            renderer,
            config,
            model,
        })
    }

    /// Applies one event to the chart state machine.
    ///
    /// Returns `false` for no-op events (a click on the already-active
    /// label); the chart is then bit-for-bit unchanged.
    pub fn dispatch(&mut self, event: ChartEvent) -> ChartResult<bool> {
        match event {
            ChartEvent::XLabelClicked(metric) => self.on_x_label_clicked(metric),
            ChartEvent::YLabelClicked(metric) => self.on_y_label_clicked(metric),
            ChartEvent::PointerMoved { x, y } => self.on_pointer_moved(x, y),
            ChartEvent::PointerLeft => {
                self.model.hover.on_pointer_leave();
                Ok(true)
            }
        }
    }

    fn on_x_label_clicked(&mut self, metric: XMetric) -> ChartResult<bool> {
        if !self.model.selection.apply_x(metric) {
            return Ok(false);
        }

        let plot = self.model.plot;
        self.model.x_scale = LinearScale::x_from_data(&self.model.dataset, metric, plot)?;
        let targets =
            ChartModel::project_x(&self.model.dataset, metric, self.model.x_scale, plot)?;
        self.model.motion.retarget_x(
            &targets,
            self.model.x_scale.domain(),
            self.config.transition_seconds,
        );
        debug!(metric = metric.field_name(), "x axis toggled");
        Ok(true)
    }

    fn on_y_label_clicked(&mut self, metric: YMetric) -> ChartResult<bool> {
        if !self.model.selection.apply_y(metric) {
            return Ok(false);
        }

        let plot = self.model.plot;
        self.model.y_scale = LinearScale::y_from_data(&self.model.dataset, metric, plot)?;
        let targets =
            ChartModel::project_y(&self.model.dataset, metric, self.model.y_scale, plot)?;
        self.model.motion.retarget_y(
            &targets,
            self.model.y_scale.domain(),
            self.config.transition_seconds,
        );
        debug!(metric = metric.field_name(), "y axis toggled");
        Ok(true)
    }

    fn on_pointer_moved(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }

        self.model.hover.on_pointer_move(x, y);
        let motion = &self.model.motion;
        let centers = (0..motion.circle_count()).filter_map(|index| motion.displayed_circle(index));
        let hovered = hit_test_circles(x, y, centers, self.config.hover_hit_radius_px);
        self.model.hover.set_hovered(hovered);
        Ok(true)
    }

    /// Advances transitions by `delta_s` seconds.
    ///
    /// Returns whether anything is still animating (i.e. a redraw is
    /// pending).
    pub fn step_animation(&mut self, delta_s: f64) -> ChartResult<bool> {
        if !delta_s.is_finite() || delta_s <= 0.0 {
            return Err(ChartError::InvalidData(
                "animation delta seconds must be finite and > 0".to_owned(),
            ));
        }
        Ok(self.model.motion.step(delta_s))
    }

    /// Builds the current frame without handing it to the renderer.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        build_frame(&self.model, &self.config)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = build_frame(&self.model, &self.config)?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn axis_selection(&self) -> AxisSelection {
        self.model.selection()
    }

    #[must_use]
    pub fn config(&self) -> ScatterChartConfig {
        self.config
    }

    #[must_use]
    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    /// Displayed (possibly mid-transition) viewport-space position of one
    /// circle.
    #[must_use]
    pub fn point_position(&self, index: usize) -> Option<(f64, f64)> {
        self.model.motion.displayed_circle(index)
    }

    /// Tooltip content for one record under the current axis selection.
    #[must_use]
    pub fn tooltip_for(&self, index: usize) -> Option<TooltipContent> {
        let record = self.model.dataset.records().get(index)?;
        Some(TooltipContent::from_record(record, self.model.selection))
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
