use crate::core::{Dataset, LinearScale, MotionState, PlotArea, XMetric, YMetric};
use crate::error::ChartResult;
use crate::interaction::{AxisSelection, HoverState};

use super::ScatterChartConfig;

/// Mutable chart state grouped behind the engine.
///
/// Replaces the original design's module-level globals with one explicit
/// struct: axis selection, live scales, motion, and hover are only ever
/// mutated through engine event dispatch.
pub struct ChartModel {
    pub(super) dataset: Dataset,
    pub(super) plot: PlotArea,
    pub(super) selection: AxisSelection,
    pub(super) x_scale: LinearScale,
    pub(super) y_scale: LinearScale,
    pub(super) motion: MotionState,
    pub(super) hover: HoverState,
}

impl ChartModel {
    pub fn new(config: &ScatterChartConfig, dataset: Dataset) -> ChartResult<Self> {
        let plot = config.plot_area()?;
        let selection = AxisSelection {
            chosen_x: config.initial_x,
            chosen_y: config.initial_y,
        };

        let x_scale = LinearScale::x_from_data(&dataset, selection.chosen_x, plot)?;
        let y_scale = LinearScale::y_from_data(&dataset, selection.chosen_y, plot)?;

        let circle_xs = Self::project_x(&dataset, selection.chosen_x, x_scale, plot)?;
        let circle_ys = Self::project_y(&dataset, selection.chosen_y, y_scale, plot)?;
        let motion = MotionState::settled(
            &circle_xs,
            &circle_ys,
            x_scale.domain(),
            y_scale.domain(),
        );

        Ok(Self {
            dataset,
            plot,
            selection,
            x_scale,
            y_scale,
            motion,
            hover: HoverState::default(),
        })
    }

    /// Viewport-space cx targets for every record under an X scale.
    pub(super) fn project_x(
        dataset: &Dataset,
        metric: XMetric,
        scale: LinearScale,
        plot: PlotArea,
    ) -> ChartResult<Vec<f64>> {
        dataset
            .records()
            .iter()
            .map(|record| Ok(plot.origin_x + scale.project(record.x_value(metric))?))
            .collect()
    }

    /// Viewport-space cy targets for every record under a Y scale.
    pub(super) fn project_y(
        dataset: &Dataset,
        metric: YMetric,
        scale: LinearScale,
        plot: PlotArea,
    ) -> ChartResult<Vec<f64>> {
        dataset
            .records()
            .iter()
            .map(|record| Ok(plot.origin_y + scale.project(record.y_value(metric))?))
            .collect()
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn selection(&self) -> AxisSelection {
        self.selection
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }
}
