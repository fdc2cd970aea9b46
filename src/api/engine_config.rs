use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TRANSITION_SECONDS, Margin, PlotArea, Viewport, XMetric, YMetric};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_initial_x")]
    pub initial_x: XMetric,
    #[serde(default = "default_initial_y")]
    pub initial_y: YMetric,
    #[serde(default = "default_transition_seconds")]
    pub transition_seconds: f64,
    #[serde(default = "default_circle_radius_px")]
    pub circle_radius_px: f64,
    #[serde(default = "default_circle_fill")]
    pub circle_fill: Color,
    #[serde(default = "default_abbr_font_size_px")]
    pub abbr_font_size_px: f64,
    #[serde(default = "default_axis_label_font_size_px")]
    pub axis_label_font_size_px: f64,
    #[serde(default = "default_tick_font_size_px")]
    pub tick_font_size_px: f64,
    #[serde(default = "default_tooltip_font_size_px")]
    pub tooltip_font_size_px: f64,
    #[serde(default = "default_x_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_hover_hit_radius_px")]
    pub hover_hit_radius_px: f64,
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margin: Margin::default(),
            initial_x: default_initial_x(),
            initial_y: default_initial_y(),
            transition_seconds: default_transition_seconds(),
            circle_radius_px: default_circle_radius_px(),
            circle_fill: default_circle_fill(),
            abbr_font_size_px: default_abbr_font_size_px(),
            axis_label_font_size_px: default_axis_label_font_size_px(),
            tick_font_size_px: default_tick_font_size_px(),
            tooltip_font_size_px: default_tooltip_font_size_px(),
            x_tick_count: default_x_tick_count(),
            y_tick_count: default_y_tick_count(),
            hover_hit_radius_px: default_hover_hit_radius_px(),
        }
    }
}

impl ScatterChartConfig {
    /// Sets viewport size.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets plot-area margins.
    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the metrics driving each axis at startup.
    #[must_use]
    pub fn with_initial_metrics(mut self, initial_x: XMetric, initial_y: YMetric) -> Self {
        self.initial_x = initial_x;
        self.initial_y = initial_y;
        self
    }

    /// Sets axis-toggle transition length in seconds.
    #[must_use]
    pub fn with_transition_seconds(mut self, transition_seconds: f64) -> Self {
        self.transition_seconds = transition_seconds;
        self
    }

    /// Sets scatter point radius and fill.
    #[must_use]
    pub fn with_circle_style(mut self, radius_px: f64, fill: Color) -> Self {
        self.circle_radius_px = radius_px;
        self.circle_fill = fill;
        self
    }

    /// Sets requested tick counts per axis.
    #[must_use]
    pub fn with_tick_counts(mut self, x_tick_count: usize, y_tick_count: usize) -> Self {
        self.x_tick_count = x_tick_count;
        self.y_tick_count = y_tick_count;
        self
    }

    /// Sets the tooltip hover hit radius.
    #[must_use]
    pub fn with_hover_hit_radius_px(mut self, hover_hit_radius_px: f64) -> Self {
        self.hover_hit_radius_px = hover_hit_radius_px;
        self
    }

    /// The inner plot rectangle implied by viewport and margins.
    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.margin)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.plot_area()?;

        if !self.transition_seconds.is_finite() || self.transition_seconds < 0.0 {
            return Err(ChartError::InvalidData(
                "transition seconds must be finite and >= 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("circle radius", self.circle_radius_px),
            ("abbr font size", self.abbr_font_size_px),
            ("axis label font size", self.axis_label_font_size_px),
            ("tick font size", self.tick_font_size_px),
            ("tooltip font size", self.tooltip_font_size_px),
            ("hover hit radius", self.hover_hit_radius_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if self.x_tick_count < 2 || self.y_tick_count < 2 {
            return Err(ChartError::InvalidData(
                "tick counts must be at least 2".to_owned(),
            ));
        }
        self.circle_fill.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(750, 500)
}

fn default_initial_x() -> XMetric {
    XMetric::Obesity
}

fn default_initial_y() -> YMetric {
    YMetric::Income
}

fn default_transition_seconds() -> f64 {
    DEFAULT_TRANSITION_SECONDS
}

fn default_circle_radius_px() -> f64 {
    12.0
}

fn default_circle_fill() -> Color {
    Color::rgba(0.0, 0.0, 1.0, 0.5)
}

fn default_abbr_font_size_px() -> f64 {
    9.0
}

fn default_axis_label_font_size_px() -> f64 {
    14.0
}

fn default_tick_font_size_px() -> f64 {
    10.0
}

fn default_tooltip_font_size_px() -> f64 {
    12.0
}

fn default_x_tick_count() -> usize {
    10
}

fn default_y_tick_count() -> usize {
    10
}

fn default_hover_hit_radius_px() -> f64 {
    12.0
}
