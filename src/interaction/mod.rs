use serde::{Deserialize, Serialize};

use crate::core::{XMetric, YMetric};

/// Host-facing events driving the chart state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// A label in the X axis group was clicked.
    XLabelClicked(XMetric),
    /// A label in the Y axis group was clicked.
    YLabelClicked(YMetric),
    /// Pointer moved over the chart, in viewport pixel coordinates.
    PointerMoved { x: f64, y: f64 },
    /// Pointer left the chart area.
    PointerLeft,
}

/// The chosen metric per axis group.
///
/// Each axis is an independent two-state toggle; exactly one label per group
/// is active and it always matches the chosen metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    pub chosen_x: XMetric,
    pub chosen_y: YMetric,
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self {
            chosen_x: XMetric::Obesity,
            chosen_y: YMetric::Income,
        }
    }
}

impl AxisSelection {
    /// Applies an X label click. Returns `false` when the clicked label is
    /// already the chosen metric (no-op).
    pub fn apply_x(&mut self, metric: XMetric) -> bool {
        if metric == self.chosen_x {
            return false;
        }
        self.chosen_x = metric;
        true
    }

    /// Applies a Y label click. Returns `false` when the clicked label is
    /// already the chosen metric (no-op).
    pub fn apply_y(&mut self, metric: YMetric) -> bool {
        if metric == self.chosen_y {
            return false;
        }
        self.chosen_y = metric;
        true
    }

    #[must_use]
    pub fn is_x_active(self, metric: XMetric) -> bool {
        self.chosen_x == metric
    }

    #[must_use]
    pub fn is_y_active(self, metric: YMetric) -> bool {
        self.chosen_y == metric
    }
}

/// Pointer hover state feeding tooltip visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    cursor_x: f64,
    cursor_y: f64,
    cursor_inside: bool,
    hovered_index: Option<usize>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            cursor_x: 0.0,
            cursor_y: 0.0,
            cursor_inside: false,
            hovered_index: None,
        }
    }
}

impl HoverState {
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.cursor_inside = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor_inside = false;
        self.hovered_index = None;
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered_index = index;
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn cursor_inside(self) -> bool {
        self.cursor_inside
    }

    #[must_use]
    pub fn hovered_index(self) -> Option<usize> {
        self.hovered_index
    }
}

/// Picks the circle under the cursor: nearest center within `hit_radius`.
#[must_use]
pub fn hit_test_circles(
    cursor_x: f64,
    cursor_y: f64,
    centers: impl Iterator<Item = (f64, f64)>,
    hit_radius: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, (cx, cy)) in centers.enumerate() {
        let distance_sq = (cursor_x - cx).powi(2) + (cursor_y - cy).powi(2);
        if distance_sq <= hit_radius * hit_radius
            && best.is_none_or(|(_, best_sq)| distance_sq < best_sq)
        {
            best = Some((index, distance_sq));
        }
    }
    best.map(|(index, _)| index)
}
