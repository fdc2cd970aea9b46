use smallvec::SmallVec;

use crate::core::StateRecord;
use crate::interaction::AxisSelection;

/// Display content for one hovered point.
///
/// The template is fixed: state name, then the Y line, then the X line,
/// each metric prefixed with its axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub state: String,
    pub x_label: &'static str,
    pub x_value: f64,
    pub y_label: &'static str,
    pub y_value: f64,
}

impl TooltipContent {
    #[must_use]
    pub fn from_record(record: &StateRecord, selection: AxisSelection) -> Self {
        Self {
            state: record.state.clone(),
            x_label: selection.chosen_x.axis_label(),
            x_value: record.x_value(selection.chosen_x),
            y_label: selection.chosen_y.axis_label(),
            y_value: record.y_value(selection.chosen_y),
        }
    }

    /// The three display lines in render order.
    #[must_use]
    pub fn lines(&self) -> SmallVec<[String; 3]> {
        let mut lines = SmallVec::new();
        lines.push(self.state.clone());
        lines.push(format!("{}: {}", self.y_label, format_metric(self.y_value)));
        lines.push(format!("{}: {}", self.x_label, format_metric(self.x_value)));
        lines
    }
}

/// Formats a metric value the way the source data reads: no trailing
/// zeros, no forced decimals (50000.0 -> "50000", 30.5 -> "30.5").
#[must_use]
pub fn format_metric(value: f64) -> String {
    format!("{value}")
}
