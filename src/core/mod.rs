pub mod dataset;
pub mod metric;
pub mod motion;
pub mod scale;
pub mod types;

pub use dataset::{Dataset, StateRecord};
pub use metric::{XMetric, YMetric};
pub use motion::{DEFAULT_TRANSITION_SECONDS, MotionState, Tween};
pub use scale::LinearScale;
pub use types::{Margin, PlotArea, Viewport};
