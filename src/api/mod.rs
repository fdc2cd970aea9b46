mod axis_ticks;
mod chart_model;
mod engine;
mod engine_config;
mod render_frame_builder;
mod tooltip;

pub use chart_model::ChartModel;
pub use engine::ScatterEngine;
pub use engine_config::ScatterChartConfig;
pub use tooltip::{TooltipContent, format_metric};
