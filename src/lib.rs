//! scatter-rs: interactive scatter chart engine.
//!
//! Projects a per-state health/demographic dataset into a backend-agnostic
//! frame of draw primitives, with clickable axis-metric toggles, hover
//! tooltips, and deterministic host-stepped transitions.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ScatterChartConfig, ScatterEngine};
pub use error::{ChartError, ChartResult};
