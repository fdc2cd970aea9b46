use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Whitespace reserved around the plot area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20,
            right: 40,
            bottom: 60,
            left: 100,
        }
    }
}

/// Inner drawing rectangle in viewport pixel coordinates.
///
/// Primitives are produced in viewport space, so the plot origin offset is
/// part of every projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margin: Margin) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let horizontal = margin.left + margin.right;
        let vertical = margin.top + margin.bottom;
        if viewport.width <= horizontal || viewport.height <= vertical {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            origin_x: f64::from(margin.left),
            origin_y: f64::from(margin.top),
            width: f64::from(viewport.width - horizontal),
            height: f64::from(viewport.height - vertical),
        })
    }

    /// Bottom edge of the plot area in viewport coordinates.
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.origin_y + self.height
    }

    /// Right edge of the plot area in viewport coordinates.
    #[must_use]
    pub fn right(self) -> f64 {
        self.origin_x + self.width
    }
}
