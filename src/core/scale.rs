use crate::core::dataset::Dataset;
use crate::core::metric::{XMetric, YMetric};
use crate::core::types::PlotArea;
use crate::error::{ChartError, ChartResult};

/// Linear mapping from a data domain to a pixel range.
///
/// Scales are recomputed from the dataset whenever the chosen metric
/// changes; nothing is cached across axis toggles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        for (name, value) in [
            ("domain start", domain.0),
            ("domain end", domain.1),
            ("range start", range.0),
            ("range end", range.1),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "scale {name} must be finite"
                )));
            }
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// X scale over the observed metric domain, range `[0, plot width]`.
    pub fn x_from_data(dataset: &Dataset, metric: XMetric, plot: PlotArea) -> ChartResult<Self> {
        Self::new(dataset.x_domain(metric), (0.0, plot.width))
    }

    /// Y scale over the observed metric domain, range `[plot height, 0]`
    /// (inverted for screen coordinates).
    pub fn y_from_data(dataset: &Dataset, metric: YMetric, plot: PlotArea) -> ChartResult<Self> {
        Self::new(dataset.y_domain(metric), (plot.height, 0.0))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to its pixel coordinate.
    ///
    /// A degenerate domain (start == end) projects every value to the
    /// midpoint of the range.
    pub fn project(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return Ok((self.range_start + self.range_end) / 2.0);
        }

        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Maps a pixel coordinate back to its domain value.
    ///
    /// A degenerate domain inverts every pixel to the single domain value.
    pub fn unproject(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        let domain_span = self.domain_end - self.domain_start;
        if domain_span == 0.0 || range_span == 0.0 {
            return Ok(self.domain_start);
        }

        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * domain_span)
    }
}
