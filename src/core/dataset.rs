use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::Deserialize;
use tracing::debug;

use crate::core::metric::{XMetric, YMetric};
use crate::error::{ChartError, ChartResult};

/// One row of the source CSV: a state plus its four numeric metrics.
///
/// Numeric coercion happens during deserialization; extra CSV columns are
/// ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateRecord {
    pub state: String,
    pub abbr: String,
    pub income: f64,
    pub obesity: f64,
    pub smokes: f64,
    pub healthcare: f64,
}

impl StateRecord {
    #[must_use]
    pub fn x_value(&self, metric: XMetric) -> f64 {
        match metric {
            XMetric::Obesity => self.obesity,
            XMetric::Smokes => self.smokes,
        }
    }

    #[must_use]
    pub fn y_value(&self, metric: YMetric) -> f64 {
        match metric {
            YMetric::Income => self.income,
            YMetric::Healthcare => self.healthcare,
        }
    }

    fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("income", self.income),
            ("obesity", self.obesity),
            ("smokes", self.smokes),
            ("healthcare", self.healthcare),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "record `{}`: field `{field}` must be a finite number",
                    self.state
                )));
            }
        }
        Ok(())
    }
}

/// Ordered, read-only record collection shared by all projections.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<StateRecord>,
    abbr_index: IndexMap<String, usize>,
}

impl Dataset {
    /// Builds a dataset from already-parsed records, validating every metric.
    pub fn new(records: Vec<StateRecord>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset must contain at least one record".to_owned(),
            ));
        }

        let mut abbr_index = IndexMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            record.validate()?;
            abbr_index.insert(record.abbr.clone(), index);
        }

        debug!(records = records.len(), "dataset loaded");
        Ok(Self {
            records,
            abbr_index,
        })
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader(reader: impl Read) -> ChartResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for row in csv_reader.deserialize() {
            let record: StateRecord = row?;
            records.push(record);
        }
        Self::new(records)
    }

    #[must_use]
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn index_by_abbr(&self, abbr: &str) -> Option<usize> {
        self.abbr_index.get(abbr).copied()
    }

    /// Observed `[min, max]` of the X metric across all records.
    #[must_use]
    pub fn x_domain(&self, metric: XMetric) -> (f64, f64) {
        Self::domain(self.records.iter().map(|record| record.x_value(metric)))
    }

    /// Observed `[min, max]` of the Y metric across all records.
    #[must_use]
    pub fn y_domain(&self, metric: YMetric) -> (f64, f64) {
        Self::domain(self.records.iter().map(|record| record.y_value(metric)))
    }

    fn domain(values: impl Iterator<Item = f64>) -> (f64, f64) {
        let mut min = OrderedFloat(f64::INFINITY);
        let mut max = OrderedFloat(f64::NEG_INFINITY);
        for value in values {
            let value = OrderedFloat(value);
            min = min.min(value);
            max = max.max(value);
        }
        (min.into_inner(), max.into_inner())
    }
}
