use serde::{Deserialize, Serialize};

/// Metric choices for the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XMetric {
    Obesity,
    Smokes,
}

impl XMetric {
    /// The sibling metric in the two-entry X axis group.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Obesity => Self::Smokes,
            Self::Smokes => Self::Obesity,
        }
    }

    #[must_use]
    pub fn axis_label(self) -> &'static str {
        match self {
            Self::Obesity => "Obese (%)",
            Self::Smokes => "Smokes (%)",
        }
    }

    /// CSV column name carrying this metric.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Obesity => "obesity",
            Self::Smokes => "smokes",
        }
    }
}

/// Metric choices for the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YMetric {
    Income,
    Healthcare,
}

impl YMetric {
    /// The sibling metric in the two-entry Y axis group.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Healthcare,
            Self::Healthcare => Self::Income,
        }
    }

    #[must_use]
    pub fn axis_label(self) -> &'static str {
        match self {
            Self::Income => "Household Income (Median)",
            Self::Healthcare => "Lacks Healthcare (%)",
        }
    }

    /// CSV column name carrying this metric.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Healthcare => "healthcare",
        }
    }
}
