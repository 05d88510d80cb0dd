//! Threshold configuration for the metric checks.
//!
//! Thresholds deserialize from the host tool's configuration file; every
//! field falls back to a default so a partial table is enough.

use serde::{Deserialize, Serialize};

use crate::metrics::FunctionMetrics;

/// Limits a function must stay under before it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricThresholds {
    /// Maximum allowed cyclomatic complexity per function.
    #[serde(default = "default_max_cyclomatic")]
    pub max_cyclomatic: u32,

    /// Maximum allowed distinct source lines per function body.
    #[serde(default = "default_max_lines_of_code")]
    pub max_lines_of_code: usize,
}

fn default_max_cyclomatic() -> u32 {
    10
}

fn default_max_lines_of_code() -> usize {
    50
}

impl Default for MetricThresholds {
    fn default() -> Self {
        Self {
            max_cyclomatic: default_max_cyclomatic(),
            max_lines_of_code: default_max_lines_of_code(),
        }
    }
}

impl MetricThresholds {
    /// Returns true when the measured function breaks at least one limit.
    pub fn exceeded_by(&self, metrics: &FunctionMetrics) -> bool {
        metrics.cyclomatic > self.max_cyclomatic || metrics.lines_of_code > self.max_lines_of_code
    }
}
