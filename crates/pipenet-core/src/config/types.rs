//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default decimal places for printed weights and distances
pub const DEFAULT_PRECISION: usize = 3;

/// Largest precision accepted; beyond this f64 output is noise
pub const MAX_PRECISION: usize = 17;

/// Top-level `pipenet.toml` contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipenetConfig {
    /// Edge-list input settings
    #[serde(default)]
    pub input: InputConfig,

    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Column names and field delimiter for the edge-list CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Column holding the first endpoint (auto-detected when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u_column: Option<String>,

    /// Column holding the second endpoint (auto-detected when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v_column: Option<String>,

    /// Column holding the edge weight (auto-detected when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w_column: Option<String>,

    /// Field delimiter, a single character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            u_column: None,
            v_column: None,
            w_column: None,
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

/// Analysis settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Label of the source (reservoir) node; node id 0 when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Decimal places for human and records output
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Where to write the MST edge list, if anywhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            mst_path: None,
        }
    }
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}
