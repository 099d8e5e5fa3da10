//! Run configuration for pipenet
//!
//! Settings come from an optional `pipenet.toml`. Command-line flags take
//! precedence over the file, and the file over built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::Result;

pub use types::{
    AnalysisConfig, InputConfig, OutputConfig, PipenetConfig, DEFAULT_PRECISION, MAX_PRECISION,
};

/// File name looked up in the working directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "pipenet.toml";

impl PipenetConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate TOML configuration text
    pub fn parse(content: &str) -> Result<Self> {
        let config: PipenetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicit path must exist. Without one, `pipenet.toml` in `dir` is
    /// used when present, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        match Self::discover(dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "discovered config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Path of `pipenet.toml` in `dir`, if it exists
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    fn validate(&self) -> Result<()> {
        self.input.delimiter_char()?;
        if self.output.precision > MAX_PRECISION {
            bail_invalid!("output.precision", self.output.precision);
        }
        Ok(())
    }
}

impl InputConfig {
    /// The delimiter as a single character
    pub fn delimiter_char(&self) -> Result<char> {
        parse_delimiter(&self.delimiter)
    }
}

/// Parse a delimiter setting; `\t` and `tab` name the tab character
pub fn parse_delimiter(value: &str) -> Result<char> {
    if value == "\\t" || value.eq_ignore_ascii_case("tab") {
        return Ok('\t');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '"' && c != '\n' && c != '\r' => Ok(c),
        _ => bail_invalid!("delimiter", format!("{:?}", value)),
    }
}
