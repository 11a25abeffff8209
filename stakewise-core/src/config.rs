//! Serializable engine configuration.
//!
//! ```toml
//! [format]
//! currency_symbol = "₹"
//! grouping = "indian"
//! money_decimals = 2
//!
//! [chart]
//! palette = ["#FF6384", "#36A2EB"]
//! ```
//!
//! Every key is optional; missing keys fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::{Palette, DEFAULT_PALETTE};
use crate::format::FormatConfig;

/// Errors from loading or validating a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub palette: Vec<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ChartConfig {
    /// Configured palette, or the default one if the list is empty.
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.clone()).unwrap_or_default()
    }
}

/// Presentation settings for summaries and chart series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub format: FormatConfig,
    pub chart: ChartConfig,
}

impl EngineConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chart.palette.is_empty() {
            return Err(ConfigError::Invalid("chart.palette must not be empty".into()));
        }
        if self.chart.palette.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::Invalid("chart.palette contains a blank color".into()));
        }
        if self.format.money_decimals > 8 {
            return Err(ConfigError::Invalid(format!(
                "format.money_decimals must be at most 8, got {}",
                self.format.money_decimals
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DigitGrouping;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.format.currency_symbol, "₹");
        assert_eq!(config.chart.palette().len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = EngineConfig::from_toml(
            r#"
[format]
grouping = "indian"
"#,
        )
        .unwrap();
        assert_eq!(config.format.grouping, DigitGrouping::Indian);
        assert_eq!(config.format.money_decimals, 2);
        assert_eq!(config.format.currency_symbol, "₹");
    }

    #[test]
    fn empty_palette_is_invalid() {
        let err = EngineConfig::from_toml("[chart]\npalette = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_grouping_is_parse_error() {
        let err = EngineConfig::from_toml("[format]\ngrouping = \"roman\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[format]\ncurrency_symbol = \"$\"\ngrouping = \"western\"\n\n[chart]\npalette = [\"red\", \"green\"]"
        )
        .unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.format.currency_symbol, "$");
        assert_eq!(config.format.grouping, DigitGrouping::Western);
        let palette = config.chart.palette();
        assert_eq!(palette.color(0), "red");
        assert_eq!(palette.color(3), "green");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EngineConfig::from_file(Path::new("/nonexistent/stakewise.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
