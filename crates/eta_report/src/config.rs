//! Report configuration.
//!
//! Resolution order: defaults, `--config <file.json>`, `ETA_MATCHES_PATH`, CLI
//! flags. Every JSON field is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the results CSV.
pub const SOURCE_ENV: &str = "ETA_MATCHES_PATH";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Results CSV path.
    pub source: Option<PathBuf>,
    /// Field delimiter (`,`, `;`, `\t`).
    pub delimiter: String,
    /// Minimum games for the toughest-opponents list.
    pub min_matches: u32,
    /// Length of ranked lists.
    pub top_n: usize,
    /// Gap that flags a possible duplicate surname.
    pub min_gap_years: u32,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            source: None,
            delimiter: ",".to_string(),
            min_matches: 3,
            top_n: 10,
            min_gap_years: 20,
            format: OutputFormat::Text,
        }
    }
}

impl ReportConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Defaults, then the optional config file, then the environment.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_source_override(std::env::var_os(SOURCE_ENV).map(PathBuf::from));
        Ok(config)
    }

    /// Replace `source` when an override is present and non-empty.
    pub fn apply_source_override(&mut self, source: Option<PathBuf>) {
        if let Some(source) = source.filter(|p| !p.as_os_str().is_empty()) {
            log::debug!("Results source overridden: {}", source.display());
            self.source = Some(source);
        }
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        crate::csv_source::delimiter_byte(&self.delimiter)
    }

    pub fn source_path(&self) -> Result<&Path> {
        self.source.as_deref().with_context(|| {
            format!(
                "No results file configured: pass --source, set {} or add \"source\" to the config file",
                SOURCE_ENV
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.min_matches, 3);
        assert_eq!(config.top_n, 10);
        assert_eq!(config.min_gap_years, 20);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.delimiter_byte().unwrap(), b',');
        assert!(config.source_path().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(br#"{"source": "results.csv", "top_n": 5, "format": "json"}"#)?;

        let config = ReportConfig::from_file(file.path())?;
        assert_eq!(config.source_path()?, Path::new("results.csv"));
        assert_eq!(config.top_n, 5);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.min_matches, 3);
        Ok(())
    }

    #[test]
    fn test_source_override() {
        let mut config = ReportConfig {
            source: Some(PathBuf::from("a.csv")),
            ..Default::default()
        };
        config.apply_source_override(Some(PathBuf::new()));
        assert_eq!(config.source.as_deref(), Some(Path::new("a.csv")));
        config.apply_source_override(Some(PathBuf::from("b.csv")));
        assert_eq!(config.source.as_deref(), Some(Path::new("b.csv")));
        config.apply_source_override(None);
        assert_eq!(config.source.as_deref(), Some(Path::new("b.csv")));
    }

    #[test]
    fn test_invalid_file_is_reported() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"{ not json")?;
        let err = ReportConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        Ok(())
    }
}
