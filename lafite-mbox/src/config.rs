use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Sender written on every `From ` separator line
    pub program_id: String,
    pub quote_from_lines: bool,
    pub skip_deleted: bool,
    /// Extension of the Lafite files picked up in batch mode
    pub input_extension: String,
    /// Extension appended to converted file names
    pub output_extension: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub trace: TraceCategories,
}

/// Independent diagnostic categories. None of them changes the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TraceCategories {
    pub headers: bool,
    pub body: bool,
    pub undocumented_flags: bool,
}

/// A single trace category, as named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TraceCategory {
    Headers,
    Body,
    UndocumentedFlags,
}

impl TraceCategories {
    pub fn enable(&mut self, category: TraceCategory) {
        match category {
            TraceCategory::Headers => self.headers = true,
            TraceCategory::Body => self.body = true,
            TraceCategory::UndocumentedFlags => self.undocumented_flags = true,
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            program_id: env!("CARGO_PKG_NAME").to_string(),
            quote_from_lines: true,
            skip_deleted: false,
            input_extension: "mail".to_string(),
            output_extension: "mbox".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            trace: TraceCategories::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::Config(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConvertError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.conversion.program_id.chars().any(char::is_whitespace) {
            return Err(ConvertError::Config(format!(
                "program_id '{}' must not contain whitespace",
                self.conversion.program_id
            )));
        }
        if self.conversion.input_extension.is_empty() || self.conversion.output_extension.is_empty()
        {
            return Err(ConvertError::Config(
                "file extensions must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conversion: ConversionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
