//! Runtime configuration
//!
//! An optional `showparse.toml` supplies the defaults the command-line
//! flags fall back to:
//!
//! ```toml
//! [output]
//! default_file = "output.csv"
//! delimiter = ","
//!
//! [logging]
//! profile = "dev"
//! ```

use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "showparse.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output file used when the input came from stdin
    pub default_file: String,
    /// Field delimiter for rendered tables
    pub delimiter: char,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `dev`, `prod`, or `test`
    pub profile: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_file: "output.csv".to_string(),
            delimiter: ',',
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            profile: "dev".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicitly given path must exist; otherwise `./showparse.toml`
    /// is read when present, and built-in defaults apply when it is not.
    pub fn load(path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
        let text = match path {
            Some(p) => std::fs::read_to_string(p)
                .map_err(|e| format!("cannot read config {}: {}", p.display(), e))?,
            None => match std::fs::read_to_string(DEFAULT_CONFIG_FILE) {
                Ok(text) => text,
                Err(_) => return Ok(AppConfig::default()),
            },
        };
        let config: AppConfig = toml::from_str(&text)?;
        Ok(config)
    }
}
