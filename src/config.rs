use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Html,
    Text,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Input is the analysis text itself.
    #[default]
    Text,
    /// Input is a JSON response; the analysis is read from `field`.
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub input: InputMode,

    #[serde(default = "default_field")]
    pub field: String,

    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_field() -> String {
    "analysis".to_string()
}
fn default_pretty() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Json,
            input: InputMode::Text,
            field: default_field(),
            pretty: true,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
