use crate::length::UnitSystem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // How distances are rendered
    #[serde(default)]
    pub display: DisplayConfig,

    // How distance strings in TOML documents are normalized
    #[serde(default)]
    pub normalize: NormalizeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub units: UnitSystem,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NormalizeConfig {
    // Store the source string next to each normalized value
    #[serde(default = "default_keep_original")]
    pub keep_original: bool,

    // Fail on distance-like strings that do not parse instead of keeping them
    #[serde(default)]
    pub strict: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            keep_original: default_keep_original(),
            strict: false,
        }
    }
}

fn default_keep_original() -> bool {
    true
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
