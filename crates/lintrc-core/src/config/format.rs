//! File formats for fragments and resolved configurations

use std::fmt;
use std::path::Path;

use super::fragment::FragmentFile;
use crate::{LintrcError, Result};

/// Supported configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// Strict JSON
    Json,
    /// JSON with comments and trailing commas (`.jsonc`, `.json5`)
    Json5,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "jsonc" | "json5" => Some(Self::Json5),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Json5 => "jsonc",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    /// Parse a fragment file's content
    pub fn parse_fragment(&self, content: &str, source_id: &str) -> Result<FragmentFile> {
        let parsed = match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Json5 => json5::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => {
                // An empty YAML document is an empty fragment
                if content.trim().is_empty() {
                    Ok(FragmentFile::default())
                } else {
                    serde_yaml::from_str(content).map_err(|e| e.to_string())
                }
            }
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| LintrcError::parse_error(source_id, message))
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "JSON",
            Self::Json5 => "JSONC",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        };
        f.write_str(name)
    }
}
