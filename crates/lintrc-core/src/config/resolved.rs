//! The merged configuration handed to the lint engine

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::format::ConfigFormat;
use super::fragment::PresetRef;
use super::global_mode::GlobalMode;
use super::ignore::IgnoreMatcher;
use crate::{LintrcError, Result};

/// Final, immutable result of merging fragments
///
/// Produced by [`ConfigResolver::resolve`](super::ConfigResolver::resolve).
/// Updating a configuration means resolving a new fragment list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    #[serde(default)]
    ignore_patterns: IndexSet<String>,
    #[serde(default)]
    globals: IndexMap<String, GlobalMode>,
    #[serde(default)]
    presets: Vec<PresetRef>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    extra: IndexMap<String, serde_json::Value>,
}

impl ResolvedConfig {
    pub(crate) fn new(
        ignore_patterns: IndexSet<String>,
        globals: IndexMap<String, GlobalMode>,
        presets: Vec<PresetRef>,
        extra: IndexMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            ignore_patterns,
            globals,
            presets,
            extra,
        }
    }

    pub fn ignore_patterns(&self) -> &IndexSet<String> {
        &self.ignore_patterns
    }

    pub fn globals(&self) -> &IndexMap<String, GlobalMode> {
        &self.globals
    }

    /// Presets in activation order
    pub fn presets(&self) -> &[PresetRef] {
        &self.presets
    }

    pub fn extra(&self) -> &IndexMap<String, serde_json::Value> {
        &self.extra
    }

    pub fn global_mode(&self, name: &str) -> Option<GlobalMode> {
        self.globals.get(name).copied()
    }

    /// Whether `name` is pre-declared; globals set to `off` are not
    pub fn is_declared(&self, name: &str) -> bool {
        self.global_mode(name).is_some_and(|mode| mode.is_declared())
    }

    /// Identifiers the engine should treat as existing
    pub fn declared_globals(&self) -> impl Iterator<Item = (&str, GlobalMode)> {
        self.globals
            .iter()
            .filter(|(_, mode)| mode.is_declared())
            .map(|(name, mode)| (name.as_str(), *mode))
    }

    pub fn has_preset(&self, reference: &str) -> bool {
        self.presets.iter().any(|preset| preset.as_str() == reference)
    }

    pub fn is_empty(&self) -> bool {
        self.ignore_patterns.is_empty()
            && self.globals.is_empty()
            && self.presets.is_empty()
            && self.extra.is_empty()
    }

    /// Compile the ignore patterns for path queries
    pub fn ignore_matcher(&self) -> Result<IgnoreMatcher> {
        IgnoreMatcher::new(self.ignore_patterns.iter().map(String::as_str))
    }

    /// Render in the given format
    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        let rendered = match format {
            ConfigFormat::Json | ConfigFormat::Json5 => serde_json::to_string_pretty(self)
                .map_err(|e| LintrcError::config_error(format!("Failed to serialize JSON: {e}")))?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| LintrcError::config_error(format!("Failed to serialize YAML: {e}")))?,
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| LintrcError::config_error(format!("Failed to serialize TOML: {e}")))?,
        };
        Ok(rendered)
    }
}
