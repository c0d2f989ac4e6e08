//! Configuration fragments
//!
//! A fragment is one unit of configuration as loaded from a single source.
//! Fragments are immutable once loaded; merging happens in
//! [`ConfigResolver`](super::ConfigResolver).

use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::environment::EnvironmentRegistry;
use super::global_mode::GlobalSetting;
use crate::{LintrcError, Result};

static PRESET_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9@][A-Za-z0-9@/:._-]*$").expect("preset reference pattern is valid")
});

/// Reference to an externally defined rule preset
///
/// Presets are opaque: the reference is carried through resolution and never
/// interpreted. Examples: `js/recommended`, `plugin:prettier/recommended`,
/// `@scope/config`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PresetRef(String);

impl PresetRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A reference is valid when it is a non-empty identifier string
    pub fn is_valid(&self) -> bool {
        PRESET_REF.is_match(&self.0)
    }
}

impl fmt::Display for PresetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PresetRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

/// One loaded unit of configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFragment {
    /// Glob patterns of files the lint engine skips
    #[serde(default, alias = "ignores", skip_serializing_if = "IndexSet::is_empty")]
    pub ignore_patterns: IndexSet<String>,

    /// Pre-declared identifiers with their (unvalidated) access mode
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub globals: IndexMap<String, GlobalSetting>,

    /// Preset references to splice in, in order
    #[serde(default, alias = "extends", skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<PresetRef>,

    /// Tool-specific flags, carried opaquely
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,

    /// Where the fragment was loaded from, for diagnostics only
    #[serde(skip)]
    pub source: Option<String>,
}

impl ConfigFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_patterns.insert(pattern.into());
        self
    }

    pub fn with_global(mut self, name: impl Into<String>, setting: impl Into<GlobalSetting>) -> Self {
        self.globals.insert(name.into(), setting.into());
        self
    }

    pub fn with_preset(mut self, reference: impl Into<PresetRef>) -> Self {
        self.presets.push(reference.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Label used in log messages
    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or("<inline>")
    }

    pub fn is_empty(&self) -> bool {
        self.ignore_patterns.is_empty()
            && self.globals.is_empty()
            && self.presets.is_empty()
            && self.extra.is_empty()
    }
}

/// On-disk representation of a fragment
///
/// Differs from [`ConfigFragment`] by naming environments, which are expanded
/// into explicit globals at load time.
///
/// ```jsonc
/// {
///   "$schema": "./lintrc.schema.json",
///   "ignorePatterns": ["node_modules", "dist"],
///   "environments": ["browser"],
///   "globals": { "__APP_VERSION__": "readonly" },
///   "presets": ["js/recommended"],
///   "prettierCompat": true
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(title = "lintrc configuration fragment")]
pub struct FragmentFile {
    /// JSON Schema reference for editor support
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Glob patterns of files to skip
    #[serde(default, alias = "ignores", skip_serializing_if = "IndexSet::is_empty")]
    #[schemars(description = "Glob patterns of files the linter skips")]
    pub ignore_patterns: IndexSet<String>,

    /// Named global sets to pre-declare, e.g. `browser` or `node`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(description = "Named environments whose globals are pre-declared")]
    pub environments: Vec<String>,

    /// Explicit global declarations, applied after environments
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[schemars(description = "Global identifiers: readonly, writable or off")]
    pub globals: IndexMap<String, GlobalSetting>,

    /// Preset references, in activation order
    #[serde(default, alias = "extends", skip_serializing_if = "Vec::is_empty")]
    #[schemars(description = "Rule presets to activate, in order")]
    pub presets: Vec<PresetRef>,

    /// Any other key is carried as a tool-specific flag
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl FragmentFile {
    /// Convert into a fragment, expanding environments through `registry`
    ///
    /// Environment globals are inserted first, in the order the environments
    /// are listed; explicit `globals` then overwrite them.
    pub fn into_fragment(
        self,
        registry: &EnvironmentRegistry,
        source_id: &str,
    ) -> Result<ConfigFragment> {
        let mut globals = IndexMap::new();

        for name in &self.environments {
            let environment = registry.get(name).ok_or_else(|| {
                LintrcError::parse_error(
                    source_id,
                    format!(
                        "unknown environment '{name}' (known: {})",
                        registry.names().collect::<Vec<_>>().join(", ")
                    ),
                )
            })?;
            for (global, mode) in environment.globals() {
                globals.insert(global.clone(), GlobalSetting::from(*mode));
            }
        }

        for (name, setting) in self.globals {
            globals.insert(name, setting);
        }

        Ok(ConfigFragment {
            ignore_patterns: self.ignore_patterns,
            globals,
            presets: self.presets,
            extra: self.extra,
            source: Some(source_id.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalMode;

    #[test]
    fn test_preset_ref_validation() {
        assert!(PresetRef::new("js/recommended").is_valid());
        assert!(PresetRef::new("plugin:prettier/recommended").is_valid());
        assert!(PresetRef::new("@scope/config").is_valid());
        assert!(PresetRef::new("prettier-compat").is_valid());

        assert!(!PresetRef::new("").is_valid());
        assert!(!PresetRef::new("   ").is_valid());
        assert!(!PresetRef::new("js recommended").is_valid());
        assert!(!PresetRef::new("/leading-slash").is_valid());
        assert!(!PresetRef::new("tab\there").is_valid());
    }

    #[test]
    fn test_fragment_deserialization_collects_extra_keys() {
        let json = r#"{
            "ignorePatterns": ["node_modules", "dist"],
            "globals": { "window": "readonly", "legacy": true },
            "presets": ["js/recommended"],
            "prettierCompat": true
        }"#;

        let fragment: ConfigFragment = serde_json::from_str(json).unwrap();
        assert_eq!(fragment.ignore_patterns.len(), 2);
        assert_eq!(
            fragment.globals.get("legacy"),
            Some(&GlobalSetting::Flag(true))
        );
        assert_eq!(fragment.presets, vec![PresetRef::new("js/recommended")]);
        assert_eq!(
            fragment.extra.get("prettierCompat"),
            Some(&serde_json::Value::Bool(true))
        );
        assert!(fragment.source.is_none());
    }

    #[test]
    fn test_fragment_aliases() {
        let json = r#"{ "ignores": ["build"], "extends": ["base"] }"#;
        let fragment: ConfigFragment = serde_json::from_str(json).unwrap();
        assert!(fragment.ignore_patterns.contains("build"));
        assert_eq!(fragment.presets, vec![PresetRef::new("base")]);
        assert!(fragment.extra.is_empty());
    }

    #[test]
    fn test_environment_expansion_order() {
        let file = FragmentFile {
            environments: vec!["browser".to_string()],
            globals: IndexMap::from([("window".to_string(), GlobalSetting::from("writable"))]),
            ..Default::default()
        };

        let fragment = file
            .into_fragment(&EnvironmentRegistry::builtin(), "test.json")
            .unwrap();

        // Explicit globals win over environment globals
        assert_eq!(
            fragment.globals.get("window").and_then(GlobalSetting::mode),
            Some(GlobalMode::Writable)
        );
        assert_eq!(
            fragment.globals.get("document").and_then(GlobalSetting::mode),
            Some(GlobalMode::ReadOnly)
        );
        assert_eq!(fragment.source.as_deref(), Some("test.json"));
    }

    #[test]
    fn test_unknown_environment_is_parse_error() {
        let file = FragmentFile {
            environments: vec!["mars".to_string()],
            ..Default::default()
        };

        let err = file
            .into_fragment(&EnvironmentRegistry::builtin(), "test.json")
            .unwrap_err();
        assert!(matches!(err, LintrcError::ParseError { .. }));
        assert!(err.to_string().contains("mars"));
    }

    #[test]
    fn test_schema_key_is_not_extra() {
        let json = r#"{ "$schema": "./schema.json", "presets": ["a"] }"#;
        let file: FragmentFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.schema.as_deref(), Some("./schema.json"));
        assert!(file.extra.is_empty());
    }
}
