//! Fragment merging
//!
//! Combines an ordered list of fragments into one [`ResolvedConfig`]:
//! - ignore patterns are unioned, keeping first-seen order
//! - globals are last-write-wins per identifier
//! - presets are concatenated with duplicates collapsed to their first position
//! - tool-specific flags are last-write-wins per key

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use super::fragment::{ConfigFragment, PresetRef};
use super::global_mode::GlobalMode;
use super::resolved::ResolvedConfig;
use crate::{LintrcError, Result};

/// Stateless resolver for configuration fragments
pub struct ConfigResolver;

impl ConfigResolver {
    /// Merge `fragments` strictly in the order supplied
    ///
    /// Fails with [`LintrcError::InvalidFragment`] when a global carries an
    /// unrecognized mode and with [`LintrcError::InvalidPreset`] when a preset
    /// reference is malformed. Nothing is returned on failure.
    pub fn resolve(fragments: &[ConfigFragment]) -> Result<ResolvedConfig> {
        debug!("Resolving {} configuration fragment(s)", fragments.len());

        let mut ignore_patterns: IndexSet<String> = IndexSet::new();
        let mut globals: IndexMap<String, GlobalMode> = IndexMap::new();
        let mut presets: Vec<PresetRef> = Vec::new();
        let mut extra: IndexMap<String, serde_json::Value> = IndexMap::new();

        for (index, fragment) in fragments.iter().enumerate() {
            trace!(
                "Merging fragment #{} from {}",
                index,
                fragment.source_label()
            );

            for pattern in &fragment.ignore_patterns {
                if !ignore_patterns.insert(pattern.clone()) {
                    trace!("Ignore pattern '{}' already present", pattern);
                }
            }

            for (name, setting) in &fragment.globals {
                let mode = setting.mode().ok_or_else(|| {
                    LintrcError::invalid_fragment(index, name.clone(), setting.to_string())
                })?;
                // Overwriting keeps the identifier's original position
                globals.insert(name.clone(), mode);
            }

            for (position, preset) in fragment.presets.iter().enumerate() {
                if !preset.is_valid() {
                    return Err(LintrcError::invalid_preset(
                        index,
                        position,
                        preset.as_str(),
                    ));
                }
                if !presets.contains(preset) {
                    presets.push(preset.clone());
                }
            }

            for (key, value) in &fragment.extra {
                extra.insert(key.clone(), value.clone());
            }
        }

        debug!(
            "Resolved {} ignore pattern(s), {} global(s), {} preset(s)",
            ignore_patterns.len(),
            globals.len(),
            presets.len()
        );

        Ok(ResolvedConfig::new(ignore_patterns, globals, presets, extra))
    }
}
