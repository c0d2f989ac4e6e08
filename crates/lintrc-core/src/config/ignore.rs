//! Ignore pattern matching for the lint engine
//!
//! Patterns follow gitignore conventions:
//! - `name` (no slash) matches that file or directory at any depth
//! - `dir/` matches everything below `dir`
//! - `src/gen/*.js` matches relative to the project root
//! - `!pattern` re-includes paths an earlier pattern ignored
//!
//! The last matching pattern decides.

use glob::{MatchOptions, Pattern};
use std::path::{Component, Path};
use tracing::debug;

use crate::{LintrcError, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
struct IgnoreRule {
    original: String,
    globs: Vec<Pattern>,
    negated: bool,
}

impl IgnoreRule {
    fn parse(raw: &str) -> Result<Option<Self>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (negated, body) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let body = body.strip_prefix("./").unwrap_or(body);
        let (anchored, body) = match body.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        let (dir_only, body) = match body.strip_suffix('/') {
            Some(rest) => (true, rest),
            None => (false, body),
        };

        if body.is_empty() {
            return Err(LintrcError::config_error(format!(
                "Invalid ignore pattern '{raw}': empty after normalization"
            )));
        }

        let base = if anchored || body.contains('/') {
            body.to_string()
        } else {
            format!("**/{body}")
        };

        let mut sources = vec![format!("{base}/**")];
        if !dir_only {
            sources.insert(0, base);
        }

        let globs = sources
            .iter()
            .map(|source| {
                Pattern::new(source).map_err(|e| {
                    LintrcError::config_error(format!("Invalid ignore pattern '{raw}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Self {
            original: raw.to_string(),
            globs,
            negated,
        }))
    }

    fn matches(&self, path: &str) -> bool {
        self.globs
            .iter()
            .any(|glob| glob.matches_with(path, MATCH_OPTIONS))
    }
}

/// Compiled ignore patterns
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    rules: Vec<IgnoreRule>,
}

impl IgnoreMatcher {
    /// Compile patterns, failing on the first invalid glob
    pub fn new<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut rules = Vec::new();
        for pattern in patterns {
            if let Some(rule) = IgnoreRule::parse(pattern)? {
                rules.push(rule);
            }
        }
        debug!("Compiled {} ignore rule(s)", rules.len());
        Ok(Self { rules })
    }

    /// Check a path relative to the project root
    pub fn is_ignored(&self, path: &Path) -> bool {
        let normalized = normalize(path);
        if normalized.is_empty() {
            return false;
        }

        let mut ignored = false;
        for rule in &self.rules {
            if rule.negated == ignored && rule.matches(&normalized) {
                ignored = !rule.negated;
            }
        }
        ignored
    }

    /// Check a path that may be absolute, relative to `root`
    ///
    /// Absolute paths outside `root` are never ignored.
    pub fn is_ignored_under(&self, path: &Path, root: &Path) -> bool {
        relative_to(path, root).is_some_and(|relative| self.is_ignored(relative))
    }

    /// [`Self::matching_pattern`] for a path that may be absolute
    pub fn matching_pattern_under(&self, path: &Path, root: &Path) -> Option<&str> {
        relative_to(path, root).and_then(|relative| self.matching_pattern(relative))
    }

    /// The pattern that decided the outcome for `path`, if any
    pub fn matching_pattern(&self, path: &Path) -> Option<&str> {
        let normalized = normalize(path);
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.original.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> Option<&'a Path> {
    match path.strip_prefix(root) {
        Ok(relative) => Some(relative),
        Err(_) if path.is_relative() => Some(path),
        Err(_) => None,
    }
}

/// Join normal components with `/`, dropping `.` and root prefixes
///
/// `..` removes the previous component; it never climbs above the root.
fn normalize(path: &Path) -> String {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy()),
            Component::ParentDir => {
                parts.pop();
            }
            _ => {}
        }
    }
    parts.join("/")
}
