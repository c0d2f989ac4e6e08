//! Fragment loading and configuration file discovery

use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexSet;
use tracing::{debug, info};

use super::environment::EnvironmentRegistry;
use super::format::ConfigFormat;
use super::fragment::{ConfigFragment, FragmentFile, PresetRef};
use super::resolved::ResolvedConfig;
use super::resolver::ConfigResolver;
use crate::{LintrcError, Result};

/// Prefix selecting a built-in fragment instead of a file
pub const BUILTIN_PREFIX: &str = "builtin:";

/// Config file names searched by [`FileFragmentLoader::auto_discover`], in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".lintrc.json",
    ".lintrc.jsonc",
    ".lintrc.toml",
    "lintrc.yaml",
    "lintrc.yml",
    "lintrc.json",
];

/// Names of the fragments shipped with the tool
pub const BUILTIN_FRAGMENTS: &[&str] = &["recommended", "recommended-prettier", "prettier"];

const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    "dist",
    "eslint.config.js",
    "webpack.common.js",
    "webpack.dev.js",
    "webpack.prod.js",
];

/// Identifier of one configuration source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FragmentSource {
    /// A configuration file on disk
    File(PathBuf),
    /// A fragment shipped with the tool, written `builtin:<name>`
    Builtin(String),
}

impl FragmentSource {
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl FromStr for FragmentSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.strip_prefix(BUILTIN_PREFIX) {
            Some(name) => Self::Builtin(name.to_string()),
            None => Self::File(PathBuf::from(s)),
        })
    }
}

impl fmt::Display for FragmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin(name) => write!(f, "{BUILTIN_PREFIX}{name}"),
        }
    }
}

impl From<PathBuf> for FragmentSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

/// Reads one configuration source into a fragment
///
/// Fails with [`LintrcError::LoadError`] when the source is missing or
/// unreadable and with [`LintrcError::ParseError`] when its content is invalid.
pub trait FragmentLoader {
    fn load(&self, source: &FragmentSource) -> Result<ConfigFragment>;

    /// Load every source in order, stopping at the first failure
    fn load_all(&self, sources: &[FragmentSource]) -> Result<Vec<ConfigFragment>> {
        sources.iter().map(|source| self.load(source)).collect()
    }

    /// Load then merge `sources`
    fn resolve(&self, sources: &[FragmentSource]) -> Result<ResolvedConfig> {
        let fragments = self.load_all(sources)?;
        ConfigResolver::resolve(&fragments)
    }
}

/// Loads fragments from files and the built-in set
#[derive(Debug, Clone)]
pub struct FileFragmentLoader {
    environments: EnvironmentRegistry,
}

impl Default for FileFragmentLoader {
    fn default() -> Self {
        Self::new(EnvironmentRegistry::builtin())
    }
}

impl FileFragmentLoader {
    pub fn new(environments: EnvironmentRegistry) -> Self {
        Self { environments }
    }

    pub fn environments(&self) -> &EnvironmentRegistry {
        &self.environments
    }

    /// Auto-discover a config file by traversing upward from `start_path`
    ///
    /// Each directory is searched for [`CONFIG_FILE_NAMES`] in order; the
    /// search stops at the first hit or at the filesystem root.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| LintrcError::io_error(start_path, e))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Pick the sources to resolve
    ///
    /// Explicit sources win; otherwise the discovered config file is used, and
    /// `builtin:recommended` when nothing is found.
    pub fn sources_or_discover(
        sources: Vec<FragmentSource>,
        start_dir: Option<&Path>,
    ) -> Result<Vec<FragmentSource>> {
        if !sources.is_empty() {
            return Ok(sources);
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        match Self::auto_discover(search_dir)? {
            Some(path) => Ok(vec![FragmentSource::File(path)]),
            None => {
                info!("No config file found, using {BUILTIN_PREFIX}recommended");
                Ok(vec![FragmentSource::Builtin("recommended".to_string())])
            }
        }
    }

    /// Directory that anchored ignore patterns are relative to
    ///
    /// This is the directory holding the first file source, or `cwd` when
    /// every source is built in. Relative file sources are joined to `cwd`.
    pub fn project_root(sources: &[FragmentSource], cwd: &Path) -> Result<PathBuf> {
        let config_file = sources.iter().find_map(|source| match source {
            FragmentSource::File(path) => Some(cwd.join(path)),
            FragmentSource::Builtin(_) => None,
        });

        let root = match config_file {
            Some(file) => {
                let file = file
                    .canonicalize()
                    .map_err(|e| LintrcError::io_error(&file, e))?;
                file.parent().map(Path::to_path_buf).unwrap_or(file)
            }
            None => cwd
                .canonicalize()
                .map_err(|e| LintrcError::io_error(cwd, e))?,
        };
        debug!("Project root: {}", root.display());
        Ok(root)
    }

    /// Load a fragment file, detecting the format from its extension
    pub fn load_file(&self, path: &Path) -> Result<ConfigFragment> {
        let source_id = path.display().to_string();

        if !path.exists() {
            return Err(LintrcError::load_error(&source_id, "file not found"));
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            LintrcError::parse_error(
                &source_id,
                "unsupported file extension (expected .json, .jsonc, .json5, .yaml, .yml or .toml)",
            )
        })?;

        let content = fs::read_to_string(path)
            .map_err(|e| LintrcError::load_error(&source_id, e.to_string()))?;

        debug!("Loading {} fragment from {}", format, source_id);
        let file = format.parse_fragment(&content, &source_id)?;
        file.into_fragment(&self.environments, &source_id)
    }

    /// Load one of [`BUILTIN_FRAGMENTS`]
    pub fn load_builtin(&self, name: &str) -> Result<ConfigFragment> {
        let source_id = format!("{BUILTIN_PREFIX}{name}");
        let file = builtin_fragment_file(name).ok_or_else(|| {
            LintrcError::load_error(
                &source_id,
                format!(
                    "unknown built-in fragment (available: {})",
                    BUILTIN_FRAGMENTS.join(", ")
                ),
            )
        })?;
        file.into_fragment(&self.environments, &source_id)
    }
}

impl FragmentLoader for FileFragmentLoader {
    fn load(&self, source: &FragmentSource) -> Result<ConfigFragment> {
        match source {
            FragmentSource::File(path) => self.load_file(path),
            FragmentSource::Builtin(name) => self.load_builtin(name),
        }
    }
}

/// File form of a built-in fragment, before environment expansion
///
/// The `recommended` and `recommended-prettier` fragments are independent;
/// neither is derived from the other at load time.
pub fn builtin_fragment_file(name: &str) -> Option<FragmentFile> {
    let recommended = || FragmentFile {
        ignore_patterns: DEFAULT_IGNORES.iter().map(|p| p.to_string()).collect::<IndexSet<_>>(),
        environments: vec!["browser".to_string()],
        presets: vec![PresetRef::new("js/recommended")],
        ..Default::default()
    };

    match name {
        "recommended" => Some(recommended()),
        "recommended-prettier" => {
            let mut file = recommended();
            file.presets.push(PresetRef::new("prettier-compat"));
            Some(file)
        }
        "prettier" => Some(FragmentFile {
            presets: vec![PresetRef::new("prettier-compat")],
            ..Default::default()
        }),
        _ => None,
    }
}
