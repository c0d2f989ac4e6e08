//! Configuration composition for lint tools
//!
//! This module loads configuration fragments, merges them in declaration order
//! and exposes the merged result to a lint engine:
//! - JSON, JSONC/JSON5, YAML and TOML fragment files
//! - Built-in fragments addressed as `builtin:<name>`
//! - Auto-discovery by traversing up directories
//! - Explicit environment registries instead of ambient global sets
//! - JSON Schema generation via schemars
//!
//! ## Fragment Files
//!
//! ```jsonc
//! {
//!   "ignorePatterns": ["node_modules", "dist"],
//!   "environments": ["browser"],
//!   "globals": { "__APP_VERSION__": "readonly" },
//!   "presets": ["js/recommended", "prettier-compat"]
//! }
//! ```
//!
//! ## Merging
//!
//! Fragments are merged strictly in the order supplied. Ignore patterns are
//! unioned, globals are last-write-wins, and presets keep the position of
//! their first occurrence:
//!
//! ```
//! use lintrc_core::config::{ConfigFragment, ConfigResolver, GlobalMode};
//!
//! let base = ConfigFragment::new()
//!     .with_ignore("dist")
//!     .with_global("window", "readonly")
//!     .with_preset("js/recommended");
//! let prettier = ConfigFragment::new().with_preset("prettier-compat");
//!
//! let resolved = ConfigResolver::resolve(&[base, prettier]).unwrap();
//! assert_eq!(resolved.global_mode("window"), Some(GlobalMode::ReadOnly));
//! assert_eq!(resolved.presets().len(), 2);
//! ```

mod environment;
mod format;
mod fragment;
mod global_mode;
mod ignore;
mod loader;
mod resolved;
mod resolver;
mod schema;

pub use environment::{Environment, EnvironmentRegistry};
pub use format::ConfigFormat;
pub use fragment::{ConfigFragment, FragmentFile, PresetRef};
pub use global_mode::{GlobalMode, GlobalSetting};
pub use ignore::IgnoreMatcher;
pub use loader::{
    BUILTIN_FRAGMENTS, BUILTIN_PREFIX, CONFIG_FILE_NAMES, FileFragmentLoader, FragmentLoader,
    FragmentSource, builtin_fragment_file,
};
pub use resolved::ResolvedConfig;
pub use resolver::ConfigResolver;
pub use schema::{SCHEMA_ID, fragment_schema};
