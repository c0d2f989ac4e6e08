//! lintrc core
//!
//! Loading, merging and validation of lint configuration fragments.
//! Rules, parsing and reporting belong to the lint engine consuming
//! [`ResolvedConfig`]; this crate only composes its configuration.

pub mod config;
pub mod error;
pub mod result;

pub use config::{
    ConfigFormat, ConfigFragment, ConfigResolver, Environment, EnvironmentRegistry,
    FileFragmentLoader, FragmentLoader, FragmentSource, GlobalMode, GlobalSetting, IgnoreMatcher,
    PresetRef, ResolvedConfig,
};
pub use error::{ErrorKind, LintrcError};
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintrc=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
