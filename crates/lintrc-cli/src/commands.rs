//! Command implementations for the lintrc CLI

use lintrc_core::config::{
    CONFIG_FILE_NAMES, ConfigFormat, FileFragmentLoader, FragmentFile, FragmentLoader,
    FragmentSource, PresetRef, SCHEMA_ID, builtin_fragment_file, fragment_schema,
};
use lintrc_core::{LintrcError, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::output::ResolvedPrinter;
use crate::{ConfigFileFormat, OutputFormat};

/// Resolve command implementation
pub fn resolve_command(
    sources: Vec<FragmentSource>,
    format: OutputFormat,
    env_only: bool,
) -> Result<()> {
    let sources = FileFragmentLoader::sources_or_discover(sources, None)?;
    debug!("Resolving sources: {:?}", sources);

    let loader = FileFragmentLoader::default();
    let resolved = loader.resolve(&sources)?;

    let printer = ResolvedPrinter::new(format);
    if env_only {
        printer.print_globals(&resolved)
    } else {
        printer.print(&resolved, &sources)
    }
}

/// Validate command implementation
pub fn validate_command(sources: Vec<FragmentSource>) -> Result<()> {
    let sources = FileFragmentLoader::sources_or_discover(sources, None)?;
    debug!("Validating sources: {:?}", sources);

    let loader = FileFragmentLoader::default();
    let resolved = loader.resolve(&sources)?;
    // Invalid ignore globs only surface when compiled
    resolved.ignore_matcher()?;

    println!("✅ Configuration is valid");
    println!("   Sources: {}", sources.len());
    println!("   Ignore patterns: {}", resolved.ignore_patterns().len());
    println!("   Globals: {}", resolved.globals().len());
    println!("   Presets: {}", resolved.presets().len());

    Ok(())
}

/// Check-ignore command implementation
pub fn check_ignore_command(paths: Vec<PathBuf>, sources: Vec<FragmentSource>) -> Result<()> {
    let sources = FileFragmentLoader::sources_or_discover(sources, None)?;
    let loader = FileFragmentLoader::default();
    let matcher = loader.resolve(&sources)?.ignore_matcher()?;

    let cwd = std::env::current_dir()
        .and_then(|dir| dir.canonicalize())
        .map_err(|e| LintrcError::io_error(".", e))?;
    let root = FileFragmentLoader::project_root(&sources, &cwd)?;

    for path in &paths {
        let absolute = cwd.join(path);
        let ignored = matcher.is_ignored_under(&absolute, &root);
        match matcher.matching_pattern_under(&absolute, &root) {
            Some(pattern) if ignored => {
                println!("{}: ignored by '{}'", path.display(), pattern)
            }
            _ => println!("{}: not ignored", path.display()),
        }
    }

    Ok(())
}

/// Envs command implementation
pub fn envs_command(name: Option<String>, detailed: bool) -> Result<()> {
    let loader = FileFragmentLoader::default();
    let registry = loader.environments();

    if let Some(name) = name {
        let environment = registry.get(&name).ok_or_else(|| {
            LintrcError::config_error(format!(
                "Unknown environment '{name}' (known: {})",
                registry.names().collect::<Vec<_>>().join(", ")
            ))
        })?;
        for (global, mode) in environment.globals() {
            println!("{global}: {mode}");
        }
        return Ok(());
    }

    println!("Available Environments:");
    println!("=======================");
    for environment in registry.iter() {
        println!("  {} ({} globals)", environment.name(), environment.globals().len());
        if detailed {
            for (global, mode) in environment.globals() {
                println!("    {global}: {mode}");
            }
        }
    }

    Ok(())
}

/// Schema command implementation
pub fn schema_command(output: Option<PathBuf>) -> Result<()> {
    let schema = fragment_schema();
    let rendered = serde_json::to_string_pretty(&schema)
        .map_err(|e| LintrcError::config_error(format!("Failed to serialize schema: {e}")))?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .map_err(|e| LintrcError::io_error(parent, e))?;
            }
            std::fs::write(&path, rendered).map_err(|e| LintrcError::io_error(&path, e))?;
            info!("Schema written to {}", path.display());
            println!("✓ Generated JSON Schema: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Init command implementation
pub fn init_command(format: ConfigFileFormat, force: bool, prettier: bool) -> Result<()> {
    debug!("Initializing configuration file with format: {:?}", format);

    let (filename, config_format) = match format {
        ConfigFileFormat::Json => (CONFIG_FILE_NAMES[0], ConfigFormat::Json),
        ConfigFileFormat::Jsonc => (CONFIG_FILE_NAMES[1], ConfigFormat::Json5),
        ConfigFileFormat::Toml => (CONFIG_FILE_NAMES[2], ConfigFormat::Toml),
        ConfigFileFormat::Yaml => (CONFIG_FILE_NAMES[3], ConfigFormat::Yaml),
    };

    let config_path = PathBuf::from(filename);

    if config_path.exists() && !force {
        return Err(LintrcError::config_error(format!(
            "Configuration file '{filename}' already exists. Use --force to overwrite."
        )));
    }

    let mut starter = starter_config(prettier)?;
    if matches!(config_format, ConfigFormat::Json | ConfigFormat::Json5) {
        starter.schema = Some(SCHEMA_ID.to_string());
    }

    let content = match config_format {
        ConfigFormat::Json | ConfigFormat::Json5 => serde_json::to_string_pretty(&starter)
            .map_err(|e| LintrcError::config_error(format!("Failed to serialize JSON: {e}")))?,
        ConfigFormat::Yaml => serde_yaml::to_string(&starter)
            .map_err(|e| LintrcError::config_error(format!("Failed to serialize YAML: {e}")))?,
        ConfigFormat::Toml => toml::to_string_pretty(&starter)
            .map_err(|e| LintrcError::config_error(format!("Failed to serialize TOML: {e}")))?,
    };

    std::fs::write(&config_path, content).map_err(|e| LintrcError::io_error(&config_path, e))?;

    println!("✅ Created configuration file: {filename}");
    println!("   Edit the file to customize ignore patterns, globals and presets.");

    Ok(())
}

/// Starter file based on the `recommended` built-in fragment
fn starter_config(prettier: bool) -> Result<FragmentFile> {
    let mut starter = builtin_fragment_file("recommended")
        .ok_or_else(|| LintrcError::config_error("Missing built-in fragment 'recommended'"))?;
    if prettier {
        starter.presets.push(PresetRef::new("prettier-compat"));
    }
    Ok(starter)
}
