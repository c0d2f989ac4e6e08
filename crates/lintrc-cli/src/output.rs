//! Output formatting for resolved configurations

use colored::*;
use lintrc_core::config::{ConfigFormat, FragmentSource, GlobalMode, ResolvedConfig};
use lintrc_core::{LintrcError, Result};

use crate::OutputFormat;

/// Prints a resolved configuration in the requested format
pub struct ResolvedPrinter {
    format: OutputFormat,
}

impl ResolvedPrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn print(&self, resolved: &ResolvedConfig, sources: &[FragmentSource]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                print!("{}", render_human(resolved, sources));
                Ok(())
            }
            OutputFormat::Json => self.print_rendered(resolved, ConfigFormat::Json),
            OutputFormat::Yaml => self.print_rendered(resolved, ConfigFormat::Yaml),
            OutputFormat::Toml => self.print_rendered(resolved, ConfigFormat::Toml),
        }
    }

    /// Print only the resolved globals
    pub fn print_globals(&self, resolved: &ResolvedConfig) -> Result<()> {
        let globals = resolved.globals();
        let rendered = match self.format {
            OutputFormat::Human => {
                let mut out = String::new();
                for (name, mode) in globals {
                    out.push_str(&format!("{name}: {}\n", mode_label(*mode)));
                }
                out
            }
            OutputFormat::Json => serde_json::to_string_pretty(globals).map_err(|e| {
                LintrcError::config_error(format!("Failed to serialize JSON: {e}"))
            })?,
            OutputFormat::Yaml => serde_yaml::to_string(globals).map_err(|e| {
                LintrcError::config_error(format!("Failed to serialize YAML: {e}"))
            })?,
            OutputFormat::Toml => toml::to_string_pretty(globals).map_err(|e| {
                LintrcError::config_error(format!("Failed to serialize TOML: {e}"))
            })?,
        };
        if !rendered.is_empty() {
            println!("{}", rendered.trim_end());
        }
        Ok(())
    }

    fn print_rendered(&self, resolved: &ResolvedConfig, format: ConfigFormat) -> Result<()> {
        let rendered = resolved.render(format)?;
        println!("{}", rendered.trim_end());
        Ok(())
    }
}

fn mode_label(mode: GlobalMode) -> ColoredString {
    match mode {
        GlobalMode::ReadOnly => mode.as_str().green(),
        GlobalMode::Writable => mode.as_str().yellow(),
        GlobalMode::Off => mode.as_str().red(),
    }
}

fn render_human(resolved: &ResolvedConfig, sources: &[FragmentSource]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Resolved Configuration:".bold()));
    out.push_str(&format!(
        "  Sources: {}\n",
        sources
            .iter()
            .map(FragmentSource::id)
            .collect::<Vec<_>>()
            .join(" -> ")
    ));

    out.push_str(&format!(
        "\n{} ({})\n",
        "Ignore patterns".bold(),
        resolved.ignore_patterns().len()
    ));
    for pattern in resolved.ignore_patterns() {
        out.push_str(&format!("  {pattern}\n"));
    }

    out.push_str(&format!(
        "\n{} ({})\n",
        "Globals".bold(),
        resolved.globals().len()
    ));
    for (name, mode) in resolved.globals() {
        out.push_str(&format!("  {name}: {}\n", mode_label(*mode)));
    }

    out.push_str(&format!(
        "\n{} ({})\n",
        "Presets".bold(),
        resolved.presets().len()
    ));
    for (position, preset) in resolved.presets().iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", position + 1, preset.as_str().cyan()));
    }

    if !resolved.extra().is_empty() {
        out.push_str(&format!("\n{}\n", "Settings".bold()));
        for (key, value) in resolved.extra() {
            out.push_str(&format!("  {key}: {value}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintrc_core::config::{ConfigFragment, ConfigResolver};

    #[test]
    fn test_human_output_lists_sections() {
        colored::control::set_override(false);

        let fragment = ConfigFragment::new()
            .with_ignore("dist")
            .with_global("window", "readonly")
            .with_preset("js/recommended")
            .with_preset("prettier-compat");
        let resolved = ConfigResolver::resolve(&[fragment]).unwrap();
        let sources = vec![FragmentSource::Builtin("recommended-prettier".to_string())];

        let out = render_human(&resolved, &sources);
        assert!(out.contains("Sources: builtin:recommended-prettier"));
        assert!(out.contains("Ignore patterns (1)"));
        assert!(out.contains("window: readonly"));
        assert!(out.contains("1. js/recommended"));
        assert!(out.contains("2. prettier-compat"));
        assert!(!out.contains("Settings"));
    }
}
