//! lintrc CLI
//!
//! Command-line interface for loading, merging and inspecting lint configuration

mod commands;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use lintrc_core::{FragmentSource, Result, init_tracing};
use std::io;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "lintrc")]
#[command(about = "lintrc: resolve layered lint configuration fragments")]
#[command(version = lintrc_core::VERSION)]
#[command(
    long_about = "lintrc loads lint configuration fragments, merges them in order and prints\n\
the resolved ignore patterns, globals and presets a lint engine should use.\n\
\n\
Examples:\n  \
lintrc resolve                                  # Resolve the discovered config file\n  \
lintrc resolve base.json builtin:prettier       # Merge a file with a built-in fragment\n  \
lintrc resolve -f yaml .lintrc.jsonc            # Print as YAML\n  \
lintrc check-ignore dist/app.js src/index.js    # Ask which paths are skipped\n  \
lintrc envs browser                             # Show the globals of an environment"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(
        long,
        value_enum,
        help = "Generate completion script for specified shell"
    )]
    generate_completion: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge configuration sources and print the result
    Resolve {
        /// Sources to merge, in order
        #[arg(help = "Config files or builtin:<name> (default: discovered config file)")]
        sources: Vec<FragmentSource>,

        /// Output format
        #[arg(short, long, default_value = "human", help = "Output format")]
        format: OutputFormat,

        /// Print only the resolved globals
        #[arg(long, help = "Print only the resolved globals")]
        env_only: bool,
    },

    /// Load and merge sources, reporting the first problem found
    Validate {
        /// Sources to validate, in order
        #[arg(help = "Config files or builtin:<name> (default: discovered config file)")]
        sources: Vec<FragmentSource>,
    },

    /// Report which paths the resolved configuration ignores
    CheckIgnore {
        /// Paths to check, relative to the current directory
        #[arg(required = true, help = "Paths to check")]
        paths: Vec<PathBuf>,

        /// Configuration sources (can be used multiple times)
        #[arg(short = 'c', long = "config", help = "Config file or builtin:<name>")]
        sources: Vec<FragmentSource>,
    },

    /// List the known environments
    Envs {
        /// Environment to show
        #[arg(help = "Show the globals of a single environment")]
        name: Option<String>,

        /// Show the globals of every environment
        #[arg(long, help = "Show the globals of every environment")]
        detailed: bool,
    },

    /// Print the JSON Schema of configuration files
    Schema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long, help = "Output file path")]
        output: Option<PathBuf>,
    },

    /// Initialize a new configuration file
    Init {
        /// Configuration file format
        #[arg(long, default_value = "json", help = "Configuration file format")]
        format: ConfigFileFormat,

        /// Overwrite existing configuration file
        #[arg(long, help = "Overwrite existing configuration file")]
        force: bool,

        /// Include the formatter-compatibility preset
        #[arg(long, help = "Add the prettier-compat preset")]
        prettier: bool,
    },

    /// Show version information
    #[command(alias = "ver")]
    Version {
        /// Show detailed version information
        #[arg(long, help = "Show detailed version and build information")]
        detailed: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Human-readable summary with colors
    Human,
    /// JSON for programmatic consumption
    Json,
    /// YAML
    Yaml,
    /// TOML
    Toml,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ConfigFileFormat {
    /// .lintrc.json
    Json,
    /// .lintrc.jsonc (comments allowed)
    Jsonc,
    /// lintrc.yaml
    Yaml,
    /// .lintrc.toml
    Toml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.generate_completion {
        generate_completion_script(shell);
        return Ok(());
    }

    if cli.no_color || std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    }

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "lintrc=error", // Only errors by default
        1 => "lintrc=warn",
        2 => "lintrc=info",
        3 => "lintrc=debug",
        _ => "lintrc=trace",
    };
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    init_tracing();

    match run_command(cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("lintrc failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn generate_completion_script(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Resolve {
            sources,
            format,
            env_only,
        }) => commands::resolve_command(sources, format, env_only),

        Some(Commands::Validate { sources }) => commands::validate_command(sources),

        Some(Commands::CheckIgnore { paths, sources }) => {
            commands::check_ignore_command(paths, sources)
        }

        Some(Commands::Envs { name, detailed }) => commands::envs_command(name, detailed),

        Some(Commands::Schema { output }) => commands::schema_command(output),

        Some(Commands::Init {
            format,
            force,
            prettier,
        }) => commands::init_command(format, force, prettier),

        Some(Commands::Version { detailed }) => {
            if detailed {
                println!("lintrc {}", lintrc_core::VERSION);
                println!("Build information:");
                println!("  Target: {}", std::env::consts::ARCH);
                println!("  OS: {}", std::env::consts::OS);
            } else {
                println!("{}", lintrc_core::VERSION);
            }
            Ok(())
        }

        None => {
            // No subcommand provided, show help
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
