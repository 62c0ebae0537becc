mod config;
mod discovery;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use revive_core::{analyze_project, ImportLexer, NoImports};
use revive_ecmascript::TreeSitterImportLexer;
use revive_report::{json, text};

use config::{Config, OutputFormat, CONFIG_FILE_NAME};

#[derive(Parser)]
#[command(name = "revive")]
#[command(about = "Diagnose why a project stalled and how to bring it back")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a project directory and print the diagnosis
    Analyze {
        /// Path to the project root
        path: PathBuf,
        /// Config file path (defaults to .revive.toml in project root or an ancestor)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Create a default .revive.toml configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            path,
            config,
            format,
            compact,
        } => cmd_analyze(&path, config.as_deref(), format, compact),
        Commands::Init { force } => cmd_init(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }
}

fn cmd_analyze(
    path: &Path,
    config_path: Option<&Path>,
    format: Option<OutputFormat>,
    compact: bool,
) -> Result<()> {
    let config = load_config(path, config_path)?;
    let files = discovery::collect_files(path, &config.discovery)?;
    let lexer = import_lexer();
    let result = analyze_project(&files, lexer.as_ref());

    let report = match format.unwrap_or(config.output.format) {
        OutputFormat::Text => text::format_report(&result),
        OutputFormat::Json => format!("{}\n", json::format_report(&result, compact)),
    };
    print!("{report}");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let target = PathBuf::from(CONFIG_FILE_NAME);
    if target.exists() && !force {
        anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
    }
    std::fs::write(&target, Config::default_toml())?;
    println!("Created {CONFIG_FILE_NAME} with default configuration.");
    Ok(())
}

fn load_config(project_path: &Path, config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(p) => Config::load(p),
        None => Ok(Config::load_or_default(project_path)),
    }
}

/// The tree-sitter lexer, or a lexer that finds nothing if its grammar fails to load.
fn import_lexer() -> Box<dyn ImportLexer> {
    match TreeSitterImportLexer::new() {
        Ok(lexer) => Box::new(lexer),
        Err(e) => {
            tracing::warn!("import lexer unavailable, imports will not be counted: {e:#}");
            Box::new(NoImports)
        }
    }
}
