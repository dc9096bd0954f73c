use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use cligen_core::{parser, CommandSet};
use tracing::Level;

/// cligen - Derive command-line interfaces from Go functions
#[derive(Parser)]
#[command(name = "cligen")]
#[command(version)] // Auto-pull version from Cargo.toml
#[command(about = "Show the CLI that Go functions would generate", long_about = None)]
struct Cli {
    /// Go files or directories to inspect
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Help)]
    format: Format,

    /// Only show the command with this name
    #[arg(short, long)]
    command: Option<String>,

    /// Log debug details to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Rendered help text for each command
    Help,
    /// The extracted command models as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    configure_logging(cli.verbose, cli.quiet);

    let mut set = collect(&cli.paths)?;

    if let Some(name) = &cli.command {
        for file in &mut set.files {
            file.commands.retain(|command| &command.name == name);
        }
        set.files.retain(|file| !file.commands.is_empty());
        if set.files.is_empty() {
            bail!("no command named {}", name);
        }
    }

    match cli.format {
        Format::Help => {
            let mut blocks = Vec::with_capacity(set.command_count());
            for command in set.commands() {
                let help = command
                    .help()
                    .with_context(|| format!("rendering help for {}", command.name))?;
                blocks.push(help);
            }
            print!("{}", blocks.join("\n"));
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(&set.files).context("serializing commands")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Extract commands from every file argument and every Go file below each
/// directory argument
fn collect(paths: &[PathBuf]) -> Result<CommandSet> {
    let mut files: Vec<PathBuf> = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = cligen_core::discovery::discover_go_files(path);
            if found.is_empty() {
                tracing::warn!(dir = %path.display(), "no Go files found");
            }
            files.extend(found);
        } else {
            // Discovered paths are canonical; match them so duplicates collapse.
            // A missing file is kept as typed and reported by the extractor.
            files.push(path.canonicalize().unwrap_or_else(|_| path.clone()));
        }
    }

    let file_refs: Vec<&Path> = files.iter().map(|p| p.as_path()).collect();
    let set = parser::extract_files(&file_refs).context("extracting commands")?;
    tracing::info!(
        files = set.files.len(),
        commands = set.command_count(),
        "extraction finished"
    );

    Ok(set)
}

/// Log to stderr; `RUST_LOG` takes precedence over the flags
fn configure_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let log_level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
