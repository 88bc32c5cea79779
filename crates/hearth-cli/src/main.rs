//! hearth CLI - local state directory bootstrapping.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hearth_fs::{Layout, exit};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "hearth")]
#[command(author, version, about = "Local state directory manager")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    format: output::OutputFormat,

    /// State root (defaults to $HEARTH_ROOT, then ~/.hearth)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the directory tree under the root
    Init {
        /// Move deprecated directories onto their replacements
        #[arg(long)]
        migrate: bool,
    },

    /// Print every directory in the layout
    Paths,

    /// Empty the scratch area, or a named subdirectory of the root
    Clean {
        /// Subdirectory of the root to clear (defaults to scratch)
        dir: Option<String>,
    },

    /// Copy a file or directory tree
    #[command(alias = "cp")]
    Copy {
        /// Source file or directory
        src: PathBuf,

        /// Destination path
        dst: PathBuf,
    },

    /// Open a file under the root in $EDITOR
    Edit {
        /// File to edit, absolute or relative to the root
        file: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let layout = match cli.root {
        Some(root) => Layout::with_root(root),
        None => Layout::resolve(),
    };

    let result = run(&layout, cli.command, cli.format).map_err(|err| format!("{err:#}"));
    exit::if_exit(result);
}

fn run(layout: &Layout, command: Commands, format: output::OutputFormat) -> Result<()> {
    match command {
        Commands::Init { migrate } => commands::init(layout, migrate, format),
        Commands::Paths => commands::paths(layout, format),
        Commands::Clean { dir } => commands::clean(layout, dir.as_deref(), format),
        Commands::Copy { src, dst } => commands::copy(&src, &dst, format),
        Commands::Edit { file } => commands::edit(layout, &file),
    }
}
