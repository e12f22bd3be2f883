//! edaa CLI: inspect EDA tool projects from the command line.
//!
//! Provides `edaa files` for listing the files of a Vivado project, filtered
//! by type and fileset, and `edaa summary` for an overview of its filesets
//! and VHDL libraries.

#![warn(missing_docs)]

mod files;
mod logging;
mod report;
mod summary;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use edaa_model::FileType;
use edaa_vivado::{load_options, ImportOptions};

/// edaa: an abstract model of EDA tool projects.
#[derive(Parser, Debug)]
#[command(name = "edaa", version, about = "Inspect EDA tool projects")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML file with import options.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the files of a project.
    Files(FilesArgs),
    /// Show the filesets and libraries of a project.
    Summary(SummaryArgs),
}

/// Arguments for the `edaa files` subcommand.
#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// Vivado project file (`*.xpr`).
    pub project: PathBuf,

    /// Only list files of this type or its subtypes (e.g. `HDLSourceFile`).
    #[arg(short = 't', long = "type", default_value = "Any")]
    pub file_type: FileType,

    /// Only list files of this fileset.
    #[arg(long)]
    pub fileset: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `edaa summary` subcommand.
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Vivado project file (`*.xpr`).
    pub project: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Options passed to the importer.
    pub options: ImportOptions,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let options = match cli.config.as_deref().map(load_options).transpose() {
        Ok(options) => options.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    let global = GlobalArgs { options };

    let result = match cli.command {
        Command::Files(ref args) => files::run(args, &global),
        Command::Summary(ref args) => summary::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
