mod error;
mod indexer;
mod patterns;
mod renamer;
mod summary;
mod types;

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{LevelFilter, info};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Normalize and index exam question images", long_about = None)]
struct Args {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rename qN files to QN and stepN folders to SN
    Rename {
        /// Folder to normalize
        #[arg(long, short = 'r', default_value = "images")]
        root: PathBuf,
    },

    /// Write a JSON index of <base>/<year>/<S folder>/<Q image>.png
    Index {
        /// Folder holding one sub-folder per year
        #[arg(long, short = 'b', default_value = "images/questions")]
        base: PathBuf,

        /// JSON file to write
        #[arg(long, short = 'o', default_value = "questions.json")]
        output: PathBuf,
    },

    /// Rename, then index
    Run {
        #[arg(long, short = 'r', default_value = "images")]
        root: PathBuf,

        #[arg(long, short = 'b', default_value = "images/questions")]
        base: PathBuf,

        #[arg(long, short = 'o', default_value = "questions.json")]
        output: PathBuf,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Rename { root } => rename(&root),
        Command::Index { base, output } => index(&base, &output),
        Command::Run { root, base, output } => {
            rename(&root);
            println!();
            index(&base, &output);
        }
    }
}

// Level comes from the command line only; RUST_LOG is not consulted.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Per-entry failures are already printed by the renamer and never change
/// the exit status.
fn rename(root: &Path) {
    let report = match renamer::rename_tree(root) {
        Ok(report) => report,
        Err(e) => {
            println!("{} {e}", "❌".red());
            return;
        }
    };

    for r in &report.renamed {
        info!("{:?} {} -> {}", r.kind, r.from.display(), r.to.display());
    }

    if !report.failures.is_empty() {
        println!("\n{}", "Entries left unchanged:".yellow());
        for f in &report.failures {
            println!("  - {} ({})", f.path.display(), f.cause);
        }
    }
}

fn index(base: &Path, output: &Path) {
    match indexer::generate(base, output) {
        Ok(outcome) => summary::print_index_summary(
            &outcome.records,
            &output.display().to_string(),
            outcome.bytes_written,
        ),
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            std::process::exit(1);
        }
    }
}
