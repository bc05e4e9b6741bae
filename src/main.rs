//! rmtab CLI
//!
//! Turn RepeatMasker reports into tab separated tables.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use log::info;
use rmtab::{extract_proportions, merge_reports, MergeOptions, OutputConfig};

#[derive(Parser)]
#[command(name = "rmtab")]
#[command(author, version, about = "Parse and merge the output from RepeatMasker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract repeat proportions from the RepeatMasker output table
    Proportions {
        /// Path to the table (*.tbl) output from RepeatMasker
        #[arg(short = 't', long)]
        rm_table: PathBuf,

        /// Path to the output directory
        #[arg(short, long, default_value = ".")]
        outdir: PathBuf,

        /// Basename for the output files [default: RepeatMasker_YYYYMMDD]
        #[arg(short, long)]
        basename: Option<String>,
    },

    /// Merge the cross match (*.out) and divergence summary (*.divsum) tables
    Merge {
        /// Path to the cross match (*.out) table from RepeatMasker
        #[arg(short, long)]
        cross_match: PathBuf,

        /// Path to the divergence summary (*.divsum) table from RepeatMasker
        #[arg(short, long)]
        divsum: PathBuf,

        /// Path to the output directory
        #[arg(short, long, default_value = ".")]
        outdir: PathBuf,

        /// Basename for the output files [default: RepeatMasker_YYYYMMDD]
        #[arg(short, long)]
        basename: Option<String>,

        /// Minimum length of well characterized bases (wellCharLen) needed to keep a repeat
        #[arg(short, long)]
        min_length: Option<u64>,

        /// Also fail when the class/family strings of matched records differ
        #[arg(long)]
        strict_family: bool,
    },
}

fn now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn output(outdir: PathBuf, basename: Option<String>) -> OutputConfig {
    let basename =
        basename.unwrap_or_else(|| OutputConfig::default_basename(Local::now().date_naive()));
    OutputConfig::new(outdir, basename)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    info!("rmtab started on {}", now());

    match cli.command {
        Commands::Proportions {
            rm_table,
            outdir,
            basename,
        } => {
            let out = output(outdir, basename);
            extract_proportions(&rm_table, &out)
                .with_context(|| format!("extracting proportions from {}", rm_table.display()))?;
        }
        Commands::Merge {
            cross_match,
            divsum,
            outdir,
            basename,
            min_length,
            strict_family,
        } => {
            let out = output(outdir, basename);
            let options = MergeOptions {
                min_len: min_length,
                strict_family,
            };
            merge_reports(&cross_match, &divsum, &out, &options).with_context(|| {
                format!(
                    "merging {} with {}",
                    cross_match.display(),
                    divsum.display()
                )
            })?;
        }
    }

    info!("rmtab finished on {}", now());
    Ok(())
}
