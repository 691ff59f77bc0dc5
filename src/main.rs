use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use colored::Colorize;
use giab_fetch::config::Config;
use giab_fetch::dataset::DATASET_URL;
use giab_fetch::fetcher::{self, DownloadOutcome, Wget};
use giab_fetch::logging;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "giab-fetch", about = "Download dataset and save metadata.")]
struct Cli {
    /// Output directory where dataset files will be saved.
    #[arg(long = "output_dir")]
    output_dir: PathBuf,

    /// Name of the dataset.
    #[arg(long)]
    name: String,

    /// Optional path to a config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Download program to use instead of `wget` from PATH
    #[arg(long)]
    downloader: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let directive = if cli.verbose > 0 {
        logging::level_for(cli.verbose).to_string()
    } else {
        cfg.log_level.clone().unwrap_or_else(|| logging::level_for(0).to_string())
    };
    logging::init(&directive)?;

    // Accepted for interface compatibility; nothing depends on it.
    debug!(name = %cli.name, "dataset name");

    let tool = match cli.downloader.or(cfg.downloader) {
        Some(program) => Wget::with_program(program),
        None => Wget::new(),
    };
    debug!(program = %tool.program().display(), "using download program");

    let report = fetcher::run(&cli.output_dir, DATASET_URL, &tool)
        .with_context(|| format!("fetching dataset into {}", cli.output_dir.display()))?;

    if let DownloadOutcome::Downloaded(path) = &report.artifact {
        println!("{} {}", "Downloaded".green(), path.display());
    }
    println!("Metadata saved to {}", report.metadata_path.display().to_string().cyan());
    Ok(())
}
