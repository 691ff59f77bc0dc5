//! Fetch the dataset into an output directory and record its metadata.
//!
//! The run is strictly linear: create the directory, download the artifact
//! unless it is already there, then write `dataset_metadata.json`. The first
//! failing step ends the run and later steps are never attempted.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::dataset::{artifact_file_name, DESCRIPTOR};
use crate::error::FetchError;
use crate::metadata;
use crate::Result;

pub mod downloader;

pub use downloader::{DownloadTool, Wget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded(PathBuf),
    /// A file was already at the destination; nothing was fetched.
    AlreadyPresent(PathBuf),
}

impl DownloadOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Downloaded(p) | Self::AlreadyPresent(p) => p,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub artifact: DownloadOutcome,
    pub metadata_path: PathBuf,
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| FetchError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(dir = %dir.display(), "output directory ready");
    Ok(())
}

/// Download `url` into `dir` unless a file with the same name is already there.
///
/// An existing file is trusted as-is: a truncated earlier download looks the
/// same as a complete one.
pub fn download_artifact<D>(url: &str, dir: &Path, tool: &D) -> Result<DownloadOutcome>
where
    D: DownloadTool + ?Sized,
{
    let destination = dir.join(artifact_file_name(url)?);
    if destination.exists() {
        println!("File already exists: {}, skipping download.", destination.display());
        info!(path = %destination.display(), "artifact present, skipping download");
        return Ok(DownloadOutcome::AlreadyPresent(destination));
    }

    println!("Downloading {} to {}...", url, destination.display());
    tool.fetch(url, &destination)?;
    info!(path = %destination.display(), "artifact downloaded");
    Ok(DownloadOutcome::Downloaded(destination))
}

/// Full run against `output_dir` for the fixed dataset.
pub fn run<D>(output_dir: &Path, url: &str, tool: &D) -> Result<FetchReport>
where
    D: DownloadTool + ?Sized,
{
    ensure_output_dir(output_dir)?;
    let artifact = download_artifact(url, output_dir, tool)?;
    let metadata_path = metadata::write_metadata(output_dir, &DESCRIPTOR)?;
    Ok(FetchReport { artifact, metadata_path })
}
