use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a fetch run. None of these are retried.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },

    #[error("Source URL has no file name: {0}")]
    InvalidUrl(String),

    #[error("Download program '{program}' not found in PATH")]
    ToolNotFound { program: String },

    #[error("Failed to start download program {}: {source}", .program.display())]
    SpawnDownloader { program: PathBuf, source: io::Error },

    #[error("Download failed ({})", describe_exit(.exit_code))]
    DownloadFailed { exit_code: Option<i32> },

    #[error("Failed to encode metadata: {0}")]
    SerializeMetadata(#[from] serde_json::Error),

    #[error("Failed to write metadata file {}: {source}", .path.display())]
    WriteMetadata { path: PathBuf, source: io::Error },
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
