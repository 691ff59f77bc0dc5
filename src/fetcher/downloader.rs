use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::FetchError;
use crate::Result;

pub const DEFAULT_PROGRAM: &str = "wget";

/// Something that can pull `url` down into `destination`.
pub trait DownloadTool {
    fn fetch(&self, url: &str, destination: &Path) -> Result<()>;
}

/// Runs an external wget-compatible program: `<program> -c <url> -O <destination>`.
///
/// Partial files are resumed by the program itself (`-c`); this side never retries.
#[derive(Debug, Clone)]
pub struct Wget {
    program: PathBuf,
    search_path: bool,
}

impl Default for Wget {
    fn default() -> Self {
        Self { program: PathBuf::from(DEFAULT_PROGRAM), search_path: true }
    }
}

impl Wget {
    /// `wget`, looked up on `PATH` when a download is actually needed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `program` as given.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), search_path: false }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn resolve(&self) -> Result<PathBuf> {
        if !self.search_path {
            return Ok(self.program.clone());
        }
        which::which(&self.program).map_err(|_| FetchError::ToolNotFound {
            program: self.program.display().to_string(),
        })
    }

    pub fn command(program: &Path, url: &str, destination: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.arg("-c").arg(url).arg("-O").arg(destination);
        cmd
    }
}

impl DownloadTool for Wget {
    fn fetch(&self, url: &str, destination: &Path) -> Result<()> {
        let program = self.resolve()?;
        debug!(program = %program.display(), url, dest = %destination.display(), "spawning downloader");
        // stdout/stderr are inherited so the program's own progress and errors reach the user.
        let status = Self::command(&program, url, destination)
            .status()
            .map_err(|source| FetchError::SpawnDownloader { program, source })?;

        if !status.success() {
            warn!(%status, "downloader exited unsuccessfully");
            return Err(FetchError::DownloadFailed { exit_code: status.code() });
        }
        Ok(())
    }
}
