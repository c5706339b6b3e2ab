use crate::error::{CcstatError, Result};
use crate::git::format::LogOptions;
use gix::discover;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

pub const DEFAULT_GIT_BIN: &str = "git";

/// Anything able to answer a history query with raw `git log` text.
pub trait HistorySource {
    fn log(&self, options: &LogOptions) -> Result<String>;
}

pub struct GitRepo {
    path: PathBuf,
    query_dir: PathBuf,
    git_bin: String,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`.
    ///
    /// Queries run in the directory that was asked for, so relative paths
    /// given to `--follow` resolve the same way they would for plain git.
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        if !repo_path.is_dir() {
            return Err(CcstatError::NotARepository(repo_path));
        }
        let query_dir = std::fs::canonicalize(&repo_path)?;

        let repo = discover(&query_dir)?;
        let Some(workdir) = repo.workdir() else {
            return Err(CcstatError::NotARepository(query_dir));
        };
        let git_dir = std::fs::canonicalize(repo.path()).unwrap_or_else(|_| repo.path().to_path_buf());
        if query_dir.starts_with(&git_dir) {
            return Err(CcstatError::NotARepository(query_dir));
        }

        let path = workdir.to_path_buf();
        debug!(path = %path.display(), query_dir = %query_dir.display(), "opened repository");

        Ok(Self {
            path,
            query_dir,
            git_bin: DEFAULT_GIT_BIN.to_string(),
        })
    }

    pub fn with_git_bin(mut self, bin: impl Into<String>) -> Self {
        let bin = bin.into();
        if !bin.is_empty() {
            self.git_bin = bin;
        }
        self
    }

    /// Root of the work tree.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory git is run in.
    pub fn query_dir(&self) -> &Path {
        &self.query_dir
    }

    pub fn can_exec(&self) -> Result<PathBuf> {
        which::which(&self.git_bin).map_err(|_| CcstatError::GitNotFound(self.git_bin.clone()))
    }

    /// Run `git <args>` inside the repository.
    ///
    /// A non-zero exit yields an empty string; only a missing executable or a
    /// failure to spawn is an error. The child gets its own working directory,
    /// the process-wide one is never touched.
    pub fn exec<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let bin = self.can_exec()?;
        let args: Vec<_> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
        debug!(bin = %bin.display(), ?args, "running history query");

        let output = Command::new(&bin)
            .args(&args)
            .current_dir(&self.query_dir)
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            warn!(
                status = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "git exited unsuccessfully, treating output as empty"
            );
            return Ok(String::new());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim().trim_end_matches('\0').to_string())
    }
}

impl HistorySource for GitRepo {
    fn log(&self, options: &LogOptions) -> Result<String> {
        self.exec(options.args())
    }
}
