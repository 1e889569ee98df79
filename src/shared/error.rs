use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - output rendered, or no dependencies found
    Success = 0,
    /// Application error (subprocess failure, I/O error, invalid path, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Fatal errors for dependency analysis.
///
/// Every variant aborts the run; `main` is the only place they are
/// reported. Per-module lookup failures during enrichment are not
/// represented here since they never propagate.
#[derive(Debug, Error)]
pub enum DeptreeError {
    #[error("invalid project path {path}: {reason}")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("workspace setup failed: {details}")]
    WorkspaceSetup { details: String },

    #[error("failed to run '{command}': {details}")]
    CommandFailed { command: String, details: String },

    #[error("error reading output: {details}")]
    GraphRead { details: String },

    #[error("failed to write to file {path}: {details}")]
    FileWriteError { path: PathBuf, details: String },

    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Failures of a single module description lookup.
///
/// These never abort a run: the display text is shown in parentheses in
/// place of the description.
#[derive(Debug, Error)]
pub enum DescriptionError {
    #[error("not a GitHub module")]
    NotGitHubModule,

    #[error("failed to fetch from GitHub API: {0}")]
    Request(#[source] reqwest::Error),

    #[error("GitHub API returned status {0}")]
    UnexpectedStatus(u16),

    #[error("failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("no description set")]
    NoDescription,
}
