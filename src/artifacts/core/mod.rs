//! Core utilities and shared types
//!
//! This module contains the error type shared by the process runner, the
//! status parser and the command layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while collecting the status of a repository.
#[derive(Debug, Error)]
pub enum PorcelainError {
    /// The directory is not inside a git work tree.
    ///
    /// This is not a failure from the user's point of view: the prompt simply
    /// stays empty.
    #[error("not a git repository: {}", path.display())]
    NotARepository { path: PathBuf },

    /// `git` could not be started, or exited with an unexpected status.
    #[error("git command failed: {command}\n{details}")]
    ProcessFailure { command: String, details: String },

    /// An ahead/behind counter in the `# branch.ab` header is not a number.
    #[error("malformed numeric field in branch header: {token:?}")]
    MalformedNumericField { token: String },

    /// Reading the status stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PorcelainError {
    pub fn is_not_a_repository(&self) -> bool {
        matches!(self, PorcelainError::NotARepository { .. })
    }
}

pub type PorcelainResult<T> = Result<T, PorcelainError>;
