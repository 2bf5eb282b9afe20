//! Repository access
//!
//! This module wraps everything that touches the outside world:
//!
//! - `git`: Runs the `git` executable and feeds its output to the parser
//! - `git_dir`: The repository metadata directory (merge state)
//! - `repository`: Working directory, output sink and git runner

pub mod git;
pub mod git_dir;
pub mod repository;
