//! Git status for shell prompts
//!
//! Runs `git status --porcelain=v2 --branch`, parses the output into a
//! [`RepoStatus`](artifacts::status::repo_status::RepoStatus) and renders it as
//! a short, optionally colored line:
//!
//! ```text
//!  master@51c9c58  ↑1  ↓10  ?‼Δ ✘
//! ```
//!
//! - `areas`: Running git and looking into the repository metadata directory
//! - `artifacts`: Status parsing and prompt rendering
//! - `commands`: User-facing commands
//! - `config`: Run configuration resolved from the command line
//! - `logging`: Optional tracing output (`--debug`)

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod logging;
