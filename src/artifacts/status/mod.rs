//! Repository status snapshot
//!
//! This module turns `git status --porcelain=v2 --branch` output into a typed
//! [`RepoStatus`](repo_status::RepoStatus).
//!
//! ## Components
//!
//! - `change_counts`: Per-area tallies decoded from `XY` codes
//! - `parser`: Line records and the accumulating parser
//! - `repo_status`: The snapshot and the facts derived from it

pub mod change_counts;
pub mod parser;
pub mod repo_status;
