//! Status data structures and algorithms
//!
//! - `core`: Shared error type
//! - `prompt`: Prompt line layout and shell-specific styling
//! - `status`: Porcelain v2 parsing into a repository snapshot

pub mod core;
pub mod prompt;
pub mod status;
