//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `prompt`: Print the repository status as a shell prompt fragment

pub mod prompt;
