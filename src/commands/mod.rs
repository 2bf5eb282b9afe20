//! Command implementations
//!
//! - `porcelain`: User-facing commands built on top of the repository areas
//!   (currently the prompt status line)

pub mod porcelain;
