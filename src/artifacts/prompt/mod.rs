//! Prompt line rendering
//!
//! - `renderer`: Layout of the status line and its glyphs
//! - `style`: Semantic paint tags and their encoding per shell

pub mod renderer;
pub mod style;
