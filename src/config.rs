use crate::artifacts::prompt::style::{Escape, RenderOptions};
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "/tmp/porcelain.log";

/// Which consumer the prompt line is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Plain,
    Bash,
    Zsh,
    Tmux,
    NoColor,
}

impl OutputMode {
    pub fn render_options(self) -> RenderOptions {
        let (color, escape) = match self {
            OutputMode::Plain => (true, Escape::None),
            OutputMode::Bash => (true, Escape::Bash),
            OutputMode::Zsh => (true, Escape::Zsh),
            OutputMode::Tmux => (true, Escape::Tmux),
            OutputMode::NoColor => (false, Escape::None),
        };
        RenderOptions { color, escape }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub enabled: bool,
    pub target: LogTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            enabled: false,
            target: LogTarget::File(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

/// Settings for one run, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub work_dir: PathBuf,
    pub mode: OutputMode,
    pub log: LogConfig,
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        self.mode.render_options()
    }
}
