use crate::artifacts::prompt::style::{Attrs, Paint, RenderOptions, StyleRenderer, Tone};
use crate::artifacts::status::repo_status::{MergeProbe, RepoStatus};

pub const BRANCH_GLYPH: &str = "\u{e0a0}";
pub const MODIFIED_GLYPH: &str = "Δ";
pub const DIRTY_GLYPH: &str = "✘";
pub const CLEAN_GLYPH: &str = "✔";
pub const UNTRACKED_GLYPH: &str = "?";
pub const UNMERGED_GLYPH: &str = "‼";
pub const AHEAD_ARROW: &str = "↑";
pub const BEHIND_ARROW: &str = "↓";

const SHORT_COMMIT_LEN: usize = 7;

const BRANCH: Paint = Paint::fg(Tone::Blue);
const COMMIT: Paint = Paint::fg(Tone::Green).with(Attrs::ITALIC);
const AHEAD: Paint = Paint::fg(Tone::Black).on(Tone::Yellow).with(Attrs::FAINT);
const BEHIND: Paint = Paint::fg(Tone::White).on(Tone::Red).with(Attrs::FAINT);
const UNTRACKED: Paint = Paint::attrs(Attrs::FAINT);
const UNMERGED: Paint = Paint::fg(Tone::Cyan);
const MODIFIED: Paint = Paint::fg(Tone::Blue);
const DIRTY: Paint = Paint::fg(Tone::Red);
const CLEAN: Paint = Paint::fg(Tone::Green);

/// Formats a [`RepoStatus`] as a single prompt line:
///
/// ```text
///  <branch>@<commit> <ahead/behind> <untracked><unmerged><modified> <dirty|clean>
/// ```
///
/// The three middle slots are always one column wide so the prompt does not
/// jump around as the repository changes.
#[derive(Debug, Clone, Copy)]
pub struct PromptRenderer {
    style: StyleRenderer,
}

impl PromptRenderer {
    pub fn new(options: RenderOptions) -> Self {
        PromptRenderer {
            style: StyleRenderer::new(options),
        }
    }

    pub fn render(&self, status: &RepoStatus, probe: &impl MergeProbe) -> String {
        tracing::debug!(?status, "formatting output");

        format!(
            "{} {}@{} {} {} {}",
            BRANCH_GLYPH,
            self.style.paint(status.branch(), BRANCH),
            self.style.paint(short_commit(status), COMMIT),
            self.ahead_behind(status),
            self.slots(status, probe),
            self.state(status),
        )
    }

    fn ahead_behind(&self, status: &RepoStatus) -> String {
        let mut out = String::new();
        if status.ahead() > 0 {
            let ahead = format!(" {}{} ", AHEAD_ARROW, status.ahead());
            out.push_str(&self.style.paint(&ahead, AHEAD));
        }
        if status.behind() > 0 {
            let behind = format!(" {}{} ", BEHIND_ARROW, status.behind());
            out.push_str(&self.style.paint(&behind, BEHIND));
        }
        out
    }

    fn slots(&self, status: &RepoStatus, probe: &impl MergeProbe) -> String {
        let slot = |shown: bool, glyph: &str, paint: Paint| {
            if shown {
                self.style.paint(glyph, paint)
            } else {
                " ".to_string()
            }
        };

        [
            slot(status.untracked() > 0, UNTRACKED_GLYPH, UNTRACKED),
            slot(status.has_unmerged_conflicts(probe), UNMERGED_GLYPH, UNMERGED),
            slot(status.is_modified(), MODIFIED_GLYPH, MODIFIED),
        ]
        .concat()
    }

    fn state(&self, status: &RepoStatus) -> String {
        if status.is_dirty() {
            self.style.paint(DIRTY_GLYPH, DIRTY)
        } else {
            self.style.paint(CLEAN_GLYPH, CLEAN)
        }
    }
}

fn short_commit(status: &RepoStatus) -> &str {
    let commit = status.commit();
    if status.is_initial_commit() {
        return commit;
    }
    commit.get(..SHORT_COMMIT_LEN).unwrap_or(commit)
}
