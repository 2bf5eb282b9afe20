use crate::artifacts::status::change_counts::ChangeCounts;

/// Commit marker reported by git for a branch without any commit yet.
pub const INITIAL_COMMIT: &str = "(initial)";

/// Answers whether a merge is currently in progress, independently of what
/// the status stream said.
pub trait MergeProbe {
    fn merge_in_progress(&self) -> bool;
}

impl MergeProbe for bool {
    fn merge_in_progress(&self) -> bool {
        *self
    }
}

/// Snapshot of a repository as reported by one `git status --porcelain=v2`
/// run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepoStatus {
    pub(crate) branch: String,
    pub(crate) commit: String,
    pub(crate) remote: String,
    pub(crate) upstream: String,
    pub(crate) ahead: usize,
    pub(crate) behind: usize,
    pub(crate) untracked: usize,
    pub(crate) unmerged: usize,
    pub(crate) staged: ChangeCounts,
    pub(crate) unstaged: ChangeCounts,
}

impl RepoStatus {
    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn commit(&self) -> &str {
        &self.commit
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    pub fn ahead(&self) -> usize {
        self.ahead
    }

    pub fn behind(&self) -> usize {
        self.behind
    }

    pub fn untracked(&self) -> usize {
        self.untracked
    }

    pub fn unmerged(&self) -> usize {
        self.unmerged
    }

    pub fn staged(&self) -> &ChangeCounts {
        &self.staged
    }

    pub fn unstaged(&self) -> &ChangeCounts {
        &self.unstaged
    }

    pub fn is_initial_commit(&self) -> bool {
        self.commit == INITIAL_COMMIT
    }

    /// Something is staged in the index.
    pub fn is_dirty(&self) -> bool {
        self.staged.has_changes()
    }

    /// Something in the work tree differs from the index.
    pub fn is_modified(&self) -> bool {
        self.unstaged.has_changes()
    }

    /// Unmerged entries were reported, or the probe knows of a merge in
    /// progress (e.g. all conflicts resolved but not yet committed).
    pub fn has_unmerged_conflicts(&self, probe: &impl MergeProbe) -> bool {
        self.unmerged > 0 || probe.merge_in_progress()
    }

    /// Applies a two character `XY` code: `X` goes to the staged counters and
    /// `Y` to the unstaged ones.
    pub(crate) fn record_xy(&mut self, xy: &str) {
        let mut codes = xy.chars();
        if let Some(x) = codes.next() {
            self.staged.record(x);
        }
        if let Some(y) = codes.next() {
            self.unstaged.record(y);
        }
    }
}
