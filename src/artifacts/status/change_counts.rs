/// Kind of change encoded by one character of a porcelain `XY` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
}

impl ChangeKind {
    /// Decodes a single `X` or `Y` character. `.` and every character not
    /// listed here (`U`, `T`, ...) carry no change for the counters.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(ChangeKind::Modified),
            'A' => Some(ChangeKind::Added),
            'D' => Some(ChangeKind::Deleted),
            'R' => Some(ChangeKind::Renamed),
            'C' => Some(ChangeKind::Copied),
            _ => None,
        }
    }
}

/// Per-area tally of changed entries (either the index or the work tree).
///
/// Counters only ever grow during a parse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeCounts {
    pub(crate) modified: usize,
    pub(crate) added: usize,
    pub(crate) deleted: usize,
    pub(crate) renamed: usize,
    pub(crate) copied: usize,
}

impl ChangeCounts {
    pub fn modified(&self) -> usize {
        self.modified
    }

    pub fn added(&self) -> usize {
        self.added
    }

    pub fn deleted(&self) -> usize {
        self.deleted
    }

    pub fn renamed(&self) -> usize {
        self.renamed
    }

    pub fn copied(&self) -> usize {
        self.copied
    }

    pub fn has_changes(&self) -> bool {
        self.modified != 0
            || self.added != 0
            || self.deleted != 0
            || self.renamed != 0
            || self.copied != 0
    }

    pub(crate) fn record(&mut self, code: char) {
        let Some(kind) = ChangeKind::from_code(code) else {
            return;
        };

        let counter = match kind {
            ChangeKind::Modified => &mut self.modified,
            ChangeKind::Added => &mut self.added,
            ChangeKind::Deleted => &mut self.deleted,
            ChangeKind::Renamed => &mut self.renamed,
            ChangeKind::Copied => &mut self.copied,
        };
        *counter += 1;
    }
}
