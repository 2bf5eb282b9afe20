use crate::artifacts::status::repo_status::MergeProbe;
use derive_new::new;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const MERGE_HEAD: &str = "MERGE_HEAD";

/// The repository metadata directory, as reported by `git rev-parse --git-dir`.
#[derive(Debug, Clone, new)]
pub struct GitDir {
    path: Box<Path>,
}

impl GitDir {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn merge_head_path(&self) -> PathBuf {
        self.path.join(MERGE_HEAD)
    }
}

impl MergeProbe for GitDir {
    /// `MERGE_HEAD` exists while a merge is waiting to be committed, even once
    /// every conflict has been resolved.
    fn merge_in_progress(&self) -> bool {
        match std::fs::read(self.merge_head_path()) {
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.merge_head_path().display(), "error reading MERGE_HEAD");
                false
            }
        }
    }
}
