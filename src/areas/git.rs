use crate::artifacts::core::{PorcelainError, PorcelainResult};
use crate::artifacts::status::parser::StatusParser;
use crate::artifacts::status::repo_status::RepoStatus;
use derive_new::new;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

const GIT_BIN: &str = "git";
const STATUS_ARGS: [&str; 3] = ["status", "--porcelain=v2", "--branch"];
const GIT_DIR_ARGS: [&str; 3] = ["rev-parse", "--is-inside-work-tree", "--git-dir"];
const NOT_A_REPOSITORY: &str = "not a git repository";

/// Runs the `git` executable inside one working directory.
#[derive(Debug, new)]
pub struct Git {
    work_dir: Box<Path>,
}

impl Git {
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Locates the repository metadata directory (`.git`, or the per-worktree
    /// directory of a linked worktree).
    ///
    /// Fails with [`PorcelainError::NotARepository`] outside of a work tree,
    /// which includes the inside of `.git` and bare repositories.
    pub fn git_dir(&self) -> PorcelainResult<PathBuf> {
        let output = self
            .command(&GIT_DIR_ARGS)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_failure(&GIT_DIR_ARGS, e))?;
        self.check_exit(&GIT_DIR_ARGS, output.status, &output.stderr)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut lines = stdout.lines();
        if lines.next().map(str::trim) != Some("true") {
            tracing::debug!(work_dir = %self.work_dir.display(), "not inside a work tree");
            return Err(PorcelainError::NotARepository {
                path: self.work_dir.to_path_buf(),
            });
        }

        let git_dir = lines.next().unwrap_or_default().trim();
        tracing::debug!(git_dir, "resolved git directory");

        // relative to the working directory unless git printed an absolute path
        Ok(self.work_dir.join(git_dir))
    }

    /// Runs `git status --porcelain=v2 --branch` and parses its output as it
    /// is produced.
    pub fn status(&self) -> PorcelainResult<RepoStatus> {
        tracing::debug!(work_dir = %self.work_dir.display(), "running git status");

        let mut child = self
            .command(&STATUS_ARGS)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_failure(&STATUS_ARGS, e))?;

        let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
            // nothing to parse, but the child still has to be reaped
            child.wait()?;
            return Err(PorcelainError::ProcessFailure {
                command: render_command(&STATUS_ARGS),
                details: "output of git was not captured".to_string(),
            });
        };

        // git must never block on a full stderr pipe while stdout is parsed
        let stderr_reader = thread::spawn(move || drain(stderr));
        let parsed = StatusParser::parse(BufReader::new(stdout));

        // reap the child even when parsing stopped early
        let exit = child.wait()?;
        let stderr = stderr_reader.join().unwrap_or_default();
        let status = parsed?;
        self.check_exit(&STATUS_ARGS, exit, &stderr)?;

        Ok(status)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(GIT_BIN);
        cmd.current_dir(&self.work_dir)
            .args(args)
            // keep error messages stable and never take the index lock from a prompt
            .env("LC_ALL", "C")
            .env("GIT_OPTIONAL_LOCKS", "0");
        cmd
    }

    fn check_exit(&self, args: &[&str], exit: ExitStatus, stderr: &[u8]) -> PorcelainResult<()> {
        if exit.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(stderr);
        if stderr.contains(NOT_A_REPOSITORY) {
            return Err(PorcelainError::NotARepository {
                path: self.work_dir.to_path_buf(),
            });
        }

        let details = match stderr.trim() {
            "" => exit.to_string(),
            message => message.to_string(),
        };
        Err(PorcelainError::ProcessFailure {
            command: render_command(args),
            details,
        })
    }

    fn spawn_failure(&self, args: &[&str], error: std::io::Error) -> PorcelainError {
        PorcelainError::ProcessFailure {
            command: render_command(args),
            details: format!("failed to start git in {}: {}", self.work_dir.display(), error),
        }
    }
}

fn render_command(args: &[&str]) -> String {
    format!("{} {}", GIT_BIN, args.join(" "))
}

/// Reads a pipe to the end. A failed read keeps whatever arrived before it.
fn drain(mut pipe: impl Read) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Err(e) = pipe.read_to_end(&mut buf) {
        tracing::warn!(error = %e, "failed to read stderr of git");
    }
    buf
}
