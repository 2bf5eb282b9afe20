use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

pub const BRANCH_GLYPH: &str = "\u{e0a0}";

// keep the user's and the system's git configuration out of the tests
const GIT_ENV: [(&str, &str); 6] = [
    ("GIT_CONFIG_NOSYSTEM", "1"),
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_AUTHOR_NAME", "fake_user"),
    ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
    ("GIT_COMMITTER_NAME", "fake_user"),
    ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
];

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn empty_repository_dir(repository_dir: TempDir) -> TempDir {
    git(repository_dir.path(), &["init"]);
    git(
        repository_dir.path(),
        &["symbolic-ref", "HEAD", "refs/heads/main"],
    );

    repository_dir
}

#[fixture]
pub fn init_repository_dir(empty_repository_dir: TempDir) -> TempDir {
    let repository_dir = empty_repository_dir;

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    git(repository_dir.path(), &["add", "."]);
    git_commit(repository_dir.path(), "Initial commit");

    repository_dir
}

pub fn run_porcelain_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("porcelain").expect("Failed to find porcelain binary");
    cmd.envs(GIT_ENV);
    // never discover a repository above the temp directory
    cmd.env("GIT_CEILING_DIRECTORIES", ceiling_dir(dir));
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.envs(GIT_ENV);
    cmd.current_dir(dir);
    cmd.args(["-c", "commit.gpgsign=false"]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git(dir: &Path, args: &[&str]) {
    run_git_command(dir, args).assert().success();
}

pub fn git_commit(dir: &Path, message: &str) {
    git(dir, &["commit", "-m", message]);
}

pub fn head_short_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_git_command(dir, &["rev-parse", "HEAD"]).output()?;
    let sha = String::from_utf8(output.stdout)?;

    Ok(sha.trim()[..7].to_string())
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let assert = cmd.assert().success();
    Ok(String::from_utf8(assert.get_output().stdout.clone())?)
}

/// The uncolored prompt line, laid out the way `porcelain --no-color` prints it.
pub fn expected_line(branch: &str, commit: &str, ahead_behind: &str, slots: &str, state: &str) -> String {
    format!("{BRANCH_GLYPH} {branch}@{commit} {ahead_behind} {slots} {state}")
}

fn ceiling_dir(dir: &Path) -> PathBuf {
    let dir = dir.canonicalize().expect("Failed to canonicalize temp dir");
    match dir.parent() {
        Some(parent) => parent.to_path_buf(),
        None => dir.clone(),
    }
}
