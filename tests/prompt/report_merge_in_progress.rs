use crate::common::command::{
    expected_line, git, git_commit, head_short_sha, init_repository_dir, run_git_command,
    run_porcelain_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

fn start_conflicting_merge(dir: &Path) {
    git(dir, &["checkout", "-b", "feature"]);
    write_file(FileSpec::new(dir.join("1.txt"), "feature".to_string()));
    git(dir, &["add", "1.txt"]);
    git_commit(dir, "Feature change");

    git(dir, &["checkout", "main"]);
    write_file(FileSpec::new(dir.join("1.txt"), "main".to_string()));
    git(dir, &["add", "1.txt"]);
    git_commit(dir, "Main change");

    run_git_command(dir, &["merge", "feature"]).assert().failure();
}

#[rstest]
fn report_unmerged_paths(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    start_conflicting_merge(dir);
    let commit = head_short_sha(dir)?;

    let actual_output = stdout_of(&mut run_porcelain_command(dir, &["--no-color"]))?;

    assert_eq!(actual_output, expected_line("main", &commit, "", " ‼ ", "✔"));

    Ok(())
}

#[rstest]
fn report_merge_in_progress_after_conflicts_are_resolved(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    start_conflicting_merge(dir);

    write_file(FileSpec::new(dir.join("1.txt"), "resolved".to_string()));
    git(dir, &["add", "1.txt"]);
    let commit = head_short_sha(dir)?;

    let actual_output = stdout_of(&mut run_porcelain_command(dir, &["--no-color"]))?;

    assert_eq!(actual_output, expected_line("main", &commit, "", " ‼ ", "✘"));

    Ok(())
}
