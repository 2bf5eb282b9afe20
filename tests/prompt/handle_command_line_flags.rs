use crate::common::command::{init_repository_dir, repository_dir, run_porcelain_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn print_version_and_exit(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_porcelain_command(repository_dir.path(), &["--version"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^porcelain version \d+\.\d+\.\d+ \(.+\)\nbuilt .+\n$",
        )?);

    Ok(())
}

#[rstest]
fn reject_short_version_flag(repository_dir: TempDir) {
    run_porcelain_command(repository_dir.path(), &["-v"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unexpected argument"));
}

#[rstest]
fn print_help_and_succeed(repository_dir: TempDir) {
    run_porcelain_command(repository_dir.path(), &["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[rstest]
fn print_usage_when_formatting_is_disabled(init_repository_dir: TempDir) {
    run_porcelain_command(init_repository_dir.path(), &["--fmt=false"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains(
            "Outside of a repository there will be no output.",
        ));
}

#[rstest]
#[case(&["--bash", "--zsh"])]
#[case(&["--tmux", "--no-color"])]
fn reject_conflicting_output_modes(init_repository_dir: TempDir, #[case] args: &[&str]) {
    run_porcelain_command(init_repository_dir.path(), args)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot be used with"));
}

#[rstest]
fn write_debug_logs_to_the_log_file(
    init_repository_dir: TempDir,
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_file = repository_dir.path().canonicalize()?.join("porcelain.log");

    run_porcelain_command(
        init_repository_dir.path(),
        &[
            "--no-color",
            "--debug",
            "--log-file",
            log_file.to_str().ok_or("temp path is not UTF-8")?,
        ],
    )
    .assert()
    .success()
    .stderr(predicate::str::is_empty());

    let logs = std::fs::read_to_string(&log_file)?;
    assert!(logs.contains("running porcelain"), "{logs}");
    assert!(logs.contains("formatting output"), "{logs}");

    Ok(())
}

#[rstest]
fn write_debug_logs_to_stderr(init_repository_dir: TempDir) {
    run_porcelain_command(
        init_repository_dir.path(),
        &["--no-color", "--debug", "--log-to-stderr"],
    )
    .assert()
    .success()
    .stderr(predicate::str::contains("parsing git output"));
}

#[rstest]
fn stay_silent_without_debug(init_repository_dir: TempDir) {
    run_porcelain_command(init_repository_dir.path(), &["--no-color"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
