use crate::common::{FIXTURE_NAMES, TestProject, expected_data_line, expected_doubled_line};
use memeval_fixtures::test_utils::read_fixture_lines;
use predicates::prelude::*;

/// Fresh directory: all three files appear and stdout lists them
#[test]
fn test_generate_in_empty_directory() {
    let project = TestProject::new();

    project
        .command()
        .assert()
        .success()
        .stdout("Generated test files:\n - data.txt\n - data2.txt\n - lockfile.lock\n");

    for name in FIXTURE_NAMES {
        assert!(project.file(name).is_file(), "{name} was not created");
    }
}

/// data.txt: 50 identical lines of 0..999 concatenated
#[test]
fn test_data_file_contents() {
    let project = TestProject::new();
    project.command().assert().success();

    let lines = read_fixture_lines(&project.file("data.txt")).unwrap();
    assert_eq!(lines.len(), 50);

    let expected = expected_data_line();
    assert!(expected.starts_with("0123456789101112"));
    assert!(lines.iter().all(|line| *line == expected));

    let raw = project.read("data.txt");
    assert_eq!(raw.len(), 50 * 2891);
    assert_eq!(raw.last(), Some(&b'\n'));
    assert!(!raw.contains(&b'\r'));
}

/// data2.txt: 50 identical lines of 0,2,..,1998 concatenated
#[test]
fn test_doubled_data_file_contents() {
    let project = TestProject::new();
    project.command().assert().success();

    let lines = read_fixture_lines(&project.file("data2.txt")).unwrap();
    assert_eq!(lines.len(), 50);

    let expected = expected_doubled_line();
    assert!(expected.starts_with("024681012"));
    assert!(expected.ends_with("1998"));
    assert!(lines.iter().all(|line| *line == expected));

    assert_eq!(project.read("data2.txt").len(), 50 * 3446);
}

/// lockfile.lock: exactly one null byte
#[test]
fn test_lock_marker_contents() {
    let project = TestProject::new();
    project.command().assert().success();

    assert_eq!(project.read("lockfile.lock"), vec![0u8]);
}

/// Two runs produce byte-identical files with nothing appended
#[test]
fn test_second_run_is_byte_identical() {
    let project = TestProject::new();

    project.command().assert().success();
    let first: Vec<Vec<u8>> = FIXTURE_NAMES.iter().map(|name| project.read(name)).collect();

    project.command().assert().success();
    let second: Vec<Vec<u8>> = FIXTURE_NAMES.iter().map(|name| project.read(name)).collect();

    assert_eq!(first, second);
}

/// Pre-existing files of any size are truncated
#[test]
fn test_existing_files_are_overwritten() {
    let project = TestProject::new();
    for name in FIXTURE_NAMES {
        std::fs::write(project.file(name), "stale".repeat(100_000)).unwrap();
    }

    project.command().assert().success();

    assert_eq!(project.read("data.txt").len(), 144_550);
    assert_eq!(project.read("data2.txt").len(), 172_300);
    assert_eq!(project.read("lockfile.lock"), vec![0u8]);
}

/// Default run keeps stderr free of log output
#[test]
fn test_default_run_is_silent_on_stderr() {
    let project = TestProject::new();

    project.command().assert().success().stderr(predicate::str::is_empty());
}
