use crate::common::TestProject;
use predicates::prelude::*;

/// data.txt cannot be created (a directory sits on the path): failure,
/// no confirmation, and neither data2.txt nor the lock marker appear
#[test]
fn test_primary_path_not_writable() {
    let project = TestProject::new();
    std::fs::create_dir(project.file("data.txt")).unwrap();

    project
        .command()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("creating data file 'data.txt'"));

    assert!(project.file("data.txt").is_dir());
    assert!(!project.file("data2.txt").exists());
    assert!(!project.file("lockfile.lock").exists());
}

/// data.txt links into a directory that does not exist
#[cfg(unix)]
#[test]
fn test_primary_path_dangling_link() {
    let project = TestProject::new();
    std::os::unix::fs::symlink(project.file("gone").join("data.txt"), project.file("data.txt"))
        .unwrap();

    project
        .command()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("data.txt"))
        .stderr(predicate::str::contains("working directory"));

    assert!(!project.file("gone").exists());
    assert!(!project.file("lockfile.lock").exists());
}

/// A directory squatting on data2.txt fails after data.txt was opened,
/// and the lock marker is never attempted
#[test]
fn test_companion_path_is_directory() {
    let project = TestProject::new();
    std::fs::create_dir(project.file("data2.txt")).unwrap();

    project
        .command()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("data2.txt"));

    assert!(project.file("data.txt").is_file());
    assert!(!project.file("lockfile.lock").exists());
}

/// Read-only working directory: failure, no confirmation, no files
#[cfg(unix)]
#[test]
fn test_unwritable_directory() {
    use std::os::unix::fs::PermissionsExt;

    let project = TestProject::new();
    let locked = project.file("locked");
    std::fs::create_dir(&locked).unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users ignore directory permissions; test_primary_path_not_writable
    // covers the failure path for them.
    let check = locked.join(".write-check");
    if std::fs::write(&check, b"").is_ok() {
        std::fs::remove_file(&check).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("skipping test_unwritable_directory: directory permissions are not enforced");
        return;
    }

    project
        .command()
        .current_dir(&locked)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Permission denied"))
        .stderr(predicate::str::contains("suggestion"));

    let leftovers = std::fs::read_dir(&locked).unwrap().count();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(leftovers, 0);
}
