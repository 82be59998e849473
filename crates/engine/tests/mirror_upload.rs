//! Local-to-remote mirroring behavior: directory materialization, upload
//! gating, file-type restriction, and the dry-run missing-directory abort.

use std::fs;

use engine::{upload_tree, MirrorError, MirrorOptions};
use test_support::{Call, ScriptedRemote};

/// Builds `src/{notes.txt, data.csv, sub/inner.csv, empty/}` under a
/// tempdir and returns the tempdir and the path of `src` as a string.
fn local_fixture() -> (tempfile::TempDir, String) {
    let temp = tempfile::tempdir().expect("tempdir");
    let src = temp.path().join("src");
    fs::create_dir_all(src.join("sub")).unwrap();
    fs::create_dir_all(src.join("empty")).unwrap();
    fs::write(src.join("notes.txt"), b"notes").unwrap();
    fs::write(src.join("data.csv"), b"1,2").unwrap();
    fs::write(src.join("sub/inner.csv"), b"3,4").unwrap();
    let root = src.to_string_lossy().into_owned();
    (temp, root)
}

#[test]
fn nests_local_root_inside_remote_destination() {
    let (_temp, root) = local_fixture();
    let remote = ScriptedRemote::new();
    remote.add_directory("/backup");

    let report =
        upload_tree(&remote, &root, "/backup", &MirrorOptions::new()).expect("mirror");

    assert_eq!(remote.file("/backup/src/notes.txt").unwrap(), b"notes");
    assert_eq!(remote.file("/backup/src/data.csv").unwrap(), b"1,2");
    assert_eq!(remote.file("/backup/src/sub/inner.csv").unwrap(), b"3,4");
    assert!(remote.has_directory("/backup/src/empty"));
    assert!(remote.file("/backup/notes.txt").is_none(), "no flattening");

    assert_eq!(report.directories, 3);
    assert_eq!(report.copied, 3);
}

#[test]
fn missing_remote_directories_are_created_once() {
    let (_temp, root) = local_fixture();
    let remote = ScriptedRemote::new();
    remote.add_directory("/backup");

    upload_tree(&remote, &root, "/backup", &MirrorOptions::new()).expect("mirror");

    let created = remote.count_calls(|call| matches!(call, Call::MakeDirectory(_)));
    assert_eq!(created, 3, "src, src/empty and src/sub are each created once");
}

#[test]
fn files_present_remotely_are_skipped_without_overwrite() {
    let (_temp, root) = local_fixture();
    let remote = ScriptedRemote::new();
    remote.add_file("/backup/src/data.csv", b"old");

    let report =
        upload_tree(&remote, &root, "/backup", &MirrorOptions::new()).expect("mirror");

    assert_eq!(
        remote.file("/backup/src/data.csv").unwrap(),
        b"old",
        "existing remote file is left alone"
    );
    assert_eq!(
        remote.file("/backup/src/notes.txt").unwrap(),
        b"notes",
        "files absent remotely are always uploaded"
    );
    assert_eq!(report.copied, 2);
    assert_eq!(report.skipped, 1);
}

#[test]
fn overwrite_replaces_files_present_remotely() {
    let (_temp, root) = local_fixture();
    let remote = ScriptedRemote::new();
    remote.add_file("/backup/src/data.csv", b"old");

    upload_tree(&remote, &root, "/backup", &MirrorOptions::new().overwrite(true))
        .expect("mirror");

    assert_eq!(remote.file("/backup/src/data.csv").unwrap(), b"1,2");
}

#[test]
fn file_type_restriction_filters_uploads() {
    let (_temp, root) = local_fixture();
    let remote = ScriptedRemote::new();
    remote.add_directory("/backup");

    let report = upload_tree(
        &remote,
        &root,
        "/backup",
        &MirrorOptions::new().restrict_file_types(["csv"]),
    )
    .expect("mirror");

    assert!(remote.file("/backup/src/data.csv").is_some());
    assert!(remote.file("/backup/src/sub/inner.csv").is_some());
    assert!(remote.file("/backup/src/notes.txt").is_none());
    assert_eq!(report.copied, 2);
    assert_eq!(report.skipped, 1);
}

#[test]
fn dry_run_against_existing_remote_tree_mutates_nothing() {
    let (_temp, root) = local_fixture();
    let remote = ScriptedRemote::new();
    remote.add_directory("/backup/src/empty");
    remote.add_directory("/backup/src/sub");

    let report = upload_tree(
        &remote,
        &root,
        "/backup",
        &MirrorOptions::new().dry_run(true),
    )
    .expect("mirror");

    assert_eq!(
        remote.count_calls(|call| matches!(call, Call::MakeDirectory(_) | Call::Store(_))),
        0
    );
    assert_eq!(report.planned, 3);
    assert_eq!(report.copied, 0);
    assert!(remote.file("/backup/src/notes.txt").is_none());
}

#[test]
fn dry_run_aborts_on_missing_remote_directory() {
    let (_temp, root) = local_fixture();
    let remote = ScriptedRemote::new();
    remote.add_directory("/backup");

    let error = upload_tree(
        &remote,
        &root,
        "/backup",
        &MirrorOptions::new().dry_run(true),
    )
    .expect_err("a directory that would need creating is fatal under dry run");

    assert!(matches!(
        error,
        MirrorError::DryRunMissingDirectory { ref path } if path == "/backup/src"
    ));
    assert_eq!(
        remote.count_calls(|call| matches!(call, Call::MakeDirectory(_))),
        0
    );
    assert_eq!(remote.calls().last(), Some(&Call::Quit), "session still closes");
}
