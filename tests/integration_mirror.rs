//! End-to-end mirroring through the public facade: a download/upload round
//! trip against the in-memory remote, exercised the way a caller would use
//! the crate.

use std::fs;

use ftps_sync::{download_tree, upload_tree, MirrorOptions};
use test_support::{Call, ScriptedRemote};

#[test]
fn round_trip_preserves_tree_shape_and_contents() {
    let remote = ScriptedRemote::new();
    remote.add_file("/srv/project/readme.md", b"hello");
    remote.add_file("/srv/project/data/values.csv", b"1,2,3");

    // Remote -> local: /srv/project lands under <tmp>/project.
    let checkout = tempfile::tempdir().expect("tempdir");
    let report = download_tree(
        &remote,
        "/srv/project",
        &checkout.path().to_string_lossy(),
        &MirrorOptions::new(),
    )
    .expect("download");
    assert_eq!(report.copied, 2);

    let project = checkout.path().join("project");
    assert_eq!(fs::read(project.join("readme.md")).unwrap(), b"hello");
    assert_eq!(fs::read(project.join("data/values.csv")).unwrap(), b"1,2,3");

    // Local -> remote: the checkout goes back up under a fresh prefix.
    remote.add_directory("/restore");
    let report = upload_tree(
        &remote,
        &project.to_string_lossy(),
        "/restore",
        &MirrorOptions::new(),
    )
    .expect("upload");
    assert_eq!(report.copied, 2);

    assert_eq!(remote.file("/restore/project/readme.md").unwrap(), b"hello");
    assert_eq!(
        remote.file("/restore/project/data/values.csv").unwrap(),
        b"1,2,3"
    );
}

#[test]
fn each_operation_uses_exactly_one_session() {
    let remote = ScriptedRemote::new();
    remote.add_file("/srv/project/readme.md", b"hello");

    let checkout = tempfile::tempdir().expect("tempdir");
    download_tree(
        &remote,
        "/srv/project",
        &checkout.path().to_string_lossy(),
        &MirrorOptions::new(),
    )
    .expect("download");

    assert_eq!(remote.count_calls(|call| matches!(call, Call::Connect)), 1);
    assert_eq!(remote.count_calls(|call| matches!(call, Call::Quit)), 1);
}

#[test]
fn repeated_download_converges() {
    let remote = ScriptedRemote::new();
    remote.add_file("/srv/project/a.txt", b"a");
    remote.add_file("/srv/project/nested/b.txt", b"b");

    let checkout = tempfile::tempdir().expect("tempdir");
    let root = checkout.path().to_string_lossy().into_owned();
    let options = MirrorOptions::new();

    let first = download_tree(&remote, "/srv/project", &root, &options).expect("first");
    let second = download_tree(&remote, "/srv/project", &root, &options).expect("second");

    assert_eq!(first.copied, 2);
    assert_eq!(second.copied, 0);
    assert_eq!(second.skipped, 2);
}
