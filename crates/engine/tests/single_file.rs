//! One-shot transfers: happy paths, and the report-and-return contract on
//! failure (a failed single-file transfer never aborts the caller).

use std::fs;

use engine::{download_file, upload_file};
use test_support::{Call, ScriptedRemote};

#[test]
fn uploads_one_file_under_its_base_name() {
    let remote = ScriptedRemote::new();
    remote.add_directory("/inbox");
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("hello.txt");
    fs::write(&source, b"hi").unwrap();

    upload_file(&remote, &source.to_string_lossy(), "/inbox");

    assert_eq!(remote.file("/inbox/hello.txt").unwrap(), b"hi");
    assert_eq!(remote.calls().last(), Some(&Call::Quit));
}

#[test]
fn upload_reports_missing_remote_directory_and_returns() {
    let remote = ScriptedRemote::new();
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("hello.txt");
    fs::write(&source, b"hi").unwrap();

    upload_file(&remote, &source.to_string_lossy(), "/nowhere");

    assert_eq!(remote.count_calls(|call| matches!(call, Call::Store(_))), 0);
    assert_eq!(remote.calls().last(), Some(&Call::Quit));
}

#[test]
fn upload_reports_missing_local_file_and_returns() {
    let remote = ScriptedRemote::new();
    remote.add_directory("/inbox");

    upload_file(&remote, "/definitely/missing/file.txt", "/inbox");

    assert_eq!(remote.count_calls(|call| matches!(call, Call::Store(_))), 0);
}

#[test]
fn upload_survives_a_rejected_login() {
    let remote = ScriptedRemote::new();
    remote.reject_login();
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("hello.txt");
    fs::write(&source, b"hi").unwrap();

    upload_file(&remote, &source.to_string_lossy(), "/inbox");

    assert!(remote.calls().is_empty());
}

#[test]
fn downloads_one_file_under_its_base_name() {
    let remote = ScriptedRemote::new();
    remote.add_file("/srv/logs/app.log", b"log line");
    let temp = tempfile::tempdir().expect("tempdir");

    download_file(&remote, "/srv/logs/app.log", &temp.path().to_string_lossy());

    assert_eq!(fs::read(temp.path().join("app.log")).unwrap(), b"log line");
    assert_eq!(remote.calls().last(), Some(&Call::Quit));
}

#[test]
fn download_reports_missing_remote_file_and_returns() {
    let remote = ScriptedRemote::new();
    let temp = tempfile::tempdir().expect("tempdir");

    download_file(&remote, "/srv/missing.log", &temp.path().to_string_lossy());

    assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
    assert_eq!(remote.calls().last(), Some(&Call::Quit));
}
