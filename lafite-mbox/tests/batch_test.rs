//! Integration tests for directory conversion

mod common;

use common::*;
use lafite_mbox::convert::{convert_directory, NullObserver};
use lafite_mbox::ErrorKind;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_convert_directory() {
    let in_dir = TempDir::new().unwrap();
    let out_root = TempDir::new().unwrap();
    let out_dir = out_root.path().join("nested").join("mbox");

    let mut two = lafite_message("US ", &["Subject: one"], b"1\r");
    two.extend(lafite_message("US ", &["Subject: two"], b"2\r"));
    fs::write(in_dir.path().join("Two.mail"), &two).unwrap();
    fs::write(
        in_dir.path().join("One.mail"),
        lafite_message("UU ", &["Subject: solo"], b"solo\r"),
    )
    .unwrap();
    fs::write(in_dir.path().join("README.txt"), b"not mail").unwrap();

    let report = convert_directory(
        in_dir.path(),
        &out_dir,
        "mail",
        "mbox",
        &test_options(),
        NullObserver,
    )
    .unwrap();

    assert!(report.is_success());
    assert_eq!(report.converted_count(), 2);
    assert_eq!(report.message_count(), 3);

    let one = fs::read(out_dir.join("One.mail.mbox")).unwrap();
    let two = fs::read(out_dir.join("Two.mail.mbox")).unwrap();
    assert_eq!(count_separators(&one), 1);
    assert_eq!(count_separators(&two), 2);
    assert!(!out_dir.join("README.txt.mbox").exists());
}

#[test]
fn test_failed_file_does_not_stop_batch() {
    let in_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    fs::write(
        in_dir.path().join("A.mail"),
        lafite_message("US ", &["Subject: a"], b"a\r"),
    )
    .unwrap();
    fs::write(in_dir.path().join("B.mail"), b"*start*\rgarbage\r").unwrap();
    fs::write(
        in_dir.path().join("C.mail"),
        lafite_message("US ", &["Subject: c"], b"c\r"),
    )
    .unwrap();

    let report = convert_directory(
        in_dir.path(),
        out_dir.path(),
        "mail",
        "mbox",
        &test_options(),
        NullObserver,
    )
    .unwrap();

    assert!(!report.is_success());
    assert_eq!(report.converted_count(), 2);
    assert_eq!(report.failed_count(), 1);
    assert!(report.failed[0].input.ends_with("B.mail"));
    assert_eq!(report.failed[0].error.kind(), ErrorKind::Framing);
    assert!(out_dir.path().join("C.mail.mbox").exists());
}

#[test]
fn test_indir_must_exist() {
    let root = TempDir::new().unwrap();
    let err = convert_directory(
        &root.path().join("missing"),
        root.path(),
        "mail",
        "mbox",
        &test_options(),
        NullObserver,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_empty_directory() {
    let in_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let report = convert_directory(
        in_dir.path(),
        out_dir.path(),
        "mail",
        "mbox",
        &test_options(),
        NullObserver,
    )
    .unwrap();
    assert_eq!(report.converted_count(), 0);
    assert!(report.is_success());
}
