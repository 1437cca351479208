//! Explicit saves

use sdoc::{Compose, Document, DocumentOptions, SdocError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_without_destination_writes_nothing() {
    let dir = tempdir().unwrap();
    let mut doc = Document::new("R");
    doc.paragraph("hi").unwrap();

    assert!(matches!(doc.save(None), Err(SdocError::MissingDestination)));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_save_uses_stored_destination() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.html");
    let mut doc = Document::with_options("R", DocumentOptions::new().with_destination(&path));
    doc.paragraph("hi").unwrap();

    let written = doc.save(None).unwrap();
    assert_eq!(written, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), doc.render().unwrap());
}

#[test]
fn test_explicit_destination_wins() {
    let dir = tempdir().unwrap();
    let stored = dir.path().join("stored.html");
    let explicit = dir.path().join("explicit.html");
    let doc = Document::with_options("R", DocumentOptions::new().with_destination(&stored));

    doc.save(Some(explicit.as_path())).unwrap();
    assert!(explicit.exists());
    assert!(!stored.exists());
}

#[test]
fn test_save_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.html");
    fs::write(&path, "stale content that is much longer than nothing at all").unwrap();

    let mut doc = Document::new("R");
    doc.paragraph("fresh").unwrap();
    doc.save(Some(path.as_path())).unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("<p>fresh</p>"));
    assert!(!html.contains("stale"));
}

#[test]
fn test_unwritable_destination_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("report.html");
    let doc = Document::new("R");
    match doc.save(Some(path.as_path())) {
        Err(SdocError::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("Expected Io error, got {other:?}"),
    }
}
