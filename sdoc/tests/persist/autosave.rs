//! Autosave: every successful add rewrites the destination

use sdoc::blocks::Row;
use sdoc::{Compose, Document, DocumentOptions, SdocError};
use std::fs;
use tempfile::tempdir;

fn paragraph_count(html: &str) -> usize {
    html.matches("<p>").count()
}

#[test]
fn test_each_add_writes_current_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("live.html");
    let options = DocumentOptions::new()
        .with_destination(&path)
        .with_autosave(true);
    let mut doc = Document::with_options("Live", options);
    assert!(!path.exists());

    for k in 1..=4 {
        doc.paragraph(format!("block {k}")).unwrap();
        let html = fs::read_to_string(&path).unwrap();
        assert_eq!(paragraph_count(&html), k);
        assert!(html.contains(&format!("<p>block {k}</p>")));
    }
}

#[test]
fn test_autosave_without_destination_rolls_back() {
    let mut doc = Document::with_options("R", DocumentOptions::new().with_autosave(true));
    let result = doc.paragraph("lost").map(|_| ());
    assert!(matches!(result, Err(SdocError::MissingDestination)));
    assert!(doc.is_empty());
}

#[test]
fn test_failed_write_rolls_back() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("report.html");
    let mut doc = Document::with_options(
        "R",
        DocumentOptions::new()
            .with_destination(&good)
            .with_autosave(true),
    );
    doc.h1("kept").unwrap();

    doc.set_destination(Some(dir.path().join("missing").join("report.html")));
    let result = doc.paragraph("dropped").map(|_| ());
    assert!(matches!(result, Err(SdocError::Io { .. })));
    assert_eq!(doc.len(), 1);

    doc.set_destination(Some(good.clone()));
    doc.paragraph("retry").unwrap();
    let html = fs::read_to_string(&good).unwrap();
    assert!(html.contains("<h1>kept</h1>"));
    assert!(html.contains("<p>retry</p>"));
    assert!(!html.contains("dropped"));
}

#[test]
fn test_autosave_can_be_toggled() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.html");
    let mut doc = Document::with_options("R", DocumentOptions::new().with_destination(&path));
    doc.paragraph("quiet").unwrap();
    assert!(!path.exists());

    doc.set_autosave(true);
    doc.add(Row::new()).unwrap();
    assert!(fs::read_to_string(&path)
        .unwrap()
        .contains(r#"<div class="row"></div>"#));
}
