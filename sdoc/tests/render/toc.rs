//! Table of contents placement and scanning

use crate::common::{headings, toc_links};
use sdoc::blocks::{Card, Row, TableOfContents, TocEntry};
use sdoc::{Compose, Document, Node, SdocError};

#[test]
fn test_toc_only_attaches_to_documents() {
    let mut row = Row::new();
    assert!(matches!(
        row.add(TableOfContents::new()).map(|_| ()),
        Err(SdocError::InvalidPlacement(_))
    ));

    let mut card = Card::new();
    assert!(matches!(
        card.add(TableOfContents::new()).map(|_| ()),
        Err(SdocError::InvalidPlacement(_))
    ));

    let mut doc = Document::new("R");
    assert!(doc.toc().is_ok());
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_toc_scans_levels_one_to_three() {
    let mut doc = Document::new("R");
    doc.h1("A").unwrap();
    doc.paragraph("x").unwrap();
    doc.h2("B").unwrap();
    doc.h3("C").unwrap();
    doc.h4("D").unwrap();
    doc.h6("F").unwrap();
    doc.toc().unwrap();

    let blocks = doc.blocks();
    let Some(Node::Toc(toc)) = blocks.last() else {
        panic!("expected the table of contents last");
    };
    assert_eq!(
        toc.entries(),
        vec![
            TocEntry { level: 1, text: "A".to_string() },
            TocEntry { level: 2, text: "B".to_string() },
            TocEntry { level: 3, text: "C".to_string() },
        ]
    );
}

#[test]
fn test_toc_skips_interleaved_deep_headings() {
    let mut doc = Document::new("R");
    doc.toc().unwrap();
    doc.h1("A").unwrap();
    doc.h4("skip").unwrap();
    doc.h2("B").unwrap();
    doc.h3("C").unwrap();

    let blocks = doc.blocks();
    let Some(Node::Toc(toc)) = blocks.first() else {
        panic!("expected the table of contents first");
    };
    let entries: Vec<(u8, String)> = toc
        .entries()
        .into_iter()
        .map(|entry| (entry.level, entry.text))
        .collect();
    assert_eq!(
        entries,
        vec![
            (1, "A".to_string()),
            (2, "B".to_string()),
            (3, "C".to_string()),
        ]
    );
}

#[test]
fn test_toc_added_after_headings_lists_them() {
    let mut doc = Document::new("R");
    doc.h1("A").unwrap();
    doc.h2("B").unwrap();
    doc.toc().unwrap();

    let html = doc.render().unwrap();
    assert_eq!(toc_links(&html), vec!["A", "B"]);
}

#[test]
fn test_toc_sees_headings_added_later() {
    let mut doc = Document::new("R");
    doc.toc().unwrap();
    doc.h1("Intro").unwrap();
    doc.h2("Method").unwrap();

    let html = doc.render().unwrap();
    assert_eq!(toc_links(&html), vec!["Intro", "Method"]);
    assert_eq!(
        headings(&html),
        vec![
            (1, "Table of Contents".to_string()),
            (1, "Intro".to_string()),
            (2, "Method".to_string()),
        ]
    );
}

#[test]
fn test_toc_ignores_headings_inside_containers() {
    let mut doc = Document::new("R");
    doc.toc().unwrap();
    doc.h1("Top").unwrap();
    {
        let mut row = doc.row().unwrap();
        row.col().unwrap().h2("Nested").unwrap();
    }
    let html = doc.render().unwrap();
    assert_eq!(toc_links(&html), vec!["Top"]);
}

#[test]
fn test_detached_toc_renders_empty_list() {
    let toc = TableOfContents::new();
    assert!(toc.entries().is_empty());
    let html = sdoc::Block::render(&toc).unwrap();
    assert!(html.starts_with("<h1>Table of Contents</h1>"));
    assert!(toc_links(&html).is_empty());
}
