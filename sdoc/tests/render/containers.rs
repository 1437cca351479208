//! Container rendering: wrapper markup around the in-order child fragments

use insta::assert_snapshot;
use sdoc::blocks::{Alert, Card, Col, Row, Table};
use sdoc::{Block, Compose, Document, SdocError};

#[test]
fn test_row_is_wrapper_around_children() {
    let mut row = Row::new();
    row.paragraph("one").unwrap();
    row.h2("two").unwrap();
    row.divider().unwrap();

    let children: String = row
        .children()
        .iter()
        .map(|child| child.render().unwrap())
        .collect();
    assert_eq!(
        row.render().unwrap(),
        format!(r#"<div class="row">{children}</div>"#)
    );
}

#[test]
fn test_nested_layout() {
    let mut row = Row::new();
    row.col().unwrap().paragraph("left").unwrap();
    let right = row.col().unwrap();
    right
        .card(Card::new().with_title("Totals"))
        .unwrap()
        .alert(Alert::warning("low"))
        .unwrap();

    assert_snapshot!(
        row.render().unwrap(),
        @r#"<div class="row"><div class="col"><p>left</p></div><div class="col"><div class="card"><div class="card-title">Totals</div><div class="alert alert-warning">low</div></div></div></div>"#
    );
}

#[test]
fn test_rerender_is_byte_identical() {
    let mut doc = Document::new("Stable");
    doc.toc().unwrap();
    doc.h1("Intro").unwrap();
    {
        let mut row = doc.row().unwrap();
        row.col().unwrap().paragraph("a").unwrap();
        row.col().unwrap().code("x < y", Some("rust")).unwrap();
    }
    doc.table(Table::new(["k", "v"], vec![vec!["a".into(), "1".into()]]).unwrap())
        .unwrap();

    let first = doc.render().unwrap();
    let second = doc.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_children_keep_insertion_order() {
    let mut col = Col::new();
    for word in ["c", "a", "b"] {
        col.paragraph(word).unwrap();
    }
    assert_eq!(
        col.render().unwrap(),
        r#"<div class="col"><p>c</p><p>a</p><p>b</p></div>"#
    );
}

#[test]
fn test_document_under_any_container_is_rejected() {
    let mut row = Row::new();
    let mut col = Col::new();
    let mut card = Card::new();
    let mut doc = Document::new("outer");

    for result in [
        row.add(Document::new("inner")).map(|_| ()),
        col.add(Document::new("inner")).map(|_| ()),
        card.add(Document::new("inner")).map(|_| ()),
        doc.add(Document::new("inner")).map(|_| ()),
    ] {
        assert!(matches!(result, Err(SdocError::InvalidOperation(_))));
    }
    assert!(row.is_empty() && col.is_empty() && card.is_empty() && doc.is_empty());
}
