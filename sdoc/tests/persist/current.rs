//! The per-thread current document and named block types

use minijinja::{context, Value};
use sdoc::blocks::Row;
use sdoc::{
    build_block, current, register_block_type, Block, BlockOptions, Compose, Document, Node,
    SdocError,
};
use std::fs;
use tempfile::tempdir;

struct Badge {
    label: String,
}

impl Block for Badge {
    fn name(&self) -> &str {
        "badge"
    }

    fn template_body(&self) -> Option<&str> {
        Some(r#"<span class="badge">{{ label }}</span>"#)
    }

    fn context_data(&self) -> sdoc::Result<Value> {
        Ok(context! { label => &self.label })
    }
}

fn options(pairs: &[(&str, &str)]) -> BlockOptions {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn test_script_style_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("script.html");
    current::take_current();

    current::set_current(Document::new("Script"));
    current::toc().unwrap();
    current::h1("Overview").unwrap();
    current::paragraph("Built without a document variable.").unwrap();
    current::list(["a", "b"], true).unwrap();
    current::divider().unwrap();

    let written = current::save(Some(path.as_path())).unwrap();
    let html = fs::read_to_string(written).unwrap();
    assert!(html.contains("<title>Script</title>"));
    assert!(html.contains(r##"<a href="#Overview">Overview</a>"##));
    assert!(html.contains("<p>Built without a document variable.</p>"));
    current::take_current();
}

#[test]
fn test_registered_type_adds_to_current_document() {
    current::take_current();
    let add_badge = register_block_type("badge", |options: &BlockOptions| {
        let label = options.get("label").cloned().unwrap_or_default();
        Ok(Node::custom(Badge { label }))
    });

    add_badge(&options(&[("label", "beta")])).unwrap();
    current::add_named("badge", &options(&[("label", "rc")])).unwrap();

    let html = current::render().unwrap();
    assert!(html.contains(r#"<span class="badge">beta</span>"#));
    assert!(html.contains(r#"<span class="badge">rc</span>"#));
    assert!(sdoc::registered_block_types().contains(&"badge".to_string()));
    current::take_current();
}

#[test]
fn test_named_builtin_blocks() {
    let mut doc = Document::new("R");
    doc.add_named("h2", &options(&[("text", "Named")])).unwrap();
    doc.add_named("alert", &options(&[("text", "careful"), ("level", "error")]))
        .unwrap();
    let html = doc.render().unwrap();
    assert!(html.contains("<h2>Named</h2>"));
    assert!(html.contains(r#"<div class="alert alert-error">careful</div>"#));
}

#[test]
fn test_unknown_named_block() {
    let mut doc = Document::new("R");
    let result = doc.add_named("sparkline", &BlockOptions::new()).map(|_| ());
    assert!(matches!(result, Err(SdocError::UnknownBlockType(_))));
    assert!(doc.is_empty());
}

#[test]
fn test_named_toc_still_checks_placement() {
    let mut doc = Document::new("R");
    doc.add_named("toc", &BlockOptions::new()).unwrap();
    doc.h1("After").unwrap();
    let html = doc.render().unwrap();
    assert!(html.contains(r##"<a href="#After">After</a>"##));

    let mut row = Row::new();
    let node = build_block("toc", &BlockOptions::new()).unwrap();
    assert!(matches!(
        row.add(node).map(|_| ()),
        Err(SdocError::InvalidPlacement(_))
    ));
}
