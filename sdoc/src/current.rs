//! The current document
//!
//! Script-style reports often build a single document top to bottom. This module keeps one
//! [`Document`] per thread and offers free functions that add to it, so such scripts do not
//! need to thread a document value through every call:
//!
//! ```ignore
//! use sdoc::current;
//!
//! current::h1("Weekly numbers")?;
//! current::paragraph("All green.")?;
//! current::save(Some(Path::new("weekly.html")))?;
//! ```
//!
//! The first use installs `Document::new("My Report")` unless [`set_current`] installed one
//! before. Documents are not `Send`, so each thread has its own current document.
//!
//! Every function here only delegates to the corresponding [`Document`] operation.
//! Handles to added blocks cannot outlive the call, so the add functions return `()`.

use crate::block::{Attachable, Compose};
use crate::blocks::{Alert, Blockquote, Code, ExternalTable, Image, Plot, Table};
use crate::document::Document;
use crate::error::{Result, SdocError};
use crate::registry::BlockOptions;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

thread_local! {
    static CURRENT: RefCell<Option<Document>> = const { RefCell::new(None) };
}

/// Install `document` as the current document, returning the one it replaces.
pub fn set_current(document: Document) -> Option<Document> {
    CURRENT.with(|current| current.borrow_mut().replace(document))
}

/// Remove and return the current document.
pub fn take_current() -> Option<Document> {
    CURRENT.with(|current| current.borrow_mut().take())
}

pub fn has_current() -> bool {
    CURRENT.with(|current| current.borrow().is_some())
}

/// Run `f` against the current document, creating a default one first if needed.
///
/// Fails with [`SdocError::InvalidOperation`] when called from inside another `with_current`
/// on the same thread (e.g. from a block factory run by [`add_named`]).
pub fn with_current<R>(f: impl FnOnce(&mut Document) -> Result<R>) -> Result<R> {
    CURRENT.with(|current| {
        let mut slot = current.try_borrow_mut().map_err(|_| {
            SdocError::InvalidOperation("the current document is already in use".to_string())
        })?;
        f(slot.get_or_insert_with(Document::default))
    })
}

macro_rules! text_adders {
    ($($fn_name:ident),+ $(,)?) => {
        $(
            pub fn $fn_name(text: impl Into<String>) -> Result<()> {
                with_current(|doc| doc.$fn_name(text).map(drop))
            }
        )+
    };
}

text_adders!(h1, h2, h3, h4, h5, h6, paragraph, blockquote);

pub fn heading(level: u8, text: impl Into<String>) -> Result<()> {
    with_current(|doc| doc.heading(level, text).map(drop))
}

pub fn markdown(text: &str) -> Result<()> {
    with_current(|doc| doc.markdown(text).map(drop))
}

pub fn image(image: Image) -> Result<()> {
    add(image)
}

pub fn list<I, S>(items: I, ordered: bool) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    with_current(|doc| doc.list(items, ordered).map(drop))
}

pub fn code(code: impl Into<String>, language: Option<&str>) -> Result<()> {
    add(Code::new(code, language))
}

/// Add a quote with an attribution footer.
pub fn blockquote_with_source(text: impl Into<String>, source: impl Into<String>) -> Result<()> {
    add(Blockquote::new(text).with_source(source))
}

pub fn table(table: Table) -> Result<()> {
    add(table)
}

pub fn external_table(table: ExternalTable) -> Result<()> {
    add(table)
}

pub fn plot(plot: Plot) -> Result<()> {
    add(plot)
}

pub fn alert(alert: Alert) -> Result<()> {
    add(alert)
}

pub fn divider() -> Result<()> {
    with_current(|doc| doc.divider().map(drop))
}

pub fn toc() -> Result<()> {
    with_current(Document::toc)
}

/// Add any block, including a fully built row, column or card.
pub fn add<T: Attachable>(block: T) -> Result<()> {
    with_current(|doc| doc.add(block).map(drop))
}

/// Build a block through the block registry and add it.
pub fn add_named(name: &str, options: &BlockOptions) -> Result<()> {
    with_current(|doc| doc.add_named(name, options).map(drop))
}

pub fn render() -> Result<String> {
    with_current(|doc| doc.render())
}

pub fn save(destination: Option<&Path>) -> Result<PathBuf> {
    with_current(|doc| doc.save(destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::Row;

    #[test]
    fn first_use_installs_default_document() {
        take_current();
        assert!(!has_current());
        paragraph("hello").unwrap();
        assert!(has_current());
        let doc = take_current().unwrap();
        assert_eq!(doc.title(), "My Report");
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn set_current_replaces_previous() {
        take_current();
        set_current(Document::new("First"));
        h1("A").unwrap();
        let previous = set_current(Document::new("Second")).unwrap();
        assert_eq!(previous.title(), "First");
        assert_eq!(previous.len(), 1);

        let html = render().unwrap();
        assert!(html.contains("<title>Second</title>"));
        assert!(!html.contains("<h1>A</h1>"));
        take_current();
    }

    #[test]
    fn nested_use_is_rejected() {
        take_current();
        let result = with_current(|_| paragraph("inner"));
        assert!(matches!(result, Err(SdocError::InvalidOperation(_))));
        take_current();
    }

    #[test]
    fn prebuilt_containers_are_added_whole() {
        take_current();
        let mut row = Row::new();
        row.paragraph("left").unwrap();
        row.paragraph("right").unwrap();
        add(row).unwrap();
        let html = render().unwrap();
        assert!(html.contains(r#"<div class="row"><p>left</p><p>right</p></div>"#));
        take_current();
    }

    #[test]
    fn save_without_destination_fails() {
        take_current();
        assert!(matches!(save(None), Err(SdocError::MissingDestination)));
        take_current();
    }
}
