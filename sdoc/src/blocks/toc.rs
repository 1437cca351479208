//! Table of contents
//!
//! A [`TableOfContents`] may only be added directly to a [`Document`](crate::Document). When
//! it is attached it keeps a weak reference to the document's live block sequence, not a
//! copy. Entries are collected when the table renders, so headings added to the document
//! after the table are listed too: the table always reflects the final document.
//!
//! Only top-level headings of levels 1 to 3 are listed. Levels 4 to 6 still render as
//! headings but are left out of the table.
//!
//! Links point at `#<heading text>` verbatim. The text is not slugified, so anchors are not
//! guaranteed to be unique or URL-safe, and headings carry no matching `id`.

use crate::block::{Block, Container, Node};
use crate::error::{Result, SdocError};
use minijinja::{context, Value};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Weak;

/// Deepest heading level listed in the table
const MAX_LEVEL: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct TableOfContents {
    source: Option<Weak<RefCell<Vec<Node>>>>,
}

impl TableOfContents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the table has been attached to a document that is still alive.
    pub fn is_bound(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(|source| source.strong_count() > 0)
    }

    /// Headings of the observed document, in document order.
    ///
    /// Empty when the table was never attached, its document has been dropped, or the
    /// document's blocks are currently borrowed mutably (e.g. through a handle returned by
    /// an add).
    pub fn entries(&self) -> Vec<TocEntry> {
        let Some(blocks) = self.source.as_ref().and_then(Weak::upgrade) else {
            return Vec::new();
        };
        let Ok(blocks) = blocks.try_borrow() else {
            return Vec::new();
        };
        blocks
            .iter()
            .filter_map(Node::heading)
            .filter(|(level, _)| *level <= MAX_LEVEL)
            .map(|(level, text)| TocEntry {
                level,
                text: text.to_string(),
            })
            .collect()
    }
}

impl Block for TableOfContents {
    fn name(&self) -> &str {
        "toc"
    }

    fn template_body(&self) -> Option<&str> {
        Some(
            r##"
            <h1>Table of Contents</h1>
            <ul>
            {% for entry in entries %}
                <li><a href="#{{ entry.text }}">{{ entry.text }}</a></li>
            {% endfor %}
            </ul>
            "##,
        )
    }

    fn context_data(&self) -> Result<Value> {
        Ok(context! { entries => self.entries() })
    }

    fn on_attach(&mut self, parent: &dyn Container) -> Result<()> {
        let document = parent.as_document().ok_or_else(|| {
            SdocError::InvalidPlacement(format!(
                "a table of contents must be added to a document, not a {}",
                parent.container_name()
            ))
        })?;
        self.source = Some(document.observe());
        Ok(())
    }
}
