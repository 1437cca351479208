//! The report document
//!
//! A [`Document`] is the root of a block tree. It owns its top-level blocks in insertion
//! order and renders them inside a complete HTML5 page with the theme stylesheet inlined.
//!
//! # Lifecycle
//!
//! Construction does no I/O. Every add runs the block's attach hook, appends it, and, when
//! autosave is on, writes the whole document to its destination. Adds are all-or-nothing: if
//! the attach hook or the autosave fails, the block is not left in the document.
//!
//! ```ignore
//! let mut doc = Document::new("Quarterly");
//! doc.toc()?;
//! doc.h1("Revenue")?;
//! doc.paragraph("Up and to the right.")?;
//! doc.save(Some(Path::new("report.html")))?;
//! ```
//!
//! # Sharing
//!
//! The block sequence lives behind `Rc<RefCell<..>>` so a [`TableOfContents`] can observe
//! it without owning it. A document is therefore neither `Send` nor `Sync`.

use crate::block::{attach, render_all, Attachable, Block, Compose, Container, Node};
use crate::blocks::TableOfContents;
use crate::error::{Result, SdocError};
use crate::registry::{build_block, BlockOptions};
use crate::theme::Theme;
use minijinja::{context, Value};
use std::cell::{Ref, RefCell, RefMut};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};
use tracing::{debug, info};

/// Title used when none is given
pub const DEFAULT_TITLE: &str = "My Report";

/// Construction options for a [`Document`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Where [`Document::save`] writes when called without an explicit path
    pub destination: Option<PathBuf>,
    /// Save after every successful add
    pub autosave: bool,
    pub theme: Theme,
    /// Appended after the theme stylesheet
    pub custom_css: Option<String>,
}

impl DocumentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Select a theme by name; unknown names select [`Theme::Default`].
    pub fn with_theme_name(self, name: &str) -> Self {
        self.with_theme(Theme::from_name(name))
    }

    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }
}

/// A report: title, options and the ordered top-level blocks.
#[derive(Debug)]
pub struct Document {
    title: String,
    options: DocumentOptions,
    blocks: Rc<RefCell<Vec<Node>>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_options(title, DocumentOptions::default())
    }

    pub fn with_options(title: impl Into<String>, options: DocumentOptions) -> Self {
        Self {
            title: title.into(),
            options,
            blocks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn destination(&self) -> Option<&Path> {
        self.options.destination.as_deref()
    }

    pub fn set_destination(&mut self, destination: Option<PathBuf>) {
        self.options.destination = destination;
    }

    pub fn autosave(&self) -> bool {
        self.options.autosave
    }

    pub fn set_autosave(&mut self, autosave: bool) {
        self.options.autosave = autosave;
    }

    pub fn theme(&self) -> Theme {
        self.options.theme
    }

    pub fn custom_css(&self) -> Option<&str> {
        self.options.custom_css.as_deref()
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Number of top-level blocks
    pub fn len(&self) -> usize {
        self.blocks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.borrow().is_empty()
    }

    /// Read access to the top-level blocks, in render order.
    pub fn blocks(&self) -> Ref<'_, Vec<Node>> {
        self.blocks.borrow()
    }

    /// A weak handle on the live block sequence, for observers such as the table of contents.
    pub(crate) fn observe(&self) -> Weak<RefCell<Vec<Node>>> {
        Rc::downgrade(&self.blocks)
    }

    /// Add a table of contents listing this document's level 1-3 headings.
    ///
    /// No handle is returned: the table reads the block sequence at render time, which a live
    /// handle from [`Compose::add`] would keep borrowed.
    pub fn toc(&mut self) -> Result<()> {
        self.add(TableOfContents::new()).map(drop)
    }

    /// Build a block through the block registry and add it.
    pub fn add_named(&mut self, name: &str, options: &BlockOptions) -> Result<RefMut<'_, Node>> {
        let node = build_block(name, options)?;
        self.add(node)
    }

    /// Render the full HTML page.
    pub fn render(&self) -> Result<String> {
        Block::render(self)
    }

    /// Render and write the page.
    ///
    /// Writes to `destination` when given, otherwise to the stored destination. Fails with
    /// [`SdocError::MissingDestination`] before rendering or writing when neither is set.
    /// Returns the path written.
    pub fn save(&self, destination: Option<&Path>) -> Result<PathBuf> {
        let path = destination
            .map(Path::to_path_buf)
            .or_else(|| self.options.destination.clone())
            .ok_or(SdocError::MissingDestination)?;
        let html = self.render()?;
        fs::write(&path, html).map_err(|source| SdocError::io(&path, source))?;
        info!(path = %path.display(), blocks = self.len(), "saved document");
        Ok(path)
    }
}

impl Container for Document {
    fn container_name(&self) -> &str {
        "document"
    }

    fn as_document(&self) -> Option<&Document> {
        Some(self)
    }
}

impl Compose for Document {
    type Slot<'a, T: 'a> = RefMut<'a, T>;

    fn add<T: Attachable>(&mut self, block: T) -> Result<Self::Slot<'_, T>> {
        let mut node = block.into();
        attach(&*self, &mut node)?;
        self.blocks.borrow_mut().push(node);

        if self.options.autosave {
            if let Err(err) = self.save(None) {
                let removed = self.blocks.borrow_mut().pop();
                debug!(
                    block = removed.as_ref().map(Block::name),
                    "autosave failed, block removed"
                );
                return Err(err);
            }
        }

        RefMut::filter_map(self.blocks.borrow_mut(), |blocks| {
            blocks.last_mut().and_then(T::project_mut)
        })
        .map_err(|_| SdocError::InvalidOperation("attached block changed variant".to_string()))
    }
}

impl Block for Document {
    fn name(&self) -> &str {
        "document"
    }

    fn template_body(&self) -> Option<&str> {
        Some(
            r#"
            <!DOCTYPE html>
            <html lang="en">
            <head>
              <meta charset="UTF-8">
              <meta name="viewport" content="width=device-width, initial-scale=1.0">
              <meta name="generator" content="sdoc">
              <title>{{ title|e }}</title>
              <style>
            {{ theme_css }}
            {{ custom_css }}
              </style>
            </head>
            <body>
            {% for block in blocks %}
            {{ block }}
            {% endfor %}
            </body>
            </html>
            "#,
        )
    }

    fn context_data(&self) -> Result<Value> {
        let blocks = render_all(&self.blocks.borrow())?;
        Ok(context! {
            title => &self.title,
            theme_css => self.options.theme.css(),
            custom_css => self.options.custom_css.as_deref().unwrap_or(""),
            blocks => blocks,
        })
    }

    fn on_attach(&mut self, parent: &dyn Container) -> Result<()> {
        Err(SdocError::InvalidOperation(format!(
            "a document cannot be added to a {}",
            parent.container_name()
        )))
    }
}

impl From<Document> for Node {
    fn from(document: Document) -> Self {
        Node::custom(document)
    }
}

impl Attachable for Document {
    fn project_mut(_node: &mut Node) -> Option<&mut Self> {
        None
    }
}
