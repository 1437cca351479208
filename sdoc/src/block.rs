//! Block contract
//!
//! This module defines the traits every piece of report content goes through:
//!
//! - [`Block`]: anything that can render itself to an HTML fragment. Implementors supply a
//!   template, the values that template sees, and optionally an attach hook. Rendering itself
//!   is provided by the trait and is the same for every block.
//! - [`Container`]: the parent side of attachment. It is object safe so a block's attach hook
//!   can inspect what it is being attached to.
//! - [`Compose`]: the typed "add X" vocabulary shared by the document and the layout blocks.
//! - [`Node`]: the closed set of built-in block variants (plus [`Node::Custom`] for blocks
//!   registered by third parties). Containers own `Vec<Node>`.
//!
//! # Ownership
//!
//! A block is moved into exactly one container when it is added. It is never re-attached and
//! containers never share children, so the block tree has no cycles. The only reference that
//! crosses the tree is the table of contents observing its document (see
//! [`crate::blocks::toc`]), and that reference is weak.

use crate::blocks::{
    Alert, Blockquote, Card, Code, Col, Divider, ExternalTable, Heading, Image, List, Markdown,
    Paragraph, Plot, Row, Table, TableOfContents,
};
use crate::document::Document;
use crate::error::{Result, SdocError};
use crate::template::render_template;
use minijinja::Value;
use serde::Serialize;
use std::ops::DerefMut;
use tracing::debug;

/// A unit of content able to produce an HTML fragment from its own data.
///
/// # Examples
///
/// ```ignore
/// struct Badge { label: String }
///
/// impl Block for Badge {
///     fn name(&self) -> &str {
///         "badge"
///     }
///
///     fn template_body(&self) -> Option<&str> {
///         Some(r#"<span class="badge">{{ label }}</span>"#)
///     }
///
///     fn context_data(&self) -> Result<Value> {
///         Ok(minijinja::context! { label => &self.label })
///     }
/// }
/// ```
pub trait Block {
    /// Block type name (e.g. "paragraph", "row"), used in logs and error messages
    fn name(&self) -> &str;

    /// The template this block renders through.
    ///
    /// Returning `None` means the type is not a renderable block; [`Block::render`] then
    /// fails with [`SdocError::AbstractUsage`].
    fn template_body(&self) -> Option<&str> {
        None
    }

    /// Values exposed to the template.
    ///
    /// Most blocks expose all of their attributes (see [`attributes`]). Blocks holding
    /// derived state expose only what their template needs.
    fn context_data(&self) -> Result<Value>;

    /// Hook run once, when the block is appended to `parent`.
    ///
    /// An error aborts the attachment and the block is not appended.
    fn on_attach(&mut self, _parent: &dyn Container) -> Result<()> {
        Ok(())
    }

    /// Render this block to an HTML fragment.
    ///
    /// Composes [`Block::template_body`] with [`Block::context_data`]. Block types are not
    /// expected to override this.
    fn render(&self) -> Result<String> {
        let template = self
            .template_body()
            .ok_or_else(|| SdocError::AbstractUsage(self.name().to_string()))?;
        render_template(template, self.context_data()?)
    }
}

/// Expose every serialized field of `block` to its template.
pub fn attributes<T: Serialize>(block: &T) -> Value {
    Value::from_serialize(block)
}

/// Render each block in order.
pub fn render_all(blocks: &[Node]) -> Result<Vec<String>> {
    blocks.iter().map(Block::render).collect()
}

/// The parent side of attachment.
pub trait Container {
    /// Name used in logs and error messages
    fn container_name(&self) -> &str;

    /// `Some` only when the container is a [`Document`].
    ///
    /// Blocks that may only live at the top level of a document (the table of contents)
    /// check this in their attach hook.
    fn as_document(&self) -> Option<&Document> {
        None
    }
}

/// A built-in block variant that can be recovered from a [`Node`] after attachment.
pub trait Attachable: Into<Node> + 'static {
    fn project_mut(node: &mut Node) -> Option<&mut Self>;
}

/// Typed "add" operations shared by [`Document`] and the layout blocks.
///
/// `add` runs the block's attach hook, appends it and hands back a mutable handle to it so
/// callers can keep building (e.g. adding children to a returned row). The handle type is
/// container specific: a plain `&mut T` for layout blocks, a `RefMut` for the document.
pub trait Compose: Container {
    type Slot<'a, T: 'a>: DerefMut<Target = T>
    where
        Self: 'a;

    /// Attach `block` and append it to this container.
    fn add<T: Attachable>(&mut self, block: T) -> Result<Self::Slot<'_, T>>;

    fn heading(&mut self, level: u8, text: impl Into<String>) -> Result<Self::Slot<'_, Heading>> {
        self.add(Heading::new(level, text)?)
    }

    fn h1(&mut self, text: impl Into<String>) -> Result<Self::Slot<'_, Heading>> {
        self.add(Heading::h1(text))
    }

    fn h2(&mut self, text: impl Into<String>) -> Result<Self::Slot<'_, Heading>> {
        self.add(Heading::h2(text))
    }

    fn h3(&mut self, text: impl Into<String>) -> Result<Self::Slot<'_, Heading>> {
        self.add(Heading::h3(text))
    }

    fn h4(&mut self, text: impl Into<String>) -> Result<Self::Slot<'_, Heading>> {
        self.add(Heading::h4(text))
    }

    fn h5(&mut self, text: impl Into<String>) -> Result<Self::Slot<'_, Heading>> {
        self.add(Heading::h5(text))
    }

    fn h6(&mut self, text: impl Into<String>) -> Result<Self::Slot<'_, Heading>> {
        self.add(Heading::h6(text))
    }

    fn paragraph(&mut self, text: impl Into<String>) -> Result<Self::Slot<'_, Paragraph>> {
        self.add(Paragraph::new(text))
    }

    fn markdown(&mut self, text: &str) -> Result<Self::Slot<'_, Markdown>> {
        self.add(Markdown::new(text))
    }

    fn image(&mut self, image: Image) -> Result<Self::Slot<'_, Image>> {
        self.add(image)
    }

    fn list<I, S>(&mut self, items: I, ordered: bool) -> Result<Self::Slot<'_, List>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add(List::new(items, ordered))
    }

    fn code(
        &mut self,
        code: impl Into<String>,
        language: Option<&str>,
    ) -> Result<Self::Slot<'_, Code>> {
        self.add(Code::new(code, language))
    }

    fn blockquote(&mut self, text: impl Into<String>) -> Result<Self::Slot<'_, Blockquote>> {
        self.add(Blockquote::new(text))
    }

    fn table(&mut self, table: Table) -> Result<Self::Slot<'_, Table>> {
        self.add(table)
    }

    fn external_table(&mut self, table: ExternalTable) -> Result<Self::Slot<'_, ExternalTable>> {
        self.add(table)
    }

    fn plot(&mut self, plot: Plot) -> Result<Self::Slot<'_, Plot>> {
        self.add(plot)
    }

    fn alert(&mut self, alert: Alert) -> Result<Self::Slot<'_, Alert>> {
        self.add(alert)
    }

    fn divider(&mut self) -> Result<Self::Slot<'_, Divider>> {
        self.add(Divider)
    }

    fn row(&mut self) -> Result<Self::Slot<'_, Row>> {
        self.add(Row::new())
    }

    fn col(&mut self) -> Result<Self::Slot<'_, Col>> {
        self.add(Col::new())
    }

    fn card(&mut self, card: Card) -> Result<Self::Slot<'_, Card>> {
        self.add(card)
    }
}

/// Run `node`'s attach hook against `parent`.
///
/// Shared by every container so attachment is logged and validated the same way.
pub(crate) fn attach(parent: &dyn Container, node: &mut Node) -> Result<()> {
    node.on_attach(parent)?;
    debug!(
        block = node.name(),
        parent = parent.container_name(),
        "attached block"
    );
    Ok(())
}

/// Recover the block just appended to `nodes` as its concrete type.
pub(crate) fn last_as<T: Attachable>(nodes: &mut [Node]) -> Result<&mut T> {
    nodes
        .last_mut()
        .and_then(T::project_mut)
        .ok_or_else(|| SdocError::InvalidOperation("attached block changed variant".to_string()))
}

macro_rules! node_variants {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// Every block a container can own.
        pub enum Node {
            $($variant($ty),)+
            /// A block type registered outside this crate
            Custom(Box<dyn Block>),
        }

        $(
            impl From<$ty> for Node {
                fn from(block: $ty) -> Self {
                    Node::$variant(block)
                }
            }

            impl Attachable for $ty {
                fn project_mut(node: &mut Node) -> Option<&mut Self> {
                    match node {
                        Node::$variant(block) => Some(block),
                        _ => None,
                    }
                }
            }
        )+

        impl Node {
            fn inner(&self) -> &(dyn Block + 'static) {
                match self {
                    $(Node::$variant(block) => block,)+
                    Node::Custom(block) => block.as_ref(),
                }
            }

            fn inner_mut(&mut self) -> &mut (dyn Block + 'static) {
                match self {
                    $(Node::$variant(block) => block,)+
                    Node::Custom(block) => block.as_mut(),
                }
            }
        }
    };
}

node_variants! {
    Heading(Heading),
    Paragraph(Paragraph),
    Image(Image),
    List(List),
    Markdown(Markdown),
    Code(Code),
    Blockquote(Blockquote),
    Table(Table),
    ExternalTable(ExternalTable),
    Plot(Plot),
    Alert(Alert),
    Divider(Divider),
    Row(Row),
    Col(Col),
    Card(Card),
    Toc(TableOfContents),
}

impl Node {
    /// Wrap a block type defined outside this crate.
    pub fn custom(block: impl Block + 'static) -> Self {
        Node::Custom(Box::new(block))
    }

    /// `(level, text)` when this node is a heading.
    pub fn heading(&self) -> Option<(u8, &str)> {
        match self {
            Node::Heading(heading) => Some((heading.level(), heading.text())),
            Node::Paragraph(_)
            | Node::Image(_)
            | Node::List(_)
            | Node::Markdown(_)
            | Node::Code(_)
            | Node::Blockquote(_)
            | Node::Table(_)
            | Node::ExternalTable(_)
            | Node::Plot(_)
            | Node::Alert(_)
            | Node::Divider(_)
            | Node::Row(_)
            | Node::Col(_)
            | Node::Card(_)
            | Node::Toc(_)
            | Node::Custom(_) => None,
        }
    }

    /// Heading level when this node is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        self.heading().map(|(level, _)| level)
    }
}

impl Attachable for Node {
    fn project_mut(node: &mut Node) -> Option<&mut Self> {
        Some(node)
    }
}

impl Block for Node {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn template_body(&self) -> Option<&str> {
        self.inner().template_body()
    }

    fn context_data(&self) -> Result<Value> {
        self.inner().context_data()
    }

    fn on_attach(&mut self, parent: &dyn Container) -> Result<()> {
        self.inner_mut().on_attach(parent)
    }

    fn render(&self) -> Result<String> {
        self.inner().render()
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Node").field(&self.name()).finish()
    }
}
