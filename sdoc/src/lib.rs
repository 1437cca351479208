//! HTML reports built from composable blocks
//!
//!     This crate builds self-contained HTML reports from code. A report is a [`Document`] holding
//!     an ordered tree of typed blocks (headings, paragraphs, tables, images, charts, alerts and
//!     layout containers). Rendering walks the tree once and wraps the result in an HTML5 page
//!     with the theme stylesheet inlined.
//!
//!     TLDR:
//!         - Every block renders itself through a small template and the values it exposes (see block.rs).
//!         - Containers (the document, rows, columns, cards) own their children exclusively and render them in insertion order.
//!         - Adding a block returns a handle to it, so callers keep building in place.
//!         - A table of contents observes its document and is computed at render time.
//!         - Nothing here prints or reads the environment; the CLI (sdoc-cli) owns the shell.
//!
//! Architecture
//!
//!     The template engine and the markdown converter are external crates behind thin seams
//!     (template.rs, blocks/markdown.rs). Everything else is the block model:
//!
//!     .
//!     ├── error.rs                # SdocError
//!     ├── template.rs             # minijinja environment + dedent
//!     ├── block.rs                # Block / Container / Compose traits, Node enum
//!     ├── blocks
//!     │   ├── text.rs             # headings, paragraphs, lists, code, quotes, alerts, dividers
//!     │   ├── markdown.rs
//!     │   ├── media.rs            # images, plots, data URIs
//!     │   ├── table.rs            # tables and externally rendered tables
//!     │   ├── layout.rs           # rows, columns, cards
//!     │   └── toc.rs              # table of contents
//!     ├── document.rs             # Document, save / autosave
//!     ├── theme.rs                # embedded CSS themes (css/themes)
//!     ├── registry.rs             # block types by name
//!     ├── current.rs              # per-thread current document
//!     └── demo.rs                 # a report using every block
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── common
//!     ├── render                  # block and document output
//!     └── persist                 # save, autosave and the current document
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Composition
//!
//!     The typed vocabulary (h1, paragraph, table, row, ...) lives on the [`Compose`] trait and is
//!     shared by the document and the layout blocks. Bring it in scope with `use sdoc::Compose;`.
//!
//!     Blocks that do not ship with the crate implement [`Block`] and are wrapped with
//!     [`Node::custom`]. They can also be registered by name (see [`register_block_type`]) so
//!     that they are reachable from [`Document::add_named`] and the current-document helpers.
//!
//! Library Choices
//!
//!     minijinja renders block templates, comrak converts markdown and base64 encodes embedded
//!     images. Errors are a single thiserror enum; logging goes through tracing and is left to
//!     the application to install.
//!
pub mod block;
pub mod blocks;
pub mod current;
pub mod demo;
pub mod document;
pub mod error;
pub mod registry;
pub mod template;
pub mod theme;

pub use block::{attributes, Attachable, Block, Compose, Container, Node};
pub use demo::demo_document;
pub use document::{Document, DocumentOptions, DEFAULT_TITLE};
pub use error::{Result, SdocError};
pub use registry::{
    build_block, register_block_type, registered_block_types, BlockFactory, BlockOptions,
    BlockRegistry,
};
pub use theme::Theme;
