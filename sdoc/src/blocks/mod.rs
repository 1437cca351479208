//! Built-in block types
//!
//! Leaf blocks (text, media, tables, alerts) render from their own data. Layout blocks
//! ([`Row`], [`Col`], [`Card`]) own children and render them recursively. The
//! [`TableOfContents`] observes the document it is attached to.
//!
//! | Block            | Markup                                             | Context exposed           |
//! |------------------|----------------------------------------------------|---------------------------|
//! | Heading          | `<hN>`                                             | level, text               |
//! | Paragraph        | `<p>`                                              | text                      |
//! | List             | `<ul>`/`<ol>` + `<li>`                             | items, ordered            |
//! | Code             | `<pre class="code"><code class="language-x">`      | code, language            |
//! | Blockquote       | `<blockquote class="blockquote">`                  | text, source              |
//! | Alert            | `<div class="alert alert-LEVEL">`                  | level, text               |
//! | Divider          | `<hr class="divider">`                             | (none)                    |
//! | Markdown         | converted HTML                                     | html                      |
//! | Image            | `<img>`                                            | src, alt, width           |
//! | Plot             | `<img class="plot">` with a data URI               | src                       |
//! | Table            | `<table class="table ...">`                        | headers, rows, modifiers  |
//! | ExternalTable    | `<div class="external-table">`                     | html                      |
//! | Row / Col / Card | `<div class="row">` / `<div class="col">` / card   | rendered children         |
//! | TableOfContents  | heading + `<ul>` of anchors                        | entries                   |

pub mod layout;
pub mod markdown;
pub mod media;
pub mod table;
pub mod text;
pub mod toc;

pub use layout::{Card, Col, Row};
pub use markdown::Markdown;
pub use media::{Figure, Image, ImageSource, Plot, SvgFigure};
pub use table::{Alignment, ExternalTable, ExternalTableOptions, HtmlTable, Table};
pub use text::{Alert, AlertLevel, Blockquote, Code, Divider, Heading, List, Paragraph};
pub use toc::{TableOfContents, TocEntry};
