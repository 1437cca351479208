//! Markdown block
//!
//! The source is dedented (so it can be written as an indented raw string inside code) and
//! converted with `comrak` when the block is built. Only the converted HTML reaches the
//! template.

use crate::block::Block;
use crate::error::Result;
use crate::template::dedent;
use comrak::{markdown_to_html as comrak_to_html, ComrakOptions};
use minijinja::{context, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markdown {
    text: String,
    html: String,
}

impl Markdown {
    pub fn new(text: &str) -> Self {
        let text = dedent(text);
        let html = markdown_to_html(&text);
        Self { text, html }
    }

    /// The dedented markdown source
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The converted HTML
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl Block for Markdown {
    fn name(&self) -> &str {
        "markdown"
    }

    fn template_body(&self) -> Option<&str> {
        Some("{{ html }}")
    }

    fn context_data(&self) -> Result<Value> {
        Ok(context! { html => &self.html })
    }
}

/// Convert CommonMark (with GFM tables, strikethrough, autolinks and task lists) to HTML.
pub fn markdown_to_html(text: &str) -> String {
    comrak_to_html(text, &default_comrak_options())
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    // Reports embed raw HTML snippets in markdown
    options.render.unsafe_ = true;
    options
}
