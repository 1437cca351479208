//! Template rendering seam
//!
//! Every block renders by handing its template and context to [`render_template`].
//! The engine is `minijinja`, configured once for the whole process. Block templates are
//! written as indented raw strings next to the block, so they are dedented before use.
//!
//! Auto-escaping is off: block text is caller-authored HTML-capable content and container
//! templates splice already-rendered child fragments. Blocks that display literal text
//! (code, the document title) escape explicitly with the `e` filter.

use crate::error::Result;
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use tracing::trace;

static ENVIRONMENT: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env
});

/// Render `template` against `context` and return the HTML fragment.
pub fn render_template(template: &str, context: Value) -> Result<String> {
    let source = dedent(template);
    trace!(bytes = source.len(), "rendering template");
    Ok(ENVIRONMENT.render_str(&source, context)?)
}

/// Strip the common leading indentation of all non-blank lines.
///
/// Leading and trailing blank lines are dropped as well.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let min_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let dedented = lines
        .iter()
        .map(|line| {
            if line.len() >= min_indent {
                &line[min_indent..]
            } else {
                line.trim_start()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    dedented.trim_matches('\n').trim_end().to_string()
}
