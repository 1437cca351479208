//! Text blocks: headings, paragraphs, lists, code, quotes, alerts and dividers

use crate::block::{attributes, Block};
use crate::error::{Result, SdocError};
use minijinja::Value;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A section heading, levels 1 to 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    level: u8,
    text: String,
}

impl Heading {
    /// Create a heading, rejecting levels outside 1..=6.
    pub fn new(level: u8, text: impl Into<String>) -> Result<Self> {
        if !(1..=6).contains(&level) {
            return Err(SdocError::InvalidInput(format!(
                "heading level must be between 1 and 6, got {level}"
            )));
        }
        Ok(Self {
            level,
            text: text.into(),
        })
    }

    fn with_level(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn h1(text: impl Into<String>) -> Self {
        Self::with_level(1, text)
    }

    pub fn h2(text: impl Into<String>) -> Self {
        Self::with_level(2, text)
    }

    pub fn h3(text: impl Into<String>) -> Self {
        Self::with_level(3, text)
    }

    pub fn h4(text: impl Into<String>) -> Self {
        Self::with_level(4, text)
    }

    pub fn h5(text: impl Into<String>) -> Self {
        Self::with_level(5, text)
    }

    pub fn h6(text: impl Into<String>) -> Self {
        Self::with_level(6, text)
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Block for Heading {
    fn name(&self) -> &str {
        match self.level {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        }
    }

    fn template_body(&self) -> Option<&str> {
        Some("<h{{ level }}>{{ text }}</h{{ level }}>")
    }

    fn context_data(&self) -> Result<Value> {
        Ok(attributes(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Block for Paragraph {
    fn name(&self) -> &str {
        "paragraph"
    }

    fn template_body(&self) -> Option<&str> {
        Some("<p>{{ text }}</p>")
    }

    fn context_data(&self) -> Result<Value> {
        Ok(attributes(self))
    }
}

/// Bulleted or numbered list of plain items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub items: Vec<String>,
    pub ordered: bool,
}

impl List {
    pub fn new<I, S>(items: I, ordered: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ordered,
        }
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }
}

impl Block for List {
    fn name(&self) -> &str {
        "list"
    }

    fn template_body(&self) -> Option<&str> {
        Some(
            r#"
            {% set tag = "ol" if ordered else "ul" %}
            <{{ tag }}>
            {% for item in items %}
                <li>{{ item }}</li>
            {% endfor %}
            </{{ tag }}>
            "#,
        )
    }

    fn context_data(&self) -> Result<Value> {
        Ok(attributes(self))
    }
}

/// Preformatted source code. The code is HTML-escaped when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Code {
    pub code: String,
    pub language: Option<String>,
}

impl Code {
    pub fn new(code: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            code: code.into(),
            language: language.map(|lang| lang.trim().to_ascii_lowercase()),
        }
    }
}

impl Block for Code {
    fn name(&self) -> &str {
        "code"
    }

    fn template_body(&self) -> Option<&str> {
        Some(
            r#"<pre class="code"><code{% if language %} class="language-{{ language }}"{% endif %}>{{ code|e }}</code></pre>"#,
        )
    }

    fn context_data(&self) -> Result<Value> {
        Ok(attributes(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blockquote {
    pub text: String,
    /// Attribution rendered in a footer under the quote
    pub source: Option<String>,
}

impl Blockquote {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Block for Blockquote {
    fn name(&self) -> &str {
        "blockquote"
    }

    fn template_body(&self) -> Option<&str> {
        Some(
            r#"
            <blockquote class="blockquote">
                <p>{{ text }}</p>
            {% if source %}
                <footer>{{ source }}</footer>
            {% endif %}
            </blockquote>
            "#,
        )
    }

    fn context_data(&self) -> Result<Value> {
        Ok(attributes(self))
    }
}

/// Severity of an [`Alert`], mapped to the `alert-*` CSS modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    Info,
    Warning,
    Error,
}

impl AlertLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Warning => "warning",
            AlertLevel::Error => "error",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertLevel {
    type Err = SdocError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(AlertLevel::Info),
            "warning" | "warn" => Ok(AlertLevel::Warning),
            "error" | "danger" => Ok(AlertLevel::Error),
            other => Err(SdocError::InvalidInput(format!(
                "unknown alert level '{other}'"
            ))),
        }
    }
}

/// A highlighted call-out box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub text: String,
}

impl Alert {
    pub fn new(level: AlertLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(AlertLevel::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(AlertLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(AlertLevel::Error, text)
    }
}

impl Block for Alert {
    fn name(&self) -> &str {
        "alert"
    }

    fn template_body(&self) -> Option<&str> {
        Some(r#"<div class="alert alert-{{ level }}">{{ text }}</div>"#)
    }

    fn context_data(&self) -> Result<Value> {
        Ok(attributes(self))
    }
}

/// Horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Divider;

impl Block for Divider {
    fn name(&self) -> &str {
        "divider"
    }

    fn template_body(&self) -> Option<&str> {
        Some(r#"<hr class="divider">"#)
    }

    fn context_data(&self) -> Result<Value> {
        Ok(Value::from(()))
    }
}
