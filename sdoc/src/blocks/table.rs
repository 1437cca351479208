//! Table blocks
//!
//! [`Table`] renders rows of plain cells with the theme's `.table` classes. It can be built
//! from rows directly or parsed from a markdown pipe table, including column alignment.
//!
//! [`ExternalTable`] embeds HTML produced by some other tabular library through the
//! [`HtmlTable`] trait, wrapped so themes can style it.

use crate::block::Block;
use crate::error::{Result, SdocError};
use minijinja::{context, Value};
use serde::Serialize;

/// Column alignment, taken from pipe-table separators (`:--`, `:-:`, `--:`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    fn style(self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("text-align: left"),
            Alignment::Center => Some("text-align: center"),
            Alignment::Right => Some("text-align: right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    alignments: Vec<Alignment>,
    pub striped: bool,
    pub bordered: bool,
    pub hover: bool,
}

#[derive(Serialize)]
struct Cell<'a> {
    text: &'a str,
    style: Option<&'static str>,
}

impl Table {
    /// Build a table. Every row must have as many cells as there are headers.
    pub fn new<H, S>(headers: H, rows: Vec<Vec<String>>) -> Result<Self>
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let width = if headers.is_empty() {
            rows.first().map(Vec::len).unwrap_or(0)
        } else {
            headers.len()
        };
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(SdocError::InvalidInput(format!(
                "table row {index} has {} cells, expected {width}",
                row.len()
            )));
        }
        Ok(Self {
            headers,
            rows,
            ..Self::default()
        })
    }

    /// Parse a markdown pipe table:
    ///
    /// ```text
    /// | Region | Revenue |
    /// | :----- | ------: |
    /// | North  | 12      |
    /// ```
    pub fn from_pipe_table(content: &str) -> Result<Self> {
        let lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some(header_line) = lines.first() else {
            return Err(SdocError::InvalidInput("pipe table is empty".to_string()));
        };
        let headers = parse_table_row(header_line);

        let mut alignments = Vec::new();
        if let Some(separator) = lines.get(1) {
            if !separator.chars().all(|c| matches!(c, '|' | '-' | ':' | ' ')) {
                return Err(SdocError::InvalidInput(format!(
                    "expected a pipe table separator line, got '{separator}'"
                )));
            }
            for part in parse_table_row(separator) {
                let alignment = if part.starts_with(':') && part.ends_with(':') {
                    Alignment::Center
                } else if part.ends_with(':') {
                    Alignment::Right
                } else if part.starts_with(':') {
                    Alignment::Left
                } else {
                    Alignment::None
                };
                alignments.push(alignment);
            }
        }

        let rows = lines.iter().skip(2).map(|line| parse_table_row(line)).collect();
        let mut table = Self::new(headers, rows)?;
        table.alignments = alignments;
        Ok(table)
    }

    pub fn striped(mut self) -> Self {
        self.striped = true;
        self
    }

    pub fn bordered(mut self) -> Self {
        self.bordered = true;
        self
    }

    pub fn hover(mut self) -> Self {
        self.hover = true;
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Append a row, enforcing the table width.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        let width = if self.headers.is_empty() {
            self.rows.first().map(Vec::len).unwrap_or(row.len())
        } else {
            self.headers.len()
        };
        if row.len() != width {
            return Err(SdocError::InvalidInput(format!(
                "table row has {} cells, expected {width}",
                row.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    fn classes(&self) -> String {
        let mut classes = String::from("table");
        if self.striped {
            classes.push_str(" table-striped");
        }
        if self.bordered {
            classes.push_str(" table-bordered");
        }
        if self.hover {
            classes.push_str(" table-hover");
        }
        classes
    }

    fn cells<'a>(&self, row: &'a [String]) -> Vec<Cell<'a>> {
        row.iter()
            .enumerate()
            .map(|(i, text)| Cell {
                text,
                style: self.alignments.get(i).copied().unwrap_or_default().style(),
            })
            .collect()
    }
}

fn parse_table_row(line: &str) -> Vec<String> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);

    line.split('|').map(|s| s.trim().to_string()).collect()
}

impl Block for Table {
    fn name(&self) -> &str {
        "table"
    }

    fn template_body(&self) -> Option<&str> {
        Some(
            r#"
            <table class="{{ classes }}">
            {% if headers %}
                <thead>
                    <tr>{% for cell in headers %}<th{% if cell.style %} style="{{ cell.style }}"{% endif %}>{{ cell.text }}</th>{% endfor %}</tr>
                </thead>
            {% endif %}
                <tbody>
            {% for row in rows %}
                    <tr>{% for cell in row %}<td{% if cell.style %} style="{{ cell.style }}"{% endif %}>{{ cell.text }}</td>{% endfor %}</tr>
            {% endfor %}
                </tbody>
            </table>
            "#,
        )
    }

    fn context_data(&self) -> Result<Value> {
        let rows: Vec<Vec<Cell<'_>>> = self.rows.iter().map(|row| self.cells(row)).collect();
        Ok(context! {
            classes => self.classes(),
            headers => self.cells(&self.headers),
            rows => rows,
        })
    }
}

/// Options handed to an [`HtmlTable`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTableOptions {
    /// CSS classes for the generated `<table>` element
    pub classes: Vec<String>,
    /// Whether the row index should be rendered as a leading column
    pub show_index: bool,
}

impl Default for ExternalTableOptions {
    fn default() -> Self {
        Self {
            classes: vec!["table".to_string()],
            show_index: false,
        }
    }
}

/// Tabular data from another library that can render itself as an HTML table.
pub trait HtmlTable {
    fn to_html(&self, options: &ExternalTableOptions) -> String;
}

/// Pre-rendered table markup in an `external-table` wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTable {
    html: String,
}

impl ExternalTable {
    pub fn new(table: &dyn HtmlTable, options: &ExternalTableOptions) -> Self {
        Self {
            html: table.to_html(options),
        }
    }

    /// Wrap markup produced elsewhere as-is.
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl Block for ExternalTable {
    fn name(&self) -> &str {
        "external-table"
    }

    fn template_body(&self) -> Option<&str> {
        Some(r#"<div class="external-table">{{ html }}</div>"#)
    }

    fn context_data(&self) -> Result<Value> {
        Ok(context! { html => &self.html })
    }
}
