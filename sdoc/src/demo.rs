//! Demonstration report
//!
//! [`demo_document`] builds a report that uses every built-in block type at least once. The
//! CLI writes it with `sdoc demo`; it also serves as an end-to-end fixture in tests.

use crate::block::Compose;
use crate::blocks::{
    Alert, Blockquote, Card, ExternalTable, ExternalTableOptions, HtmlTable, Image, Plot,
    SvgFigure, Table,
};
use crate::document::{Document, DocumentOptions};
use crate::error::Result;

/// Quarterly figures used across the demo
const QUARTERS: [(&str, u32); 4] = [("Q1", 120), ("Q2", 180), ("Q3", 150), ("Q4", 210)];

/// Stand-in for a table type from a data-frame library.
struct QuarterFrame;

impl HtmlTable for QuarterFrame {
    fn to_html(&self, options: &ExternalTableOptions) -> String {
        let mut html = format!(r#"<table class="{}">"#, options.classes.join(" "));
        html.push_str("<thead><tr>");
        if options.show_index {
            html.push_str("<th></th>");
        }
        html.push_str("<th>Quarter</th><th>Revenue</th></tr></thead><tbody>");
        for (index, (quarter, revenue)) in QUARTERS.iter().enumerate() {
            html.push_str("<tr>");
            if options.show_index {
                html.push_str(&format!("<th>{index}</th>"));
            }
            html.push_str(&format!("<td>{quarter}</td><td>{revenue}</td></tr>"));
        }
        html.push_str("</tbody></table>");
        html
    }
}

/// A bar chart of [`QUARTERS`] as SVG.
fn revenue_chart() -> SvgFigure {
    let mut svg = String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="240" height="120" viewBox="0 0 240 120">"#,
    );
    for (index, (_, revenue)) in QUARTERS.iter().enumerate() {
        let height = revenue / 2;
        let x = 20 + index * 55;
        svg.push_str(&format!(
            r##"<rect x="{x}" y="{}" width="40" height="{height}" fill="#4493f8"/>"##,
            120 - height
        ));
    }
    svg.push_str("</svg>");
    SvgFigure(svg)
}

fn logo() -> Result<Image> {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48"><circle cx="24" cy="24" r="20" fill="#2da44e"/></svg>"##;
    Ok(Image::from_bytes(svg.as_bytes(), "image/svg+xml")?
        .with_alt("sdoc logo")
        .with_width("48"))
}

/// Build the demonstration report.
pub fn demo_document(title: &str, options: DocumentOptions) -> Result<Document> {
    let mut doc = Document::with_options(title, options);

    doc.h1(title)?;
    doc.image(logo()?)?;
    doc.toc()?;

    doc.h2("Text")?;
    doc.paragraph("Reports are built from blocks added in order.")?;
    doc.markdown(
        r#"
        Markdown is converted with **tables**, ~~strikethrough~~ and task lists:

        - [x] render
        - [ ] publish
        "#,
    )?;
    doc.list(["Headings", "Paragraphs", "Lists"], false)?;
    doc.list(["Build", "Render", "Save"], true)?;
    doc.add(
        Blockquote::new("Simplicity is prerequisite for reliability.").with_source("Dijkstra"),
    )?;
    doc.code(
        "let mut doc = Document::new(\"Report\");\ndoc.h1(\"Hello\")?;",
        Some("rust"),
    )?;

    doc.h2("Data")?;
    let mut rows = Vec::new();
    for (quarter, revenue) in QUARTERS {
        rows.push(vec![quarter.to_string(), revenue.to_string()]);
    }
    doc.table(Table::new(["Quarter", "Revenue"], rows)?.striped().hover())?;
    doc.table(Table::from_pipe_table(
        "| Region | Share |\n|:-------|------:|\n| North | 60% |\n| South | 40% |",
    )?
    .bordered())?;
    doc.external_table(ExternalTable::new(
        &QuarterFrame,
        &ExternalTableOptions {
            show_index: true,
            ..ExternalTableOptions::default()
        },
    ))?;
    doc.plot(Plot::new(&revenue_chart())?)?;

    doc.h2("Layout")?;
    {
        let mut row = doc.row()?;
        {
            let col = row.col()?;
            col.h3("Left")?;
            col.paragraph("Columns share the row width.")?;
        }
        let col = row.col()?;
        let card = col.card(
            Card::new()
                .with_title("Card")
                .with_content("Cards frame related content."),
        )?;
        card.alert(Alert::info("Blocks nest inside cards too."))?;
    }

    doc.divider()?;
    doc.h2("Alerts")?;
    doc.alert(Alert::info("Everything is fine."))?;
    doc.alert(Alert::warning("Something needs attention."))?;
    doc.alert(Alert::error("Something went wrong."))?;

    Ok(doc)
}
