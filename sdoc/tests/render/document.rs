//! Document shell, themes and custom CSS

use crate::common::body;
use sdoc::blocks::{Code, Image, Plot, SvgFigure};
use sdoc::{Compose, Document, DocumentOptions, Theme};

#[test]
fn test_minimal_document() {
    let mut doc = Document::new("R");
    doc.paragraph("hi").unwrap();
    let html = doc.render().unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>R</title>"));
    assert_eq!(body(&html).trim(), "<p>hi</p>");
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_blocks_render_in_insertion_order() {
    let mut doc = Document::new("R");
    doc.h2("second heading").unwrap();
    doc.paragraph("first paragraph").unwrap();
    doc.divider().unwrap();
    let html = doc.render().unwrap();

    let body = body(&html);
    let heading = body.find("<h2>second heading</h2>").unwrap();
    let paragraph = body.find("<p>first paragraph</p>").unwrap();
    let divider = body.find(r#"<hr class="divider">"#).unwrap();
    assert!(heading < paragraph && paragraph < divider);
}

#[test]
fn test_unknown_theme_falls_back_to_default() {
    let options = DocumentOptions::new().with_theme_name("no-such-theme");
    let fallback = Document::with_options("R", options).render().unwrap();
    let default = Document::new("R").render().unwrap();
    assert_eq!(fallback, default);
}

#[test]
fn test_dark_theme_is_inlined() {
    let doc = Document::with_options("R", DocumentOptions::new().with_theme(Theme::Dark));
    let html = doc.render().unwrap();
    assert!(html.contains(Theme::Dark.css().trim()));
    assert!(!html.contains(Theme::Default.css().trim()));
}

#[test]
fn test_custom_css_comes_after_theme() {
    let css = "body { font-size: 20px; }";
    let doc = Document::with_options("R", DocumentOptions::new().with_custom_css(css));
    let html = doc.render().unwrap();

    let style_start = html.find("<style>").unwrap();
    let style_end = html.find("</style>").unwrap();
    let theme_at = html.find(Theme::Default.css().trim()).unwrap();
    let custom_at = html.rfind(css).unwrap();
    assert!(style_start < theme_at && theme_at < custom_at && custom_at < style_end);
}

#[test]
fn test_code_is_escaped_but_paragraphs_are_not() {
    let mut doc = Document::new("R");
    doc.add(Code::new("if a < b && c > d {}", Some("Rust"))).unwrap();
    doc.paragraph("<em>raw</em>").unwrap();
    let html = doc.render().unwrap();

    assert!(html.contains(
        r#"<pre class="code"><code class="language-rust">if a &lt; b &amp;&amp; c &gt; d {}</code></pre>"#
    ));
    assert!(html.contains("<p><em>raw</em></p>"));
}

#[test]
fn test_markdown_is_converted() {
    let mut doc = Document::new("R");
    doc.markdown(
        "
        ## Findings

        Results were **strong**.
        ",
    )
    .unwrap();
    let html = doc.render().unwrap();
    assert!(html.contains("<h2>Findings</h2>"));
    assert!(html.contains("<strong>strong</strong>"));
}

#[test]
fn test_media_is_embedded() {
    let mut doc = Document::new("R");
    doc.image(Image::from_bytes(vec![1u8, 2, 3], "image/png").unwrap())
        .unwrap();
    doc.plot(Plot::new(&SvgFigure("<svg></svg>".to_string())).unwrap())
        .unwrap();
    let html = doc.render().unwrap();

    assert!(html.contains(r#"src="data:image/png;base64,AQID""#));
    assert!(html.contains(r#"<img class="plot" src="data:image/svg+xml;base64,"#));
}
