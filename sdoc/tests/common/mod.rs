//! Shared helpers for the integration tests

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"<h([1-6])>([^<]*)</h[1-6]>").unwrap());
static TOC_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"<li><a href="#([^"]*)">([^<]*)</a></li>"##).unwrap());

/// `(level, text)` of every heading in `html`, in order.
pub fn headings(html: &str) -> Vec<(u8, String)> {
    HEADING
        .captures_iter(html)
        .map(|caps| (caps[1].parse().unwrap(), caps[2].to_string()))
        .collect()
}

/// Link texts of every table of contents entry in `html`, in order.
pub fn toc_links(html: &str) -> Vec<String> {
    TOC_LINK
        .captures_iter(html)
        .map(|caps| {
            assert_eq!(&caps[1], &caps[2], "anchor and label differ");
            caps[2].to_string()
        })
        .collect()
}

/// The markup between `<body>` and `</body>`.
pub fn body(html: &str) -> &str {
    let start = html.find("<body>").expect("no <body>") + "<body>".len();
    let end = html.rfind("</body>").expect("no </body>");
    &html[start..end]
}
