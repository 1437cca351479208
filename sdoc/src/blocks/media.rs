//! Image and plot blocks
//!
//! Images can point at a URL or be embedded. Embedded images (files, raw bytes, figures) are
//! turned into `data:` URIs when the block is built, so a saved report is a single
//! self-contained file and rendering never touches the filesystem.

use crate::block::Block;
use crate::error::{Result, SdocError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use minijinja::{context, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Where an [`Image`] gets its pixels from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Referenced, not embedded
    Url(String),
    /// Read and embedded when the block is built
    File(PathBuf),
    /// Already in memory
    Bytes { data: Vec<u8>, mime: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    src: String,
    alt: String,
    width: Option<String>,
}

impl Image {
    /// Build an image, reading and encoding file sources.
    pub fn new(source: ImageSource) -> Result<Self> {
        let src = match source {
            ImageSource::Url(url) => {
                if url.trim().is_empty() {
                    return Err(SdocError::InvalidInput(
                        "image url must not be empty".to_string(),
                    ));
                }
                url
            }
            ImageSource::File(path) => {
                let data = fs::read(&path).map_err(|err| SdocError::io(&path, err))?;
                data_uri(mime_from_path(&path), &data)
            }
            ImageSource::Bytes { data, mime } => data_uri(&mime, &data),
        };
        Ok(Self {
            src,
            alt: String::new(),
            width: None,
        })
    }

    pub fn from_url(url: impl Into<String>) -> Result<Self> {
        Self::new(ImageSource::Url(url.into()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(ImageSource::File(path.as_ref().to_path_buf()))
    }

    pub fn from_bytes(data: impl Into<Vec<u8>>, mime: impl Into<String>) -> Result<Self> {
        Self::new(ImageSource::Bytes {
            data: data.into(),
            mime: mime.into(),
        })
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Width attribute, e.g. `"320"` or `"50%"`
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// The `src` attribute: a URL or a `data:` URI
    pub fn src(&self) -> &str {
        &self.src
    }
}

impl Block for Image {
    fn name(&self) -> &str {
        "image"
    }

    fn template_body(&self) -> Option<&str> {
        Some(
            r#"<img src="{{ src }}" alt="{{ alt|e }}"{% if width %} width="{{ width|e }}"{% endif %}>"#,
        )
    }

    fn context_data(&self) -> Result<Value> {
        Ok(context! {
            src => &self.src,
            alt => &self.alt,
            width => &self.width,
        })
    }
}

/// Something that can be drawn to an encoded image, typically a chart.
///
/// Plotting libraries are wired in by implementing this for their figure type.
pub trait Figure {
    /// MIME type of [`Figure::encode`]'s output
    fn mime_type(&self) -> &str {
        "image/png"
    }

    /// Encoded image bytes
    fn encode(&self) -> Result<Vec<u8>>;
}

/// A figure that is already SVG markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgFigure(pub String);

impl Figure for SvgFigure {
    fn mime_type(&self) -> &str {
        "image/svg+xml"
    }

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.0.as_bytes().to_vec())
    }
}

impl Figure for Vec<u8> {
    fn encode(&self) -> Result<Vec<u8>> {
        Ok(self.clone())
    }
}

/// An embedded chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plot {
    src: String,
}

impl Plot {
    /// Encode `figure` once, at construction.
    pub fn new(figure: &dyn Figure) -> Result<Self> {
        let bytes = figure.encode()?;
        Ok(Self {
            src: data_uri(figure.mime_type(), &bytes),
        })
    }

    pub fn src(&self) -> &str {
        &self.src
    }
}

impl Block for Plot {
    fn name(&self) -> &str {
        "plot"
    }

    fn template_body(&self) -> Option<&str> {
        Some(r#"<img class="plot" src="{{ src }}">"#)
    }

    fn context_data(&self) -> Result<Value> {
        Ok(context! { src => &self.src })
    }
}

/// Encode `data` as a base64 `data:` URI.
pub fn data_uri(mime: &str, data: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(data))
}

/// Guess an image MIME type from a file extension.
pub fn mime_from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
