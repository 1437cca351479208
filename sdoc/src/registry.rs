//! Block type registry
//!
//! Maps block type names to factories that build a [`Node`] from string options. This is
//! the dynamic layer over the typed API: it backs [`Document::add_named`](crate::Document::add_named),
//! the CLI's block listing, and third-party block types.
//!
//! A process-wide registry, pre-loaded with every built-in block, is reachable through
//! [`register_block_type`], [`registered_block_types`] and [`build_block`]. Registering a
//! name that already exists replaces its factory.
//!
//! # Examples
//!
//! ```ignore
//! let add_badge = register_block_type("badge", |options| {
//!     Ok(Node::custom(Badge::new(options.get("label").cloned().unwrap_or_default())))
//! });
//!
//! let mut options = BlockOptions::new();
//! options.insert("label".into(), "beta".into());
//! add_badge(&options)?; // appends to the current document
//! ```

use crate::block::Node;
use crate::blocks::{
    Alert, AlertLevel, Blockquote, Card, Code, Col, Divider, ExternalTable, Heading, Image, List,
    Markdown, Paragraph, Row, Table, TableOfContents,
};
use crate::error::{Result, SdocError};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// String options handed to a block factory
pub type BlockOptions = HashMap<String, String>;

/// Builds a block from options.
pub type BlockFactory = Arc<dyn Fn(&BlockOptions) -> Result<Node> + Send + Sync>;

/// Registry of block factories, keyed by block type name
pub struct BlockRegistry {
    factories: HashMap<String, BlockFactory>,
}

impl BlockRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        BlockRegistry {
            factories: HashMap::new(),
        }
    }

    /// Register a factory
    ///
    /// If a factory with the same name already exists, it will be replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&BlockOptions) -> Result<Node> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Get a factory by name
    pub fn get(&self, name: &str) -> Result<BlockFactory> {
        self.factories
            .get(name)
            .cloned()
            .ok_or_else(|| SdocError::UnknownBlockType(name.to_string()))
    }

    /// Check if a block type exists
    pub fn has(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// List all registered block type names (sorted)
    pub fn list_blocks(&self) -> Vec<String> {
        let mut names: Vec<_> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Build a block of type `name`
    pub fn build(&self, name: &str, options: &BlockOptions) -> Result<Node> {
        let factory = self.get(name)?;
        factory(options)
    }

    /// Create a registry with every built-in block type
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        for level in 1..=6u8 {
            registry.register(format!("h{level}"), move |options| {
                Ok(Heading::new(level, required(options, "text")?)?.into())
            });
        }
        registry.register("paragraph", |options| {
            Ok(Paragraph::new(required(options, "text")?).into())
        });
        registry.register("markdown", |options| {
            Ok(Markdown::new(required(options, "text")?).into())
        });
        registry.register("image", build_image);
        registry.register("list", |options| {
            let items = required(options, "items")?
                .lines()
                .map(str::trim)
                .filter(|item| !item.is_empty());
            Ok(List::new(items, flag(options, "ordered")?).into())
        });
        registry.register("code", |options| {
            Ok(Code::new(required(options, "code")?, optional(options, "language")).into())
        });
        registry.register("blockquote", |options| {
            let mut quote = Blockquote::new(required(options, "text")?);
            if let Some(source) = optional(options, "source") {
                quote = quote.with_source(source);
            }
            Ok(quote.into())
        });
        registry.register("table", |options| {
            let mut table = Table::from_pipe_table(required(options, "content")?)?;
            table.striped = flag(options, "striped")?;
            table.bordered = flag(options, "bordered")?;
            table.hover = flag(options, "hover")?;
            Ok(table.into())
        });
        registry.register("external-table", |options| {
            Ok(ExternalTable::from_html(required(options, "html")?).into())
        });
        registry.register("alert", |options| {
            let level = match optional(options, "level") {
                Some(level) => level.parse::<AlertLevel>()?,
                None => AlertLevel::default(),
            };
            Ok(Alert::new(level, required(options, "text")?).into())
        });
        registry.register("divider", |_| Ok(Divider.into()));
        registry.register("row", |_| Ok(Row::new().into()));
        registry.register("col", |_| Ok(Col::new().into()));
        registry.register("card", |options| {
            let mut card = Card::new();
            if let Some(title) = optional(options, "title") {
                card = card.with_title(title);
            }
            if let Some(content) = optional(options, "content") {
                card = card.with_content(content);
            }
            Ok(card.into())
        });
        registry.register("toc", |_| Ok(TableOfContents::new().into()));

        registry
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn build_image(options: &BlockOptions) -> Result<Node> {
    let mut image = match (optional(options, "url"), optional(options, "file")) {
        (Some(url), None) => Image::from_url(url)?,
        (None, Some(file)) => Image::from_file(file)?,
        _ => {
            return Err(SdocError::InvalidInput(
                "image requires exactly one of 'url' or 'file'".to_string(),
            ))
        }
    };
    if let Some(alt) = optional(options, "alt") {
        image = image.with_alt(alt);
    }
    if let Some(width) = optional(options, "width") {
        image = image.with_width(width);
    }
    Ok(image.into())
}

fn required<'a>(options: &'a BlockOptions, key: &str) -> Result<&'a str> {
    optional(options, key)
        .ok_or_else(|| SdocError::InvalidInput(format!("missing required option '{key}'")))
}

fn optional<'a>(options: &'a BlockOptions, key: &str) -> Option<&'a str> {
    options.get(key).map(String::as_str)
}

/// Read a boolean option; absent means `false`.
fn flag(options: &BlockOptions, key: &str) -> Result<bool> {
    match optional(options, key) {
        None => Ok(false),
        Some(raw) => parse_bool(key, raw),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(SdocError::InvalidInput(format!(
            "invalid boolean value '{other}' for option '{key}'"
        ))),
    }
}

static REGISTRY: Lazy<RwLock<BlockRegistry>> =
    Lazy::new(|| RwLock::new(BlockRegistry::with_defaults()));

fn read_registry() -> RwLockReadGuard<'static, BlockRegistry> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_registry() -> RwLockWriteGuard<'static, BlockRegistry> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

/// Register a block type with the process-wide registry.
///
/// Returns a function that builds the block from options and adds it to the current
/// document (see [`crate::current`]).
pub fn register_block_type<F>(
    name: impl Into<String>,
    factory: F,
) -> impl Fn(&BlockOptions) -> Result<()>
where
    F: Fn(&BlockOptions) -> Result<Node> + Send + Sync + 'static,
{
    let name = name.into();
    write_registry().register(name.clone(), factory);
    debug!(block = %name, "registered block type");
    move |options: &BlockOptions| crate::current::add_named(&name, options)
}

/// Names of every block type in the process-wide registry (sorted)
pub fn registered_block_types() -> Vec<String> {
    read_registry().list_blocks()
}

/// Build a block through the process-wide registry.
///
/// The factory runs after the registry lock is released, so factories may themselves use
/// the registry.
pub fn build_block(name: &str, options: &BlockOptions) -> Result<Node> {
    let factory = read_registry().get(name)?;
    factory(options)
}
