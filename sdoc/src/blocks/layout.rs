//! Layout blocks
//!
//! [`Row`] and [`Col`] are flex containers and flex items; they differ only in their wrapper
//! class. [`Card`] is a bordered panel with an optional title and raw content shown before
//! its children. All three own their children exclusively and render them in insertion
//! order, so a container's output is its wrapper around the concatenated child fragments.

use crate::block::{attach, last_as, render_all, Attachable, Block, Compose, Container, Node};
use crate::error::Result;
use minijinja::{context, Value};

macro_rules! layout_container {
    ($ty:ident, $name:literal) => {
        impl $ty {
            /// Child blocks in insertion order
            pub fn children(&self) -> &[Node] {
                &self.children
            }

            pub fn len(&self) -> usize {
                self.children.len()
            }

            pub fn is_empty(&self) -> bool {
                self.children.is_empty()
            }
        }

        impl Container for $ty {
            fn container_name(&self) -> &str {
                $name
            }
        }

        impl Compose for $ty {
            type Slot<'a, T: 'a> = &'a mut T;

            fn add<T: Attachable>(&mut self, block: T) -> Result<Self::Slot<'_, T>> {
                let mut node = block.into();
                attach(&*self, &mut node)?;
                self.children.push(node);
                last_as(&mut self.children)
            }
        }
    };
}

/// Horizontal flex container.
#[derive(Debug, Default)]
pub struct Row {
    children: Vec<Node>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }
}

layout_container!(Row, "row");

impl Block for Row {
    fn name(&self) -> &str {
        "row"
    }

    fn template_body(&self) -> Option<&str> {
        Some(r#"<div class="row">{% for block in blocks %}{{ block }}{% endfor %}</div>"#)
    }

    fn context_data(&self) -> Result<Value> {
        Ok(context! { blocks => render_all(&self.children)? })
    }
}

/// Flex item, usually placed inside a [`Row`].
#[derive(Debug, Default)]
pub struct Col {
    children: Vec<Node>,
}

impl Col {
    pub fn new() -> Self {
        Self::default()
    }
}

layout_container!(Col, "col");

impl Block for Col {
    fn name(&self) -> &str {
        "col"
    }

    fn template_body(&self) -> Option<&str> {
        Some(r#"<div class="col">{% for block in blocks %}{{ block }}{% endfor %}</div>"#)
    }

    fn context_data(&self) -> Result<Value> {
        Ok(context! { blocks => render_all(&self.children)? })
    }
}

#[derive(Debug, Default)]
pub struct Card {
    pub title: Option<String>,
    /// Raw HTML shown before the children
    pub content: Option<String>,
    children: Vec<Node>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

layout_container!(Card, "card");

impl Block for Card {
    fn name(&self) -> &str {
        "card"
    }

    fn template_body(&self) -> Option<&str> {
        Some(concat!(
            r#"<div class="card">"#,
            r#"{% if title %}<div class="card-title">{{ title|e }}</div>{% endif %}"#,
            r#"{% if content %}<div class="card-content">{{ content }}</div>{% endif %}"#,
            r#"{% for block in blocks %}{{ block }}{% endfor %}"#,
            r#"</div>"#,
        ))
    }

    fn context_data(&self) -> Result<Value> {
        Ok(context! {
            title => &self.title,
            content => &self.content,
            blocks => render_all(&self.children)?,
        })
    }
}
