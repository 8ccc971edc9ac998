//! Content slot values
//!
//! A panel carries an ordered slot of content nodes: raw markup strings and
//! structured nodes. Values arrive loosely typed (the configuration's
//! `content` key, or anything convertible to a JSON value at the call site)
//! and are validated here; the one hard contract in the crate is that a
//! content value must be markup text or a tagged node.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DrawerError, Result};

/// Where new content lands in the panel's content slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    Begin,
    End,
}

impl InsertAt {
    /// Parse a placement keyword, case-insensitively; anything unrecognized
    /// is `End`
    pub fn from_keyword(keyword: &str) -> InsertAt {
        match keyword.to_ascii_lowercase().as_str() {
            "begin" => InsertAt::Begin,
            _ => InsertAt::End,
        }
    }
}

impl Default for InsertAt {
    fn default() -> Self {
        InsertAt::End
    }
}

impl From<&str> for InsertAt {
    fn from(keyword: &str) -> Self {
        InsertAt::from_keyword(keyword)
    }
}

impl From<String> for InsertAt {
    fn from(keyword: String) -> Self {
        InsertAt::from_keyword(&keyword)
    }
}

/// A structured node for the panel's content slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentElement {
    /// Tag name, e.g. "ul"
    pub tag: String,
    /// Class tokens applied to the node
    #[serde(default)]
    pub classes: Vec<String>,
    /// Text content
    #[serde(default)]
    pub text: String,
}

/// One entry in a panel's content slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// Raw markup, carried verbatim
    Markup(String),
    /// A structured node
    Node(ContentElement),
}

impl ContentNode {
    /// Decode a loosely typed content value.
    ///
    /// Text is markup; a map carrying a `tag` key decodes as a structured
    /// node. Anything else violates the content contract and is rejected.
    pub fn from_value(value: serde_json::Value) -> Result<ContentNode> {
        match value {
            serde_json::Value::String(markup) => Ok(ContentNode::Markup(markup)),
            serde_json::Value::Object(map) if map.contains_key("tag") => {
                let element = serde_json::from_value(serde_json::Value::Object(map))
                    .map_err(|err| DrawerError::InvalidContent {
                        reason: err.to_string(),
                    })?;
                Ok(ContentNode::Node(element))
            }
            other => Err(DrawerError::InvalidContent {
                reason: format!(
                    "expected markup text or a node with a tag, got {}",
                    value_kind(&other)
                ),
            }),
        }
    }
}

impl fmt::Display for ContentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentNode::Markup(markup) => f.write_str(markup),
            ContentNode::Node(element) => {
                write!(f, "<{}", element.tag)?;
                if !element.classes.is_empty() {
                    write!(f, " class=\"{}\"", element.classes.join(" "))?;
                }
                write!(f, ">{}</{}>", element.text, element.tag)
            }
        }
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "text",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object without a tag",
    }
}
