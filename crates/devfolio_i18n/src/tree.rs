use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::I18nError;

const MAX_LEAVES: usize = 10_000;
const MAX_DEPTH: usize = 16;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;

fn is_valid_key(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

pub(crate) fn join(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}.{segment}")
    }
}

/// Whether a node is a leaf or which kind of branch it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Text,
    Object,
    List,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Text => "string",
            Shape::Object => "object",
            Shape::List => "list",
        })
    }
}

/// One node of a message dictionary.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageNode {
    Text(String),
    Object(BTreeMap<String, MessageNode>),
    /// Addressed by index segments (`items.0`).
    List(Vec<MessageNode>),
}

impl MessageNode {
    pub fn shape(&self) -> Shape {
        match self {
            MessageNode::Text(_) => Shape::Text,
            MessageNode::Object(_) => Shape::Object,
            MessageNode::List(_) => Shape::List,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageNode::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Child addressed by one path segment.
    pub fn child(&self, segment: &str) -> Option<&MessageNode> {
        match self {
            MessageNode::Text(_) => None,
            MessageNode::Object(map) => map.get(segment),
            MessageNode::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        }
    }

    /// Direct children with their path segment, in stable order.
    pub fn children(&self) -> Vec<(String, &MessageNode)> {
        match self {
            MessageNode::Text(_) => Vec::new(),
            MessageNode::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
            MessageNode::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        }
    }
}

/// The full nested key -> string tree for one locale.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageTree {
    root: MessageNode,
}

struct Builder {
    leaves: usize,
}

impl Builder {
    fn node(&mut self, path: &str, depth: usize, value: Value) -> Result<MessageNode, I18nError> {
        if depth > MAX_DEPTH {
            return Err(I18nError::Limit {
                path: path.to_string(),
                msg: format!("nesting deeper than {MAX_DEPTH}"),
            });
        }
        match value {
            Value::String(s) => {
                if s.len() > MAX_VALUE_BYTES {
                    return Err(I18nError::Limit {
                        path: path.to_string(),
                        msg: format!("value longer than {MAX_VALUE_BYTES} bytes"),
                    });
                }
                self.leaves += 1;
                if self.leaves > MAX_LEAVES {
                    return Err(I18nError::Limit {
                        path: path.to_string(),
                        msg: format!("more than {MAX_LEAVES} entries"),
                    });
                }
                Ok(MessageNode::Text(s))
            }
            Value::Object(map) => {
                let mut out = BTreeMap::new();
                for (key, child) in map {
                    if !is_valid_key(&key) {
                        return Err(I18nError::InvalidKey {
                            path: path.to_string(),
                            key,
                        });
                    }
                    if key.len() > MAX_KEY_BYTES {
                        return Err(I18nError::Limit {
                            path: path.to_string(),
                            msg: format!("key `{key}` longer than {MAX_KEY_BYTES} bytes"),
                        });
                    }
                    let child_path = join(path, &key);
                    let node = self.node(&child_path, depth + 1, child)?;
                    out.insert(key, node);
                }
                Ok(MessageNode::Object(out))
            }
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, child)| self.node(&join(path, &i.to_string()), depth + 1, child))
                .collect::<Result<Vec<_>, _>>()
                .map(MessageNode::List),
            Value::Null => Err(I18nError::InvalidValue {
                path: path.to_string(),
                found: "null",
            }),
            Value::Bool(_) => Err(I18nError::InvalidValue {
                path: path.to_string(),
                found: "boolean",
            }),
            Value::Number(_) => Err(I18nError::InvalidValue {
                path: path.to_string(),
                found: "number",
            }),
        }
    }
}

impl MessageTree {
    /// Build from an already-parsed JSON value. The root must be an object.
    pub fn from_value(value: Value) -> Result<Self, I18nError> {
        if !value.is_object() {
            return Err(I18nError::NotAnObject);
        }
        let root = Builder { leaves: 0 }.node("", 0, value)?;
        Ok(Self { root })
    }

    pub fn from_json_str(src: &str) -> Result<Self, I18nError> {
        Self::from_value(serde_json::from_str(src)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(src: &str) -> Result<Self, I18nError> {
        Self::from_value(serde_yaml::from_str(src)?)
    }

    pub fn root(&self) -> &MessageNode {
        &self.root
    }

    /// Walk a dotted path. An empty path addresses nothing.
    pub fn get(&self, path: &str) -> Option<&MessageNode> {
        if path.is_empty() {
            return None;
        }
        path.split('.')
            .try_fold(&self.root, |node, segment| node.child(segment))
    }

    /// The leaf string at `path`, if the path ends on a leaf.
    pub fn get_text(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(MessageNode::as_text)
    }

    /// Every leaf as `(dotted path, text)`, in stable order.
    pub fn leaves(&self) -> Vec<(String, &str)> {
        fn walk<'a>(node: &'a MessageNode, path: String, out: &mut Vec<(String, &'a str)>) {
            match node {
                MessageNode::Text(s) => out.push((path, s)),
                _ => {
                    for (segment, child) in node.children() {
                        walk(child, join(&path, &segment), out);
                    }
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.root, String::new(), &mut out);
        out
    }
}
