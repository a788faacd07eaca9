//! Ordered keyed property tree, the on-disk shape of quest dialogue.

use serde::{Deserialize, Serialize};

/// A single property node: string leaf, integer leaf, or nested group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Str(String),
    Int(i64),
    Sub(SubNode),
}

impl Node {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_sub(&self) -> Option<&SubNode> {
        match self {
            Node::Sub(sub) => Some(sub),
            _ => None,
        }
    }

    pub fn as_sub_mut(&mut self) -> Option<&mut SubNode> {
        match self {
            Node::Sub(sub) => Some(sub),
            _ => None,
        }
    }
}

/// Ordered keyed collection of child nodes.
///
/// Iteration follows insertion order, which the container preserves on disk
/// and which carries meaning during conversation parsing. Keys are nominally
/// unique among siblings, but the container tolerates repeats (a `yes` group
/// follows each prompting line), so `push` never de-duplicates and `get`
/// returns the first match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubNode {
    children: Vec<(String, Node)>,
}

impl SubNode {
    pub fn new() -> Self {
        SubNode::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child under `key`, keeping declared order.
    pub fn push(&mut self, key: impl Into<String>, node: Node) {
        self.children.push((key.into(), node));
    }

    /// Append a string leaf.
    pub fn push_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.push(key, Node::Str(value.into()));
    }

    /// Append an integer leaf.
    pub fn push_int(&mut self, key: impl Into<String>, value: i64) {
        self.push(key, Node::Int(value));
    }

    /// First child stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.children.iter().find(|(k, _)| k == key).map(|(_, n)| n)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.children
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, n)| n)
    }

    /// Children in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(k, n)| (k.as_str(), n))
    }

    /// Drop children the predicate rejects, preserving the order of the rest.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &Node) -> bool) {
        self.children.retain(|(k, n)| keep(k, n));
    }
}
