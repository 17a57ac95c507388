//! Tree normalizer: collapses the source tree into a uniform map/list value.
//!
//! XML is ambiguous about cardinality: a tag may appear once or many times
//! under the same parent and downstream code cannot tell which from the
//! schema. Normalization resolves this once. A tag seen once maps to a
//! scalar value; the second occurrence promotes the scalar into a list and
//! every later occurrence appends. Readers then use [`Entry::values`], which
//! always yields a list view, so no dict-or-list branching survives past
//! this module.

use crate::xml::Element;

/// A normalized node: trimmed leaf text or an ordered tag map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Map(ValueMap),
}

impl Value {
    /// Leaf text, if this node is a leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(t) => Some(t),
            Value::Map(_) => None,
        }
    }

    /// Tag map, if this node has child structure.
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Text(_) => None,
            Value::Map(m) => Some(m),
        }
    }
}

/// One entry of a [`ValueMap`]: a tag's value in scalar or repeated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    One(Value),
    Many(Vec<Value>),
}

impl Entry {
    /// Uniform list view: a scalar reads as a one-element list.
    pub fn values(&self) -> &[Value] {
        match self {
            Entry::One(value) => std::slice::from_ref(value),
            Entry::Many(values) => values,
        }
    }
}

/// Ordered mapping from tag name to entry, in first-occurrence document order.
///
/// Backed by a vector: sibling fanout in the source documents is small and
/// the order of first occurrence must be preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueMap {
    entries: Vec<(String, Entry)>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one occurrence of `tag`, promoting scalar to list on repeat.
    pub fn insert(&mut self, tag: String, value: Value) {
        match self.entries.iter_mut().find(|(name, _)| *name == tag) {
            Some((_, entry)) => match entry {
                Entry::One(existing) => {
                    let first = std::mem::replace(existing, Value::Text(String::new()));
                    *entry = Entry::Many(vec![first, value]);
                }
                Entry::Many(values) => values.push(value),
            },
            None => self.entries.push((tag, Entry::One(value))),
        }
    }

    pub fn get(&self, tag: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, entry)| entry)
    }

    /// First value under `tag`, for fields expected to occur once.
    pub fn get_one(&self, tag: &str) -> Option<&Value> {
        self.get(tag).and_then(|entry| entry.values().first())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Normalize an element tree into a [`Value`].
///
/// A node with no child elements becomes its trimmed text. A node with
/// children becomes a map of its children, unless it also carries non-empty
/// direct text: mixed content collapses to the text alone, discarding the
/// children. That collapse loses data by construction and is kept for parity
/// with the established extraction output.
pub fn normalize(element: &Element) -> Value {
    if element.children.is_empty() {
        return Value::Text(element.text.trim().to_string());
    }

    let mut map = ValueMap::new();
    for child in &element.children {
        map.insert(child.name.clone(), normalize(child));
    }

    let direct = element.text.trim();
    if !direct.is_empty() {
        return Value::Text(direct.to_string());
    }

    Value::Map(map)
}
