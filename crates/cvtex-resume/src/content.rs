//! Mixed paragraph/list content and insertion-ordered maps.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One block of free-form resume content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Block {
    /// Plain paragraph text.
    Paragraph(String),
    /// Flat bulleted list.
    List(Vec<String>),
}

/// Ordered sequence of paragraphs and flat lists.
///
/// Accepts either a single JSON string (one paragraph) or an array whose
/// elements are strings or arrays of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "MixedContentRepr")]
pub struct MixedContent(Vec<Block>);

#[derive(Deserialize)]
#[serde(untagged)]
enum MixedContentRepr {
    Single(String),
    Blocks(Vec<Block>),
}

impl From<MixedContentRepr> for MixedContent {
    fn from(repr: MixedContentRepr) -> Self {
        match repr {
            MixedContentRepr::Single(text) => Self(vec![Block::Paragraph(text)]),
            MixedContentRepr::Blocks(blocks) => Self(blocks),
        }
    }
}

impl MixedContent {
    /// Create content from blocks.
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self(blocks)
    }

    /// Blocks in source order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.0
    }

    /// Whether there is nothing printable in this content.
    ///
    /// Blank paragraphs and empty lists do not count as content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|block| match block {
            Block::Paragraph(text) => text.trim().is_empty(),
            Block::List(items) => items.iter().all(|item| item.trim().is_empty()),
        })
    }
}

impl From<Vec<Block>> for MixedContent {
    fn from(blocks: Vec<Block>) -> Self {
        Self(blocks)
    }
}

/// String-keyed map that keeps keys in document order.
///
/// A repeated key keeps its first position and takes the last value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

struct OrderedMapVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mixed_content_from_string() {
        let content: MixedContent = serde_json::from_str(r#""Fluent in Rust""#).unwrap();
        assert_eq!(
            content.blocks(),
            &[Block::Paragraph("Fluent in Rust".to_owned())]
        );
    }

    #[test]
    fn test_mixed_content_paragraphs_and_lists() {
        let content: MixedContent =
            serde_json::from_str(r#"["Intro", ["one", "two"], "Outro"]"#).unwrap();
        assert_eq!(
            content.blocks(),
            &[
                Block::Paragraph("Intro".to_owned()),
                Block::List(vec!["one".to_owned(), "two".to_owned()]),
                Block::Paragraph("Outro".to_owned()),
            ]
        );
    }

    #[test]
    fn test_mixed_content_rejects_nested_lists() {
        let result: Result<MixedContent, _> = serde_json::from_str(r#"[["a", ["b"]]]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_blank() {
        assert!(MixedContent::default().is_blank());
        assert!(
            MixedContent::new(vec![
                Block::Paragraph("  ".to_owned()),
                Block::List(vec![])
            ])
            .is_blank()
        );
        assert!(!MixedContent::new(vec![Block::List(vec!["x".to_owned()])]).is_blank());
    }

    #[test]
    fn test_ordered_map_preserves_document_order() {
        let map: OrderedMap<u32> = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_ordered_map_duplicate_key_keeps_position() {
        let map: OrderedMap<u32> = serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        let entries: Vec<(&str, u32)> = map.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(entries, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_ordered_map_get() {
        let map: OrderedMap<&str> = [("Languages", "Rust"), ("Tools", "Git")].into_iter().collect();
        assert_eq!(map.get("Tools"), Some(&"Git"));
        assert_eq!(map.get("Missing"), None);
        assert_eq!(map.len(), 2);
    }
}
