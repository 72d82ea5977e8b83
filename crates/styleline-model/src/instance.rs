//! The instance tree: nodes, mixed text/instance children, and the sparse
//! per-node style map.
//!
//! The tree is owned by the caller (an editor, typically) and handed to the
//! resolver read-only. Nothing here enforces id uniqueness; the resolver
//! documents what happens when that precondition is violated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::property::StyleProperty;
use crate::value::StyleValue;

/// Identifier of one instance in the tree, expected unique tree-wide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        InstanceId(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InstanceId {
    fn from(id: &str) -> Self {
        InstanceId::new(id)
    }
}

impl From<String> for InstanceId {
    fn from(id: String) -> Self {
        InstanceId(id)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in an instance's ordered child list.
///
/// Wire form matches the project data: a bare string is a text leaf, an
/// object is a nested instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    /// A text leaf. Opaque; never participates in style resolution.
    Text(String),
    /// A nested instance.
    Instance(Instance),
}

impl Child {
    /// The nested instance, if this child is not a text leaf.
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Child::Text(_) => None,
            Child::Instance(instance) => Some(instance),
        }
    }
}

/// One node in the instance tree.
///
/// # Example
///
/// ```rust
/// use styleline_model::{Instance, StyleProperty};
///
/// let tree = Instance::new("root")
///     .with_style(StyleProperty::Color, "red")
///     .with_child(
///         Instance::new("heading")
///             .with_style(StyleProperty::FontSize, "2rem")
///             .with_text("Hello"),
///     );
///
/// assert_eq!(tree.children.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Identifier, expected unique across the whole tree.
    pub id: InstanceId,
    /// Ordered mixed content. Order matters for traversal determinism only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Child>,
    /// Properties explicitly set on this node. Absence means "not set here".
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
}

impl Instance {
    /// Creates a childless, unstyled instance.
    pub fn new(id: impl Into<InstanceId>) -> Self {
        Instance {
            id: id.into(),
            children: Vec::new(),
            style: StyleMap::new(),
        }
    }

    /// Sets a style property, returning `self` for chaining.
    pub fn with_style(mut self, property: StyleProperty, value: impl Into<StyleValue>) -> Self {
        self.style.set(property, value.into());
        self
    }

    /// Appends a nested instance, returning `self` for chaining.
    pub fn with_child(mut self, child: Instance) -> Self {
        self.children.push(Child::Instance(child));
        self
    }

    /// Appends a text leaf, returning `self` for chaining.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Iterates the instance children, skipping text leaves.
    pub fn child_instances(&self) -> impl Iterator<Item = &Instance> {
        self.children.iter().filter_map(Child::as_instance)
    }
}

/// Sparse property-to-value map for one node.
///
/// Backed by a fixed-size array indexed by property ordinal, so lookups are
/// a bounds-free index and no key outside the closed property set can exist.
#[derive(Clone, PartialEq)]
pub struct StyleMap {
    slots: Box<[Option<StyleValue>; StyleProperty::COUNT]>,
}

impl StyleMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        StyleMap {
            slots: Box::new(std::array::from_fn(|_| None)),
        }
    }

    /// The value set for `property` on this node, if any.
    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.slots[property.index()].as_ref()
    }

    /// Sets `property`, returning the previous value if one was set.
    pub fn set(&mut self, property: StyleProperty, value: StyleValue) -> Option<StyleValue> {
        self.slots[property.index()].replace(value)
    }

    /// Clears `property`, returning the removed value if one was set.
    pub fn remove(&mut self, property: StyleProperty) -> Option<StyleValue> {
        self.slots[property.index()].take()
    }

    /// Iterates the set entries in property-ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleValue)> {
        StyleProperty::ALL
            .iter()
            .filter_map(|&property| Some((property, self.slots[property.index()].as_ref()?)))
    }

    /// Number of set entries.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True if no property is set on this node.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }
}

impl Default for StyleMap {
    fn default() -> Self {
        StyleMap::new()
    }
}

impl fmt::Debug for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<(StyleProperty, StyleValue)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (StyleProperty, StyleValue)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (property, value) in iter {
            map.set(property, value);
        }
        map
    }
}

// Wire form: a plain JSON/YAML object keyed by property name.
impl Serialize for StyleMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> serde::de::Visitor<'de> for MapVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of style properties to style values")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<StyleMap, A::Error> {
                let mut map = StyleMap::new();
                while let Some((property, value)) = access.next_entry()? {
                    map.set(property, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}
