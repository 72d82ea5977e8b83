//! Inherited style resolution: closest ancestor with a concrete value wins.

use std::collections::HashMap;

use styleline_model::{Instance, InstanceId, StyleProperty, StyleValue};
use tracing::debug;

use crate::path::ancestor_path;
use crate::registry::InheritableSet;

/// One resolved entry: the ancestor a value comes from, and the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InheritedValue<'a> {
    /// The ancestor that set the value.
    pub instance: &'a Instance,
    /// The concrete value it set. Never the `inherit` sentinel.
    pub value: &'a StyleValue,
}

/// The inherited style of one target node.
///
/// Holds one entry per inheritable property for which some ancestor set a
/// concrete value; properties with nothing to inherit are simply absent.
/// Borrows the tree for the duration of one resolution call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InheritedStyle<'a> {
    entries: HashMap<StyleProperty, InheritedValue<'a>>,
}

impl<'a> InheritedStyle<'a> {
    /// The resolved entry for `property`, if any ancestor contributed one.
    pub fn get(&self, property: StyleProperty) -> Option<&InheritedValue<'a>> {
        self.entries.get(&property)
    }

    /// True if some ancestor contributed a value for `property`.
    pub fn contains(&self, property: StyleProperty) -> bool {
        self.entries.contains_key(&property)
    }

    /// Iterates the resolved entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &InheritedValue<'a>)> {
        self.entries.iter().map(|(property, entry)| (*property, entry))
    }

    /// Number of resolved properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was inherited.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves the inherited style of the node identified by `target`.
///
/// Walks the ancestor chain nearest-first; for each property in
/// `inheritable`, the closest ancestor that set a concrete (non-`inherit`)
/// value for it is authoritative. An ancestor that set the `inherit`
/// sentinel does not claim the slot; the search continues past it.
///
/// Total over its inputs: a target absent from the tree, or equal to the
/// root itself, yields an empty result.
///
/// # Example
///
/// ```rust
/// use styleline::{resolve_inherited_style, InheritableSet};
/// use styleline_model::{Instance, InstanceId, StyleProperty};
///
/// let tree = Instance::new("root")
///     .with_style(StyleProperty::Color, "red")
///     .with_child(
///         Instance::new("mid")
///             .with_style(StyleProperty::Color, "inherit")
///             .with_style(StyleProperty::FontSize, "12px")
///             .with_child(Instance::new("leaf")),
///     );
///
/// let inherited = resolve_inherited_style(
///     &tree,
///     &InstanceId::new("leaf"),
///     InheritableSet::builtin(),
/// );
///
/// // Mid's sentinel is transparent: color comes from the root.
/// assert_eq!(inherited.get(StyleProperty::Color).unwrap().instance.id.as_str(), "root");
/// assert_eq!(inherited.get(StyleProperty::FontSize).unwrap().instance.id.as_str(), "mid");
/// ```
pub fn resolve_inherited_style<'a>(
    root: &'a Instance,
    target: &InstanceId,
    inheritable: &InheritableSet,
) -> InheritedStyle<'a> {
    let mut ancestors = ancestor_path(root, target);
    ancestors.reverse(); // closest ancestor first

    let result = resolve_from_ancestors(&ancestors, inheritable);
    debug!(
        target_id = %target,
        ancestors = ancestors.len(),
        resolved = result.len(),
        "resolved inherited style"
    );
    result
}

/// Resolves against an already-computed ancestor chain, closest first.
///
/// This is the raw resolution step [`resolve_inherited_style`] composes
/// with [`ancestor_path`]; callers that already hold the chain (or want a
/// synthetic one in tests) can use it directly.
pub fn resolve_from_ancestors<'a>(
    ancestors_closest_first: &[&'a Instance],
    inheritable: &InheritableSet,
) -> InheritedStyle<'a> {
    let mut result = InheritedStyle::default();
    for &ancestor in ancestors_closest_first {
        for (property, value) in ancestor.style.iter() {
            if !inheritable.contains(property) {
                continue;
            }
            if value.is_inherit() {
                continue;
            }
            // First writer wins: a closer ancestor already claimed the slot.
            result
                .entries
                .entry(property)
                .or_insert(InheritedValue { instance: ancestor, value });
        }
    }
    result
}

/// [`resolve_inherited_style`] against the process-wide built-in registry.
pub fn resolve_inherited_style_builtin<'a>(
    root: &'a Instance,
    target: &InstanceId,
) -> InheritedStyle<'a> {
    resolve_inherited_style(root, target, InheritableSet::builtin())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use styleline_model::StyleValue;

    /// What a generated ancestor sets for one property.
    #[derive(Debug, Clone)]
    enum Slot {
        Unset,
        Sentinel,
        Concrete(u8),
    }

    fn slot() -> impl Strategy<Value = Slot> {
        prop_oneof![
            Just(Slot::Unset),
            Just(Slot::Sentinel),
            (0u8..8).prop_map(Slot::Concrete),
        ]
    }

    const PROPERTIES: &[StyleProperty] = &[
        StyleProperty::Color,     // inheritable
        StyleProperty::FontSize,  // inheritable
        StyleProperty::Width,     // not inheritable
    ];

    /// A chain of ancestor style maps, root first.
    fn chain() -> impl Strategy<Value = Vec<[Slot; 3]>> {
        proptest::collection::vec([slot(), slot(), slot()], 0..8)
    }

    fn build_tree(slots: &[[Slot; 3]]) -> Instance {
        let mut node = Instance::new("target");
        for (depth, entry) in slots.iter().enumerate().rev() {
            let mut parent = Instance::new(format!("ancestor-{depth}"));
            for (property, slot) in PROPERTIES.iter().zip(entry) {
                match slot {
                    Slot::Unset => {}
                    Slot::Sentinel => {
                        parent = parent.with_style(*property, StyleValue::Inherit);
                    }
                    Slot::Concrete(n) => {
                        parent = parent.with_style(*property, format!("v{n}"));
                    }
                }
            }
            node = parent.with_child(node);
        }
        node
    }

    proptest! {
        #[test]
        fn resolution_is_idempotent(slots in chain()) {
            let tree = build_tree(&slots);
            let target = InstanceId::new("target");
            let first = resolve_inherited_style_builtin(&tree, &target);
            let second = resolve_inherited_style_builtin(&tree, &target);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn closest_concrete_ancestor_wins(slots in chain()) {
            let tree = build_tree(&slots);
            let inherited =
                resolve_inherited_style_builtin(&tree, &InstanceId::new("target"));

            for (index, property) in PROPERTIES.iter().enumerate().take(2) {
                // Closest-first scan of the generated chain (it is root
                // first, so walk it from the end).
                let expected = slots.iter().enumerate().rev().find_map(|(depth, entry)| {
                    match &entry[index] {
                        Slot::Concrete(n) => Some((format!("ancestor-{depth}"), *n)),
                        _ => None,
                    }
                });

                match expected {
                    Some((source, n)) => {
                        let entry = inherited.get(*property).unwrap();
                        prop_assert_eq!(entry.instance.id.as_str(), source.as_str());
                        prop_assert_eq!(entry.value, &StyleValue::from(format!("v{n}")));
                    }
                    None => prop_assert!(!inherited.contains(*property)),
                }
            }
        }

        #[test]
        fn non_inheritable_never_appears(slots in chain()) {
            let tree = build_tree(&slots);
            let inherited =
                resolve_inherited_style_builtin(&tree, &InstanceId::new("target"));
            prop_assert!(!inherited.contains(StyleProperty::Width));
        }
    }
}
