//! The inheritable-property registry.
//!
//! Derived once from a [`PropertyConfigs`] table: exactly the properties
//! flagged `inherited`, no more, no less. The built-in set is computed on
//! first use and held as process-wide read-only state, so resolution calls
//! never rebuild it and never take a lock.

use once_cell::sync::Lazy;
use styleline_model::{PropertyConfigs, StyleProperty};

/// The set of style properties that propagate down the tree.
///
/// Backed by a fixed-size boolean array indexed by property ordinal, so
/// membership checks are a single index.
///
/// # Example
///
/// ```rust
/// use styleline::InheritableSet;
/// use styleline_model::StyleProperty;
///
/// let inheritable = InheritableSet::builtin();
/// assert!(inheritable.contains(StyleProperty::Color));
/// assert!(!inheritable.contains(StyleProperty::Width));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritableSet {
    flags: [bool; StyleProperty::COUNT],
}

impl InheritableSet {
    /// Builds the set from a configuration table: exactly the properties
    /// whose config has `inherited == true`.
    pub fn from_configs(configs: &PropertyConfigs) -> Self {
        let mut flags = [false; StyleProperty::COUNT];
        for (property, config) in configs.iter() {
            flags[property.index()] = config.inherited;
        }
        InheritableSet { flags }
    }

    /// The process-wide set derived from [`PropertyConfigs::builtin`].
    ///
    /// Computed once on first access; immutable afterwards.
    pub fn builtin() -> &'static InheritableSet {
        static BUILTIN: Lazy<InheritableSet> =
            Lazy::new(|| InheritableSet::from_configs(PropertyConfigs::builtin()));
        &BUILTIN
    }

    /// True if `property` propagates down the tree.
    pub fn contains(&self, property: StyleProperty) -> bool {
        self.flags[property.index()]
    }

    /// Iterates the member properties in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = StyleProperty> + '_ {
        StyleProperty::ALL
            .iter()
            .copied()
            .filter(|property| self.contains(*property))
    }

    /// Number of member properties.
    pub fn len(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// True if no property is inheritable.
    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|&flag| flag)
    }
}

impl FromIterator<StyleProperty> for InheritableSet {
    fn from_iter<I: IntoIterator<Item = StyleProperty>>(iter: I) -> Self {
        let mut flags = [false; StyleProperty::COUNT];
        for property in iter {
            flags[property.index()] = true;
        }
        InheritableSet { flags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleline_model::PropertyConfig;

    #[test]
    fn membership_mirrors_configs_exactly() {
        let mut configs = PropertyConfigs::none_inherited();
        configs.set(StyleProperty::Width, PropertyConfig { inherited: true });
        configs.set(StyleProperty::Color, PropertyConfig { inherited: false });

        let set = InheritableSet::from_configs(&configs);
        assert!(set.contains(StyleProperty::Width));
        assert!(!set.contains(StyleProperty::Color));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![StyleProperty::Width]);
    }

    #[test]
    fn builtin_matches_builtin_configs() {
        let set = InheritableSet::builtin();
        for (property, config) in PropertyConfigs::builtin().iter() {
            assert_eq!(set.contains(property), config.inherited, "{property}");
        }
    }

    #[test]
    fn empty_set() {
        let set = InheritableSet::from_configs(&PropertyConfigs::none_inherited());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }
}
