//! Per-property configuration: the source of truth for which properties
//! propagate down the tree.
//!
//! The built-in table mirrors the CSS "Inherited: yes" column for every
//! property in the closed set. Embedders with different propagation rules
//! can load a table from YAML or adjust individual entries.
//!
//! # Example
//!
//! ```rust
//! use styleline_model::{PropertyConfig, PropertyConfigs, StyleProperty};
//!
//! let mut configs = PropertyConfigs::builtin().clone();
//! assert!(configs.get(StyleProperty::Color).inherited);
//! assert!(!configs.get(StyleProperty::Width).inherited);
//!
//! // Make opacity propagate for this embedder.
//! configs.set(StyleProperty::Opacity, PropertyConfig { inherited: true });
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::property::StyleProperty;

/// Configuration of a single style property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyConfig {
    /// Whether an unset value on a node adopts the nearest ancestor's
    /// concrete value.
    #[serde(default)]
    pub inherited: bool,
}

/// The full property configuration table, one entry per known property.
///
/// Total by construction: every [`StyleProperty`] has an entry, so lookups
/// cannot miss. Static for the process lifetime in typical use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyConfigs {
    configs: [PropertyConfig; StyleProperty::COUNT],
}

impl PropertyConfigs {
    /// A table where no property is inheritable.
    pub fn none_inherited() -> Self {
        PropertyConfigs {
            configs: [PropertyConfig::default(); StyleProperty::COUNT],
        }
    }

    /// The built-in table: CSS default inheritance flags.
    pub fn builtin() -> &'static PropertyConfigs {
        static BUILTIN: once_cell::sync::Lazy<PropertyConfigs> = once_cell::sync::Lazy::new(|| {
            let mut table = PropertyConfigs::none_inherited();
            for &property in StyleProperty::ALL {
                table.configs[property.index()] = PropertyConfig {
                    inherited: inherited_by_default(property),
                };
            }
            table
        });
        &BUILTIN
    }

    /// Loads a table from a YAML mapping of property name to config.
    ///
    /// Properties absent from the document keep the default config
    /// (not inherited). Unknown property names are an error: the key space
    /// is closed.
    ///
    /// ```rust
    /// use styleline_model::{PropertyConfigs, StyleProperty};
    ///
    /// let configs = PropertyConfigs::from_yaml(r#"
    /// color:
    ///   inherited: true
    /// width:
    ///   inherited: false
    /// "#).unwrap();
    ///
    /// assert!(configs.get(StyleProperty::Color).inherited);
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, PropertyConfig> = serde_yaml::from_str(content)?;
        let mut table = PropertyConfigs::none_inherited();
        for (name, config) in raw {
            let property = StyleProperty::from_name(&name)
                .ok_or(ConfigError::UnknownProperty { name })?;
            table.configs[property.index()] = config;
        }
        Ok(table)
    }

    /// The config for `property`. Total; never misses.
    pub fn get(&self, property: StyleProperty) -> PropertyConfig {
        self.configs[property.index()]
    }

    /// Replaces the config for `property`.
    pub fn set(&mut self, property: StyleProperty, config: PropertyConfig) {
        self.configs[property.index()] = config;
    }

    /// Iterates all entries in property-ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, PropertyConfig)> + '_ {
        StyleProperty::ALL
            .iter()
            .map(|&property| (property, self.get(property)))
    }
}

/// Whether CSS inherits `property` by default.
fn inherited_by_default(property: StyleProperty) -> bool {
    use StyleProperty::*;
    matches!(
        property,
        Color
            | Cursor
            | Direction
            | FontFamily
            | FontSize
            | FontStyle
            | FontVariant
            | FontWeight
            | LetterSpacing
            | LineHeight
            | ListStylePosition
            | ListStyleType
            | OverflowWrap
            | Quotes
            | TextAlign
            | TextIndent
            | TextTransform
            | Visibility
            | WhiteSpace
            | WordBreak
            | WordSpacing
    )
}

/// Error loading a property configuration table.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid YAML for a property table.
    #[error("invalid property config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A key in the document is not a known style property.
    #[error("unknown style property '{name}' in property config")]
    UnknownProperty {
        /// The offending key.
        name: String,
    },
}
