//! # Styleline - Inherited Style Provenance
//!
//! `styleline` answers the question a style panel asks when it shows the
//! "this value comes from parent X" affordance: for one target node in an
//! instance tree, which ancestor does the effective value of each
//! *inheritable* style property come from?
//!
//! ## Core Concepts
//!
//! - [`InheritableSet`]: which properties propagate down the tree, derived
//!   once from a [`PropertyConfigs`] table
//! - [`ancestor_path`]: the chain of ancestors of a target node, root first
//! - [`resolve_inherited_style`]: closest-wins resolution; for each
//!   inheritable property, the nearest ancestor with a concrete
//!   (non-`inherit`) value is authoritative
//!
//! This is deliberately not a cascade engine: no specificity, no
//! `!important`, one style source per node, one target per call.
//!
//! ## Quick Start
//!
//! ```rust
//! use styleline::resolve_inherited_style_builtin;
//! use styleline_model::{Instance, InstanceId, StyleProperty};
//!
//! let tree = Instance::new("root")
//!     .with_style(StyleProperty::Color, "red")
//!     .with_child(
//!         Instance::new("mid")
//!             .with_style(StyleProperty::Color, "inherit")
//!             .with_style(StyleProperty::FontSize, "12px")
//!             .with_child(Instance::new("leaf")),
//!     );
//!
//! let inherited = resolve_inherited_style_builtin(&tree, &InstanceId::new("leaf"));
//!
//! // color: mid defers with the sentinel, so the root is the source.
//! let color = inherited.get(StyleProperty::Color).unwrap();
//! assert_eq!(color.instance.id.as_str(), "root");
//!
//! // fontSize: mid set a concrete value and is the closest ancestor.
//! let font_size = inherited.get(StyleProperty::FontSize).unwrap();
//! assert_eq!(font_size.instance.id.as_str(), "mid");
//! ```
//!
//! ## Custom Property Tables
//!
//! The built-in registry carries the CSS default inheritance flags.
//! Embedders with different rules build their own set:
//!
//! ```rust
//! use styleline::{resolve_inherited_style, InheritableSet};
//! use styleline_model::{Instance, InstanceId, PropertyConfigs, StyleProperty};
//!
//! let configs = PropertyConfigs::from_yaml("opacity:\n  inherited: true\n").unwrap();
//! let inheritable = InheritableSet::from_configs(&configs);
//!
//! let tree = Instance::new("root")
//!     .with_style(StyleProperty::Opacity, "0.5")
//!     .with_child(Instance::new("leaf"));
//!
//! let inherited = resolve_inherited_style(&tree, &InstanceId::new("leaf"), &inheritable);
//! assert!(inherited.contains(StyleProperty::Opacity));
//! ```
//!
//! ## Concurrency
//!
//! Resolution is purely computational: no locks, no shared mutable state.
//! The built-in registry is computed once and read-only afterwards, so any
//! number of resolution calls may run concurrently against the same
//! immutable tree snapshot.

mod path;
mod registry;
mod resolve;

pub use path::ancestor_path;
pub use registry::InheritableSet;
pub use resolve::{
    resolve_from_ancestors, resolve_inherited_style, resolve_inherited_style_builtin,
    InheritedStyle, InheritedValue,
};

// Re-export the model so callers need a single dependency.
pub use styleline_model::{
    Child, ConfigError, Instance, InstanceId, PropertyConfig, PropertyConfigs, StyleMap,
    StyleProperty, StyleValue, UnknownPropertyError, INHERIT_KEYWORD,
};
