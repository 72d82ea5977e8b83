//! # Styleline Model - Properties, Values, and the Instance Tree
//!
//! `styleline-model` is the data layer of the `styleline` workspace: the
//! closed set of style properties, the values a node can carry (including
//! the `inherit` sentinel), the per-property configuration table, and the
//! instance tree those styles live on.
//!
//! The companion `styleline` crate consumes these types to answer the
//! question a style panel asks: *which ancestor does this inherited value
//! come from?*
//!
//! ## Core Types
//!
//! - [`StyleProperty`]: closed enumeration of known property names
//! - [`StyleValue`]: the `inherit` sentinel or an opaque concrete payload
//! - [`PropertyConfigs`]: which properties propagate down the tree
//! - [`Instance`]: one tree node with an id, mixed children, and a sparse
//!   [`StyleMap`]
//!
//! ## Quick Start
//!
//! ```rust
//! use styleline_model::{Instance, PropertyConfigs, StyleProperty};
//!
//! let tree = Instance::new("root")
//!     .with_style(StyleProperty::Color, "red")
//!     .with_child(
//!         Instance::new("paragraph")
//!             .with_style(StyleProperty::FontSize, "12px")
//!             .with_text("Hello"),
//!     );
//!
//! // The built-in table carries the CSS default inheritance flags.
//! let configs = PropertyConfigs::builtin();
//! assert!(configs.get(StyleProperty::Color).inherited);
//! assert!(tree.style.get(StyleProperty::Color).is_some());
//! ```
//!
//! ## Serialized Form
//!
//! Trees round-trip through the project-data wire form: property names are
//! camelCase, text children are bare strings, and the string `"inherit"` is
//! the sentinel value:
//!
//! ```rust
//! use styleline_model::Instance;
//!
//! let tree: Instance = serde_json::from_str(r#"{
//!     "id": "root",
//!     "style": { "color": "red" },
//!     "children": [
//!         { "id": "mid", "style": { "color": "inherit" }, "children": ["hi"] }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(tree.child_instances().count(), 1);
//! ```

mod config;
mod instance;
mod property;
mod value;

pub use config::{ConfigError, PropertyConfig, PropertyConfigs};
pub use instance::{Child, Instance, InstanceId, StyleMap};
pub use property::{StyleProperty, UnknownPropertyError};
pub use value::{StyleValue, INHERIT_KEYWORD};
