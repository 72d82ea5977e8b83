//! The closed set of known style properties.
//!
//! Property names follow the camelCase wire form used in serialized project
//! data (`fontSize`, `backgroundColor`, ...). The enum is the single source
//! of truth for the key space: serde keys, config tables, and the sparse
//! per-node style maps are all indexed by it, so an invalid property name
//! can never reach the resolver.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

macro_rules! style_properties {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A known style property.
        ///
        /// The set is closed: every property a node can carry is listed here,
        /// and [`StyleProperty::ALL`] enumerates the full key space.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StyleProperty {
            $($variant,)+
        }

        impl StyleProperty {
            /// Every known property, in ordinal order.
            pub const ALL: &'static [StyleProperty] = &[$(StyleProperty::$variant,)+];

            /// Number of known properties. Sparse style maps are fixed-size
            /// arrays of this length, indexed by [`index`](Self::index).
            pub const COUNT: usize = Self::ALL.len();

            /// The camelCase wire name of this property.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(StyleProperty::$variant => $name,)+
                }
            }

            /// Looks up a property by its camelCase wire name.
            pub fn from_name(name: &str) -> Option<StyleProperty> {
                match name {
                    $($name => Some(StyleProperty::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

style_properties! {
    // Inherited by default (CSS Cascading and Inheritance semantics).
    Color => "color",
    Cursor => "cursor",
    Direction => "direction",
    FontFamily => "fontFamily",
    FontSize => "fontSize",
    FontStyle => "fontStyle",
    FontVariant => "fontVariant",
    FontWeight => "fontWeight",
    LetterSpacing => "letterSpacing",
    LineHeight => "lineHeight",
    ListStylePosition => "listStylePosition",
    ListStyleType => "listStyleType",
    OverflowWrap => "overflowWrap",
    Quotes => "quotes",
    TextAlign => "textAlign",
    TextIndent => "textIndent",
    TextTransform => "textTransform",
    Visibility => "visibility",
    WhiteSpace => "whiteSpace",
    WordBreak => "wordBreak",
    WordSpacing => "wordSpacing",
    // Not inherited.
    AlignItems => "alignItems",
    BackgroundColor => "backgroundColor",
    BorderColor => "borderColor",
    BorderRadius => "borderRadius",
    BorderStyle => "borderStyle",
    BorderWidth => "borderWidth",
    Bottom => "bottom",
    BoxShadow => "boxShadow",
    ColumnGap => "columnGap",
    Display => "display",
    FlexDirection => "flexDirection",
    FlexGrow => "flexGrow",
    FlexShrink => "flexShrink",
    Gap => "gap",
    Height => "height",
    JustifyContent => "justifyContent",
    Left => "left",
    MarginBottom => "marginBottom",
    MarginLeft => "marginLeft",
    MarginRight => "marginRight",
    MarginTop => "marginTop",
    MaxHeight => "maxHeight",
    MaxWidth => "maxWidth",
    MinHeight => "minHeight",
    MinWidth => "minWidth",
    Opacity => "opacity",
    Overflow => "overflow",
    PaddingBottom => "paddingBottom",
    PaddingLeft => "paddingLeft",
    PaddingRight => "paddingRight",
    PaddingTop => "paddingTop",
    Position => "position",
    Right => "right",
    RowGap => "rowGap",
    Top => "top",
    Width => "width",
    ZIndex => "zIndex",
}

impl StyleProperty {
    /// The ordinal of this property, in `0..COUNT`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleProperty {
    type Err = UnknownPropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleProperty::from_name(s).ok_or_else(|| UnknownPropertyError {
            name: s.to_string(),
        })
    }
}

/// Error returned when a property name is not in the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style property '{name}'")]
pub struct UnknownPropertyError {
    /// The name that failed to resolve.
    pub name: String,
}

impl Serialize for StyleProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StyleProperty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        StyleProperty::from_name(&name)
            .ok_or_else(|| de::Error::custom(format_args!("unknown style property '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_all_order() {
        for (i, property) in StyleProperty::ALL.iter().enumerate() {
            assert_eq!(property.index(), i);
        }
        assert_eq!(StyleProperty::ALL.len(), StyleProperty::COUNT);
    }

    #[test]
    fn names_round_trip() {
        for property in StyleProperty::ALL {
            assert_eq!(StyleProperty::from_name(property.as_str()), Some(*property));
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = StyleProperty::ALL.iter().map(|p| p.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StyleProperty::COUNT);
    }

    #[test]
    fn serde_uses_camel_case_wire_names() {
        let json = serde_json::to_string(&StyleProperty::FontSize).unwrap();
        assert_eq!(json, "\"fontSize\"");

        let parsed: StyleProperty = serde_json::from_str("\"backgroundColor\"").unwrap();
        assert_eq!(parsed, StyleProperty::BackgroundColor);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(StyleProperty::from_name("font-size").is_none());
        assert!(serde_json::from_str::<StyleProperty>("\"fontSize2\"").is_err());
        assert_eq!(
            "fancyBorder".parse::<StyleProperty>(),
            Err(UnknownPropertyError {
                name: "fancyBorder".to_string()
            })
        );
    }
}
