//! Tagged property values.

use std::fmt;

/// Tag of a [`PresentationValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Float,
    Enum,
    String,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Enum => "enum",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a Presentation Property.
///
/// Accessors never coerce between variants: an enum name stored as
/// [`PresentationValue::String`] is not readable through
/// [`PresentationValue::as_enum_name`], and vice versa.
#[derive(Clone, Debug, PartialEq)]
pub enum PresentationValue {
    /// Toggle, e.g. `continuous`.
    Bool(bool),
    /// Number, e.g. a normalized `pageSpacing`.
    Float(f64),
    /// Name of an enumerated variant, e.g. `"cover"` for `fit`.
    Enum(String),
    /// Free-form string for renderer-specific properties.
    String(String),
}

impl PresentationValue {
    /// Build an enum value from a raw variant name.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Float(_) => ValueKind::Float,
            Self::Enum(_) => ValueKind::Enum,
            Self::String(_) => ValueKind::String,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_enum_name(&self) -> Option<&str> {
        match self {
            Self::Enum(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for PresentationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Enum(name) => f.write_str(name),
            Self::String(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<bool> for PresentationValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PresentationValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for PresentationValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for PresentationValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// Typed decoding out of a [`PresentationValue`].
///
/// Returns `None` when the stored variant does not match the requested type,
/// which callers treat as "absent".
pub trait FromPresentationValue: Sized {
    fn from_presentation_value(value: &PresentationValue) -> Option<Self>;
}

impl FromPresentationValue for bool {
    fn from_presentation_value(value: &PresentationValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FromPresentationValue for f64 {
    fn from_presentation_value(value: &PresentationValue) -> Option<Self> {
        value.as_f64()
    }
}

impl FromPresentationValue for String {
    fn from_presentation_value(value: &PresentationValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromPresentationValue for PresentationValue {
    fn from_presentation_value(value: &PresentationValue) -> Option<Self> {
        Some(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{FromPresentationValue, PresentationValue, ValueKind};
    use crate::Fit;

    #[test]
    fn accessors_do_not_coerce() {
        let name = PresentationValue::enumeration("cover");
        assert_eq!(name.kind(), ValueKind::Enum);
        assert_eq!(name.as_enum_name(), Some("cover"));
        assert_eq!(name.as_str(), None);

        let raw = PresentationValue::from("cover");
        assert_eq!(raw.kind(), ValueKind::String);
        assert_eq!(raw.as_enum_name(), None);
        assert_eq!(Fit::from_presentation_value(&raw), None);
        assert_eq!(Fit::from_presentation_value(&name), Some(Fit::Cover));

        assert_eq!(PresentationValue::Float(1.0).as_bool(), None);
        assert_eq!(PresentationValue::Bool(true).as_f64(), None);
    }

    #[test]
    fn property_enums_become_enum_values() {
        assert_eq!(
            PresentationValue::from(Fit::Width),
            PresentationValue::Enum("width".to_string())
        );
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(PresentationValue::Bool(false).to_string(), "false");
        assert_eq!(PresentationValue::Float(0.25).to_string(), "0.25");
        assert_eq!(PresentationValue::enumeration("rtl").to_string(), "rtl");
        assert_eq!(PresentationValue::from("serif").to_string(), "\"serif\"");
    }
}
