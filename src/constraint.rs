//! Value-domain constraints for Presentation Properties.

use crate::properties::PresentationEnum;
use crate::value::{PresentationValue, ValueKind};

/// Legal value domain of a Presentation Property.
///
/// Validation failures are reported as `false`; nothing here errors or
/// panics on unexpected input.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueConstraint {
    /// Any value of the given variant.
    ExactType(ValueKind),
    /// Enum variant names.
    EnumAllowList {
        /// Every name the enum knows.
        names: &'static [&'static str],
        /// Subset supported by the navigator; `None` accepts all `names`.
        supported: Option<Vec<&'static str>>,
    },
    /// Raw strings; `None` accepts any string.
    StringAllowList(Option<Vec<String>>),
    /// Closed numeric interval.
    NumericRange(RangeConstraint),
}

impl ValueConstraint {
    /// Enum constraint for `E`, optionally narrowed to `supported`.
    ///
    /// An empty `supported` slice is treated as unbounded.
    pub fn enumeration<E: PresentationEnum>(supported: Option<&[E]>) -> Self {
        let supported = supported
            .filter(|supported| !supported.is_empty())
            .map(|supported| supported.iter().map(|variant| variant.as_str()).collect());
        Self::EnumAllowList {
            names: E::NAMES,
            supported,
        }
    }

    /// String constraint, optionally restricted to `supported`.
    pub fn strings<I, S>(supported: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::StringAllowList(supported.map(|values| values.into_iter().map(Into::into).collect()))
    }

    /// Range over the closed unit interval.
    pub fn unit_range() -> Self {
        Self::NumericRange(RangeConstraint::default())
    }

    pub fn validate(&self, value: &PresentationValue) -> bool {
        match self {
            Self::ExactType(kind) => value.kind() == *kind,
            Self::EnumAllowList { names, supported } => {
                let Some(name) = value.as_enum_name() else {
                    return false;
                };
                if !names.iter().any(|known| *known == name) {
                    return false;
                }
                match supported {
                    Some(supported) if !supported.is_empty() => {
                        supported.iter().any(|candidate| *candidate == name)
                    }
                    _ => true,
                }
            }
            Self::StringAllowList(supported) => {
                let Some(value) = value.as_str() else {
                    return false;
                };
                match supported {
                    Some(supported) => supported.iter().any(|candidate| candidate == value),
                    None => true,
                }
            }
            Self::NumericRange(range) => value.as_f64().is_some_and(|v| range.contains(v)),
        }
    }

    /// Variant a valid value must carry.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::ExactType(kind) => *kind,
            Self::EnumAllowList { .. } => ValueKind::Enum,
            Self::StringAllowList(_) => ValueKind::String,
            Self::NumericRange(_) => ValueKind::Float,
        }
    }

    /// Values a settings form can offer, for enum and string allow-lists.
    pub fn allowed_names(&self) -> Option<Vec<&str>> {
        match self {
            Self::EnumAllowList { names, supported } => Some(match supported {
                Some(supported) if !supported.is_empty() => supported.clone(),
                _ => names.to_vec(),
            }),
            Self::StringAllowList(Some(supported)) => {
                Some(supported.iter().map(String::as_str).collect())
            }
            _ => None,
        }
    }
}

/// Closed numeric interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeConstraint {
    pub min: f64,
    pub max: f64,
    /// Number of discrete steps a slider should offer between the bounds.
    ///
    /// Presentation hint only; validation accepts any value in range.
    pub step_count: Option<u32>,
}

impl Default for RangeConstraint {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step_count: None,
        }
    }
}

impl RangeConstraint {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step_count: None,
        }
    }

    pub fn with_step_count(mut self, step_count: u32) -> Self {
        self.step_count = Some(step_count);
        self
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance between two slider steps, when a step count is set.
    pub fn step(&self) -> Option<f64> {
        match self.step_count {
            Some(count) if count > 0 => Some((self.max - self.min) / f64::from(count)),
            _ => None,
        }
    }
}
