//! Enumerated property domains shared by all navigators.

use std::fmt;
use std::str::FromStr;

/// Closed set of named variants stored as [`crate::PresentationValue::Enum`].
///
/// The variant names are the persisted form; `from_name` must accept exactly
/// the names in `ALL`.
pub trait PresentationEnum: Copy + Eq + Sized + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Canonical names of `ALL`, in the same order.
    const NAMES: &'static [&'static str];

    /// Canonical variant name.
    fn as_str(&self) -> &'static str;

    /// Decode a canonical variant name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.as_str() == name)
    }
}

/// Error returned when parsing a name that is not a variant of the target enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariant {
    /// Enum being parsed.
    pub domain: &'static str,
    /// Rejected input.
    pub name: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} variant: {:?}", self.domain, self.name)
    }
}

impl std::error::Error for UnknownVariant {}

macro_rules! presentation_enum_impls {
    ($ty:ident, $domain:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as PresentationEnum>::from_name(s).ok_or_else(|| UnknownVariant {
                    domain: $domain,
                    name: s.to_string(),
                })
            }
        }

        impl From<$ty> for crate::PresentationValue {
            fn from(value: $ty) -> Self {
                crate::PresentationValue::Enum(value.as_str().to_string())
            }
        }

        impl crate::value::FromPresentationValue for $ty {
            fn from_presentation_value(value: &crate::PresentationValue) -> Option<Self> {
                value
                    .as_enum_name()
                    .and_then(<$ty as PresentationEnum>::from_name)
            }
        }
    };
}

/// Fit of a fixed-layout page inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fit {
    /// Whole page visible, letterboxed when aspect ratios differ.
    Contain,
    /// Viewport filled, overflowing edges clipped.
    Cover,
    /// Page width matches the viewport width.
    Width,
    /// Page height matches the viewport height.
    Height,
}

impl PresentationEnum for Fit {
    const ALL: &'static [Self] = &[Self::Contain, Self::Cover, Self::Width, Self::Height];
    const NAMES: &'static [&'static str] = &["contain", "cover", "width", "height"];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Contain => "contain",
            Self::Cover => "cover",
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

presentation_enum_impls!(Fit, "fit");

/// Viewport orientation preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Auto,
    Landscape,
    Portrait,
}

impl PresentationEnum for Orientation {
    const ALL: &'static [Self] = &[Self::Auto, Self::Landscape, Self::Portrait];
    const NAMES: &'static [&'static str] = &["auto", "landscape", "portrait"];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

presentation_enum_impls!(Orientation, "orientation");

/// Content flow across the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Let the navigator pick based on the publication.
    Auto,
    /// Discrete pages.
    Paginated,
    /// Vertical scrolling.
    Scrolled,
}

impl PresentationEnum for Overflow {
    const ALL: &'static [Self] = &[Self::Auto, Self::Paginated, Self::Scrolled];
    const NAMES: &'static [&'static str] = &["auto", "paginated", "scrolled"];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Paginated => "paginated",
            Self::Scrolled => "scrolled",
        }
    }
}

presentation_enum_impls!(Overflow, "overflow");

/// Direction in which resources are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadingProgression {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
    /// Publication default.
    Auto,
}

impl PresentationEnum for ReadingProgression {
    const ALL: &'static [Self] = &[Self::Ltr, Self::Rtl, Self::Auto];
    const NAMES: &'static [&'static str] = &["ltr", "rtl", "auto"];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
            Self::Auto => "auto",
        }
    }
}

presentation_enum_impls!(ReadingProgression, "readingProgression");
