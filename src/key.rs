//! Presentation property identifiers.

use std::borrow::Cow;
use std::fmt;

static WELL_KNOWN: [PresentationKey; 6] = [
    PresentationKey::CONTINUOUS,
    PresentationKey::FIT,
    PresentationKey::ORIENTATION,
    PresentationKey::OVERFLOW,
    PresentationKey::PAGE_SPACING,
    PresentationKey::READING_PROGRESSION,
];

/// Identifier of a Presentation Property.
///
/// Keys compare, order and hash by their identifier string, so a key built
/// at runtime with [`PresentationKey::new`] is equal to the matching
/// well-known constant.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PresentationKey {
    id: Cow<'static, str>,
}

impl PresentationKey {
    /// Scroll through the publication as one continuous strip instead of
    /// discrete pages.
    pub const CONTINUOUS: Self = Self::from_static("continuous");
    /// How a fixed-layout page is fitted into the viewport.
    pub const FIT: Self = Self::from_static("fit");
    /// Preferred viewport orientation.
    pub const ORIENTATION: Self = Self::from_static("orientation");
    /// Paginated or scrolled flow.
    pub const OVERFLOW: Self = Self::from_static("overflow");
    /// Normalized gap between pages.
    pub const PAGE_SPACING: Self = Self::from_static("pageSpacing");
    /// Direction in which resources are laid out.
    pub const READING_PROGRESSION: Self = Self::from_static("readingProgression");

    /// Build a key for a renderer-specific property.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Cow::Owned(id.into()),
        }
    }

    /// Build a key from a static identifier, usable in `const` items.
    pub const fn from_static(id: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
        }
    }

    /// Identifier string.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Whether this key is one of the properties every navigator recognizes.
    pub fn is_well_known(&self) -> bool {
        WELL_KNOWN.iter().any(|known| known == self)
    }

    /// The well-known keys in declaration order.
    pub fn well_known() -> &'static [PresentationKey] {
        &WELL_KNOWN
    }
}

impl AsRef<str> for PresentationKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for PresentationKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PresentationKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl PartialEq<&str> for PresentationKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for PresentationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
