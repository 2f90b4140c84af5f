//! Activation errors.

use crate::key::PresentationKey;

/// Reason a Presentation Property could not be activated.
///
/// Always recoverable: the caller keeps its previous settings and can show
/// [`crate::Localizer::error_message`] to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivationError {
    /// The navigator never applies this property.
    Unsupported { key: PresentationKey },
    /// Activating `key` requires a value for `with` that contradicts another
    /// requirement, or that the navigator does not accept.
    Conflicting {
        key: PresentationKey,
        with: PresentationKey,
    },
}

impl ActivationError {
    /// Property whose activation failed.
    pub fn key(&self) -> &PresentationKey {
        match self {
            Self::Unsupported { key } | Self::Conflicting { key, .. } => key,
        }
    }
}

impl core::fmt::Display for ActivationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unsupported { key } => write!(f, "presentation property {} is unsupported", key),
            Self::Conflicting { key, with } => write!(
                f,
                "presentation property {} cannot be activated: conflicting requirement on {}",
                key, with
            ),
        }
    }
}

impl std::error::Error for ActivationError {}
