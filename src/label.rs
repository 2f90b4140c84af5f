//! User-facing labels for property values and activation errors.

use crate::error::ActivationError;
use crate::key::PresentationKey;
use crate::properties::{Fit, Orientation, Overflow, PresentationEnum, ReadingProgression};
use crate::value::{FromPresentationValue, PresentationValue};

/// Translates values and errors into display strings.
///
/// Implementations must not fail on unexpected input: return `None` for a
/// value without a known label.
pub trait Localizer: Send + Sync {
    /// Label for `value` of property `key`, e.g. "Left to right" for the
    /// `ltr` reading progression.
    fn label(&self, key: &PresentationKey, value: &PresentationValue) -> Option<String>;

    /// Message explaining why a property could not be activated.
    fn error_message(&self, error: &ActivationError) -> String;

    /// Display name of a property.
    fn property_name(&self, key: &PresentationKey) -> String {
        key.as_str().to_string()
    }
}

/// Built-in English labels for the well-known properties.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishLabels;

impl EnglishLabels {
    fn enum_label<E, F>(value: &PresentationValue, label: F) -> Option<String>
    where
        E: PresentationEnum + FromPresentationValue,
        F: Fn(E) -> &'static str,
    {
        E::from_presentation_value(value).map(|variant| label(variant).to_string())
    }
}

impl Localizer for EnglishLabels {
    fn label(&self, key: &PresentationKey, value: &PresentationValue) -> Option<String> {
        match key.as_str() {
            "continuous" => value
                .as_bool()
                .map(|on| if on { "On" } else { "Off" }.to_string()),
            "fit" => Self::enum_label(value, |fit: Fit| match fit {
                Fit::Contain => "Contain",
                Fit::Cover => "Cover",
                Fit::Width => "Fit width",
                Fit::Height => "Fit height",
            }),
            "orientation" => Self::enum_label(value, |orientation: Orientation| match orientation {
                Orientation::Auto => "Auto",
                Orientation::Landscape => "Landscape",
                Orientation::Portrait => "Portrait",
            }),
            "overflow" => Self::enum_label(value, |overflow: Overflow| match overflow {
                Overflow::Auto => "Auto",
                Overflow::Paginated => "Paginated",
                Overflow::Scrolled => "Scrolled",
            }),
            "pageSpacing" => value
                .as_f64()
                .filter(|spacing| spacing.is_finite())
                .map(|spacing| format!("{:.0}%", (spacing * 100.0).round() + 0.0)),
            "readingProgression" => {
                Self::enum_label(value, |progression: ReadingProgression| match progression {
                    ReadingProgression::Ltr => "Left to right",
                    ReadingProgression::Rtl => "Right to left",
                    ReadingProgression::Auto => "Auto",
                })
            }
            _ => None,
        }
    }

    fn error_message(&self, error: &ActivationError) -> String {
        match error {
            ActivationError::Unsupported { key } => {
                format!("{} is not available for this publication.", self.property_name(key))
            }
            ActivationError::Conflicting { key, with } => format!(
                "{} cannot be enabled with the current {} setting.",
                self.property_name(key),
                self.property_name(with)
            ),
        }
    }

    fn property_name(&self, key: &PresentationKey) -> String {
        match key.as_str() {
            "continuous" => "Continuous scroll".to_string(),
            "fit" => "Fit".to_string(),
            "orientation" => "Orientation".to_string(),
            "overflow" => "Overflow".to_string(),
            "pageSpacing" => "Page spacing".to_string(),
            "readingProgression" => "Reading progression".to_string(),
            other => other.to_string(),
        }
    }
}
