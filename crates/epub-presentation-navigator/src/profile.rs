use std::fmt;

use epub_presentation::{
    ActivationRule, ActivationRules, ConstraintRegistry, Fit, Overflow, PresentationKey,
    ReadingProgression, Requirement, ValueConstraint,
};

/// Navigator configuration a rule table is written for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigatorProfile {
    /// Reflowable EPUB: text reflows into the viewport.
    Reflowable,
    /// Fixed-layout EPUB and PDF-like publications: pages keep their size.
    FixedLayout,
}

impl NavigatorProfile {
    pub const ALL: [Self; 2] = [Self::Reflowable, Self::FixedLayout];

    /// Stable identifier used for persisted preference files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reflowable => "reflowable",
            Self::FixedLayout => "fixed-layout",
        }
    }

    /// Value domains this navigator accepts.
    pub fn registry(&self) -> ConstraintRegistry {
        let standard = ConstraintRegistry::standard();
        match self {
            Self::Reflowable => standard
                .with(
                    PresentationKey::OVERFLOW,
                    ValueConstraint::enumeration(Some(&[Overflow::Paginated, Overflow::Scrolled][..])),
                )
                .with(
                    PresentationKey::READING_PROGRESSION,
                    ValueConstraint::enumeration(Some(
                        &[ReadingProgression::Ltr, ReadingProgression::Rtl][..],
                    )),
                ),
            Self::FixedLayout => standard.with(
                PresentationKey::FIT,
                ValueConstraint::enumeration(Some(&[Fit::Contain, Fit::Width, Fit::Height][..])),
            ),
        }
    }

    /// When each property takes effect, and the navigator's defaults.
    pub fn rules(&self) -> ActivationRules {
        match self {
            Self::Reflowable => ActivationRules::new()
                .with_rule(PresentationKey::OVERFLOW, ActivationRule::Always)
                .with_rule(PresentationKey::ORIENTATION, ActivationRule::Always)
                .with_rule(PresentationKey::READING_PROGRESSION, ActivationRule::Always)
                .with_rule(
                    PresentationKey::CONTINUOUS,
                    ActivationRule::requires([Requirement::new(
                        PresentationKey::OVERFLOW,
                        Overflow::Scrolled,
                    )]),
                )
                .with_rule(PresentationKey::FIT, ActivationRule::Unsupported)
                .with_rule(PresentationKey::PAGE_SPACING, ActivationRule::Unsupported)
                .with_default(PresentationKey::OVERFLOW, Overflow::Paginated)
                .with_default(PresentationKey::CONTINUOUS, false),
            Self::FixedLayout => ActivationRules::new()
                .with_rule(PresentationKey::CONTINUOUS, ActivationRule::Always)
                .with_rule(PresentationKey::FIT, ActivationRule::Always)
                .with_rule(PresentationKey::ORIENTATION, ActivationRule::Always)
                .with_rule(PresentationKey::READING_PROGRESSION, ActivationRule::Always)
                .with_rule(
                    PresentationKey::PAGE_SPACING,
                    ActivationRule::requires([Requirement::new(
                        PresentationKey::CONTINUOUS,
                        true,
                    )]),
                )
                .with_rule(PresentationKey::OVERFLOW, ActivationRule::Unsupported)
                .with_default(PresentationKey::CONTINUOUS, false)
                .with_default(PresentationKey::FIT, Fit::Contain),
        }
    }
}

impl fmt::Display for NavigatorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
