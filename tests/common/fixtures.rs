use std::sync::Arc;

use epub_presentation::{
    ActivationRule, ActivationRules, ConstraintRegistry, Overflow, PresentationController,
    PresentationKey, PresentationValue, Requirement,
};

pub fn publisher_styles() -> PresentationKey {
    PresentationKey::new("publisherStyles")
}

pub fn letter_spacing() -> PresentationKey {
    PresentationKey::new("letterSpacing")
}

/// Keys the property tests draw from: the well-known ones plus two
/// renderer extensions.
pub fn sample_keys() -> Vec<PresentationKey> {
    let mut keys = PresentationKey::well_known().to_vec();
    keys.push(publisher_styles());
    keys.push(letter_spacing());
    keys
}

/// Rule table where `continuous` is only active when turned on, as in a
/// navigator that renders discrete pages by default.
pub fn self_gated_continuous_rules() -> ActivationRules {
    ActivationRules::new().with_rule(
        PresentationKey::CONTINUOUS,
        ActivationRule::requires([Requirement::new(PresentationKey::CONTINUOUS, true)]),
    )
}

/// Rule table covering every well-known key plus a publisher-styles gate.
pub fn full_rules() -> ActivationRules {
    ActivationRules::new()
        .with_rule(PresentationKey::OVERFLOW, ActivationRule::Always)
        .with_rule(PresentationKey::ORIENTATION, ActivationRule::Always)
        .with_rule(PresentationKey::READING_PROGRESSION, ActivationRule::Always)
        .with_rule(PresentationKey::FIT, ActivationRule::Unsupported)
        .with_rule(
            PresentationKey::CONTINUOUS,
            ActivationRule::requires([Requirement::new(
                PresentationKey::OVERFLOW,
                Overflow::Scrolled,
            )]),
        )
        .with_rule(
            PresentationKey::PAGE_SPACING,
            ActivationRule::requires([Requirement::new(PresentationKey::CONTINUOUS, true)]),
        )
        .with_rule(
            letter_spacing(),
            ActivationRule::requires([Requirement::new(
                publisher_styles(),
                PresentationValue::Bool(false),
            )]),
        )
        .with_default(PresentationKey::OVERFLOW, Overflow::Paginated)
        .with_default(publisher_styles(), true)
}

pub fn controller(rules: ActivationRules) -> PresentationController {
    PresentationController::new(Arc::new(ConstraintRegistry::standard()), Arc::new(rules))
}
