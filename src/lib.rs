//! Presentation Properties model for EPUB navigators.
//!
//! A host application describes how it wants a publication rendered with a
//! [`PresentationValues`] bundle. The navigator validates each value against
//! its [`ConstraintRegistry`], reports which properties would take effect
//! through [`Presentation::is_active_for`], and can rewrite a bundle so a
//! property becomes active with [`Presentation::activate`].
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use epub_presentation::{
//!     ActivationRule, ActivationRules, ConstraintRegistry, Overflow, Presentation,
//!     PresentationController, PresentationKey, PresentationValues, Requirement,
//! };
//!
//! let rules = ActivationRules::new()
//!     .with_rule(PresentationKey::OVERFLOW, ActivationRule::Always)
//!     .with_rule(
//!         PresentationKey::CONTINUOUS,
//!         ActivationRule::requires([Requirement::new(PresentationKey::OVERFLOW, Overflow::Scrolled)]),
//!     );
//! let controller =
//!     PresentationController::new(Arc::new(ConstraintRegistry::standard()), Arc::new(rules));
//!
//! let wanted = PresentationValues::new().with_continuous(true);
//! assert!(!controller.is_active_for(&PresentationKey::CONTINUOUS, &wanted));
//!
//! let activated = controller.activate(&PresentationKey::CONTINUOUS, &wanted).unwrap();
//! assert_eq!(activated.overflow(), Some(Overflow::Scrolled));
//! ```

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

pub mod constraint;
pub mod error;
pub mod key;
pub mod label;
pub mod presentation;
pub mod properties;
pub mod registry;
pub mod rules;
pub mod value;
pub mod values;

pub use constraint::{RangeConstraint, ValueConstraint};
pub use error::ActivationError;
pub use key::PresentationKey;
pub use label::{EnglishLabels, Localizer};
pub use presentation::{Presentation, PresentationController};
pub use properties::{Fit, Orientation, Overflow, PresentationEnum, ReadingProgression, UnknownVariant};
pub use registry::ConstraintRegistry;
pub use rules::{ActivationRule, ActivationRules, Requirement};
pub use value::{FromPresentationValue, PresentationValue, ValueKind};
pub use values::PresentationValues;
