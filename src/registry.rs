//! Per-key constraint lookup.

use std::collections::HashMap;

use crate::constraint::ValueConstraint;
use crate::key::PresentationKey;
use crate::properties::{Fit, Orientation, Overflow, ReadingProgression};
use crate::value::{PresentationValue, ValueKind};
use crate::values::PresentationValues;

/// Constraints declared for each Presentation Property.
///
/// This is the single place that decides whether a value is legal. The
/// registry is read-only once built and is shared between navigators behind
/// an `Arc`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstraintRegistry {
    constraints: HashMap<PresentationKey, ValueConstraint>,
}

impl ConstraintRegistry {
    /// Registry without any declared constraint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Full domains for the well-known properties.
    pub fn standard() -> Self {
        Self::new()
            .with(
                PresentationKey::CONTINUOUS,
                ValueConstraint::ExactType(ValueKind::Bool),
            )
            .with(PresentationKey::FIT, ValueConstraint::enumeration::<Fit>(None))
            .with(
                PresentationKey::ORIENTATION,
                ValueConstraint::enumeration::<Orientation>(None),
            )
            .with(
                PresentationKey::OVERFLOW,
                ValueConstraint::enumeration::<Overflow>(None),
            )
            .with(PresentationKey::PAGE_SPACING, ValueConstraint::unit_range())
            .with(
                PresentationKey::READING_PROGRESSION,
                ValueConstraint::enumeration::<ReadingProgression>(None),
            )
    }

    /// Declare or replace the constraint of `key`.
    pub fn with(mut self, key: PresentationKey, constraint: ValueConstraint) -> Self {
        self.insert(key, constraint);
        self
    }

    pub fn insert(&mut self, key: PresentationKey, constraint: ValueConstraint) {
        self.constraints.insert(key, constraint);
    }

    /// Constraint declared for `key`.
    ///
    /// `None` means any value is accepted, not that the key is unknown.
    pub fn constraints_for(&self, key: &PresentationKey) -> Option<&ValueConstraint> {
        self.constraints.get(key)
    }

    /// Whether `value` is legal for `key`.
    pub fn validate(&self, key: &PresentationKey, value: &PresentationValue) -> bool {
        self.constraints_for(key)
            .is_none_or(|constraint| constraint.validate(value))
    }

    /// Keys of `values` holding an illegal value, in key order.
    pub fn invalid_keys(&self, values: &PresentationValues) -> Vec<PresentationKey> {
        values
            .iter()
            .filter(|(key, value)| !self.validate(key, value))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Copy of `values` without the entries that fail validation.
    pub fn sanitized(&self, values: &PresentationValues) -> PresentationValues {
        values
            .iter()
            .filter(|(key, value)| {
                let valid = self.validate(key, value);
                if !valid {
                    log::warn!("Dropping invalid presentation value {}={}", key, value);
                }
                valid
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}
