//! The navigator-facing Presentation contract and its default controller.

use std::fmt;
use std::sync::Arc;

use crate::constraint::ValueConstraint;
use crate::error::ActivationError;
use crate::key::PresentationKey;
use crate::label::{EnglishLabels, Localizer};
use crate::registry::ConstraintRegistry;
use crate::rules::ActivationRules;
use crate::value::PresentationValue;
use crate::values::PresentationValues;

/// Current values of the Presentation Properties determining how a
/// publication is rendered by a navigator.
pub trait Presentation {
    /// Current effective settings.
    fn values(&self) -> &PresentationValues;

    /// Legal value domain of `key`; `None` accepts any value.
    fn constraints(&self, key: &PresentationKey) -> Option<&ValueConstraint>;

    /// User-facing localized label for `value`.
    ///
    /// For example, with the reading progression property the value `ltr`
    /// is labelled "Left to right" in English.
    fn label(&self, key: &PresentationKey, value: &PresentationValue) -> Option<String>;

    /// Whether `key` will be active when `values` are applied to the
    /// navigator.
    ///
    /// For example, with a reflowable EPUB navigator continuous scrolling
    /// only takes effect in the scrolled overflow mode. Settings forms use
    /// this to grey out inactive controls.
    fn is_active_for(&self, key: &PresentationKey, values: &PresentationValues) -> bool;

    /// Rewrite `values` so `key` is active once they are applied.
    ///
    /// Returns an error when the property cannot be activated at all.
    fn activate(
        &self,
        key: &PresentationKey,
        values: &PresentationValues,
    ) -> Result<PresentationValues, ActivationError>;

    /// Whether `key` is active with the current values.
    fn is_active(&self, key: &PresentationKey) -> bool {
        self.is_active_for(key, self.values())
    }
}

/// Default [`Presentation`] implementation driven by a constraint registry
/// and an activation rule table.
///
/// The registry, rules and localizer are shared read-only; the current
/// values are owned by the controller and only change through `&mut self`.
#[derive(Clone)]
pub struct PresentationController {
    values: PresentationValues,
    registry: Arc<ConstraintRegistry>,
    rules: Arc<ActivationRules>,
    localizer: Arc<dyn Localizer>,
}

impl fmt::Debug for PresentationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationController")
            .field("values", &self.values)
            .field("registry", &self.registry)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl PresentationController {
    /// Create a controller with empty overrides and English labels.
    pub fn new(registry: Arc<ConstraintRegistry>, rules: Arc<ActivationRules>) -> Self {
        Self {
            values: PresentationValues::new(),
            registry,
            rules,
            localizer: Arc::new(EnglishLabels),
        }
    }

    /// Replace the label and error-message source.
    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = localizer;
        self
    }

    /// Start from `values`, dropping entries that fail validation.
    pub fn with_values(mut self, values: &PresentationValues) -> Self {
        self.values = self.registry.sanitized(values);
        self
    }

    pub fn registry(&self) -> &Arc<ConstraintRegistry> {
        &self.registry
    }

    pub fn rules(&self) -> &Arc<ActivationRules> {
        &self.rules
    }

    /// Merge `overrides` into the current values.
    ///
    /// Entries failing validation are not applied; their keys are returned
    /// in key order and the previous value for those keys is kept.
    pub fn apply(&mut self, overrides: &PresentationValues) -> Vec<PresentationKey> {
        let rejected = self.registry.invalid_keys(overrides);
        let accepted = self.registry.sanitized(overrides);
        self.values = self.values.merging(&accepted);
        rejected
    }

    /// Activate `key` against the current values and keep the result.
    ///
    /// On error the current values are left unchanged.
    pub fn activate_and_apply(&mut self, key: &PresentationKey) -> Result<(), ActivationError> {
        let activated = self.activate(key, &self.values)?;
        self.values = activated;
        Ok(())
    }

    /// Drop every override.
    pub fn reset(&mut self) {
        self.values = PresentationValues::new();
    }

    /// Values the navigator renders with: current overrides over the rule
    /// table's defaults.
    pub fn effective_values(&self) -> PresentationValues {
        self.rules.defaults().merging(&self.values)
    }

    /// User-facing message for an activation failure.
    pub fn localized_error(&self, error: &ActivationError) -> String {
        self.localizer.error_message(error)
    }
}

impl Presentation for PresentationController {
    fn values(&self) -> &PresentationValues {
        &self.values
    }

    fn constraints(&self, key: &PresentationKey) -> Option<&ValueConstraint> {
        self.registry.constraints_for(key)
    }

    fn label(&self, key: &PresentationKey, value: &PresentationValue) -> Option<String> {
        if !self.registry.validate(key, value) {
            return None;
        }
        self.localizer.label(key, value)
    }

    fn is_active_for(&self, key: &PresentationKey, values: &PresentationValues) -> bool {
        self.rules.is_active(key, values)
    }

    fn activate(
        &self,
        key: &PresentationKey,
        values: &PresentationValues,
    ) -> Result<PresentationValues, ActivationError> {
        self.rules.activate(key, values, &self.registry)
    }
}
