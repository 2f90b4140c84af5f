//! Activation rules: when a Presentation Property takes visible effect, and
//! how to rewrite a settings bundle so that it does.

use std::collections::{BTreeMap, HashMap};

use smallvec::SmallVec;

use crate::error::ActivationError;
use crate::key::PresentationKey;
use crate::registry::ConstraintRegistry;
use crate::value::PresentationValue;
use crate::values::PresentationValues;

/// A `key = value` precondition of an activation rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Requirement {
    pub key: PresentationKey,
    pub value: PresentationValue,
}

impl Requirement {
    pub fn new(key: PresentationKey, value: impl Into<PresentationValue>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// When a property is active.
#[derive(Clone, Debug, PartialEq)]
pub enum ActivationRule {
    /// Active whatever the bundle contains.
    Always,
    /// Active when every requirement holds and every required property is
    /// itself active.
    Requires(SmallVec<[Requirement; 2]>),
    /// Never active.
    Unsupported,
}

impl ActivationRule {
    pub fn requires(requirements: impl IntoIterator<Item = Requirement>) -> Self {
        Self::Requires(requirements.into_iter().collect())
    }
}

/// Rule table of one navigator configuration.
///
/// `defaults` are the values the navigator uses for keys a bundle leaves
/// out; requirements are checked against `bundle.merging(defaults)` with the
/// bundle winning. Keys without a rule are never active and cannot be
/// activated, but may still be required by other rules as plain settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivationRules {
    rules: HashMap<PresentationKey, ActivationRule>,
    defaults: PresentationValues,
}

impl ActivationRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, key: PresentationKey, rule: ActivationRule) -> Self {
        self.rules.insert(key, rule);
        self
    }

    pub fn with_default(mut self, key: PresentationKey, value: impl Into<PresentationValue>) -> Self {
        self.defaults.set(key, Some(value.into()));
        self
    }

    pub fn rule(&self, key: &PresentationKey) -> Option<&ActivationRule> {
        self.rules.get(key)
    }

    pub fn defaults(&self) -> &PresentationValues {
        &self.defaults
    }

    /// Value the navigator would use for `key` when applying `values`.
    pub fn effective_value<'a>(
        &'a self,
        values: &'a PresentationValues,
        key: &PresentationKey,
    ) -> Option<&'a PresentationValue> {
        values
            .get_value(key)
            .or_else(|| self.defaults.get_value(key))
    }

    /// Whether `key` takes visible effect when `values` are applied.
    pub fn is_active(&self, key: &PresentationKey, values: &PresentationValues) -> bool {
        let mut visiting = Vec::new();
        match self.rules.get(key) {
            None | Some(ActivationRule::Unsupported) => false,
            Some(ActivationRule::Always) => true,
            Some(ActivationRule::Requires(requirements)) => {
                self.requirements_hold(key, requirements, values, &mut visiting)
            }
        }
    }

    fn requirements_hold(
        &self,
        key: &PresentationKey,
        requirements: &[Requirement],
        values: &PresentationValues,
        visiting: &mut Vec<PresentationKey>,
    ) -> bool {
        visiting.push(key.clone());
        let hold = requirements.iter().all(|requirement| {
            self.effective_value(values, &requirement.key) == Some(&requirement.value)
                && (requirement.key == *key
                    || self.dependency_active(&requirement.key, values, visiting))
        });
        visiting.pop();
        hold
    }

    fn dependency_active(
        &self,
        key: &PresentationKey,
        values: &PresentationValues,
        visiting: &mut Vec<PresentationKey>,
    ) -> bool {
        // Already being checked further up the chain.
        if visiting.contains(key) {
            return true;
        }
        match self.rules.get(key) {
            None | Some(ActivationRule::Always) => true,
            Some(ActivationRule::Unsupported) => false,
            Some(ActivationRule::Requires(requirements)) => {
                self.requirements_hold(key, requirements, values, visiting)
            }
        }
    }

    /// Rewrite `values` with the fewest overrides that make `key` active.
    ///
    /// Only keys whose effective value differs from a requirement are
    /// written, so activating an already active property returns `values`
    /// unchanged. Required values are checked against `registry`.
    pub fn activate(
        &self,
        key: &PresentationKey,
        values: &PresentationValues,
        registry: &ConstraintRegistry,
    ) -> Result<PresentationValues, ActivationError> {
        let requirements = match self.rules.get(key) {
            None | Some(ActivationRule::Unsupported) => {
                return Err(ActivationError::Unsupported { key: key.clone() });
            }
            Some(ActivationRule::Always) => return Ok(values.clone()),
            Some(ActivationRule::Requires(requirements)) => requirements,
        };

        let mut assigned = BTreeMap::new();
        let mut visiting = Vec::new();
        self.collect_requirements(key, key, requirements, registry, &mut assigned, &mut visiting)?;

        let mut activated = values.clone();
        for (required_key, required_value) in assigned {
            if self.effective_value(values, &required_key) == Some(&required_value) {
                continue;
            }
            log::debug!(
                "Activating {} sets {}={}",
                key,
                required_key,
                required_value
            );
            activated.set(required_key, Some(required_value));
        }
        Ok(activated)
    }

    fn collect_requirements(
        &self,
        root: &PresentationKey,
        key: &PresentationKey,
        requirements: &[Requirement],
        registry: &ConstraintRegistry,
        assigned: &mut BTreeMap<PresentationKey, PresentationValue>,
        visiting: &mut Vec<PresentationKey>,
    ) -> Result<(), ActivationError> {
        let conflict = |with: &PresentationKey| ActivationError::Conflicting {
            key: root.clone(),
            with: with.clone(),
        };

        visiting.push(key.clone());
        for requirement in requirements {
            if !registry.validate(&requirement.key, &requirement.value) {
                return Err(conflict(&requirement.key));
            }
            match assigned.get(&requirement.key) {
                Some(existing) if *existing != requirement.value => {
                    return Err(conflict(&requirement.key));
                }
                Some(_) => {}
                None => {
                    assigned.insert(requirement.key.clone(), requirement.value.clone());
                }
            }

            if requirement.key == *key || visiting.contains(&requirement.key) {
                continue;
            }
            match self.rules.get(&requirement.key) {
                None | Some(ActivationRule::Always) => {}
                Some(ActivationRule::Unsupported) => return Err(conflict(&requirement.key)),
                Some(ActivationRule::Requires(nested)) => {
                    self.collect_requirements(
                        root,
                        &requirement.key,
                        nested,
                        registry,
                        assigned,
                        visiting,
                    )?;
                }
            }
        }
        visiting.pop();
        Ok(())
    }
}
