use std::fmt;
use std::sync::{Arc, Mutex};

use epub_presentation::{
    ActivationError, Localizer, Presentation, PresentationController, PresentationKey,
    PresentationValue, PresentationValues, ValueConstraint,
};

use crate::preferences::PreferencesStore;
use crate::profile::NavigatorProfile;

/// Runtime diagnostics from settings changes.
#[derive(Clone, Debug, PartialEq)]
pub enum PresentationDiagnostic {
    /// An override failed validation and was not applied.
    ValueRejected {
        key: PresentationKey,
        value: PresentationValue,
    },
    /// A property was activated; `changed` lists the keys that were rewritten.
    Activated {
        key: PresentationKey,
        changed: Vec<PresentationKey>,
    },
    ActivationFailed(ActivationError),
}

type DiagnosticCallback = Arc<Mutex<Box<dyn FnMut(PresentationDiagnostic) + Send + 'static>>>;
type DiagnosticSink = Option<DiagnosticCallback>;

/// Presentation state of one navigator instance.
///
/// Owns the current settings for its profile. Settings changes are expected
/// on the thread that drives rendering; share the navigator behind a mutex
/// otherwise.
#[derive(Clone)]
pub struct NavigatorPresentation {
    profile: NavigatorProfile,
    controller: PresentationController,
    diagnostic_sink: DiagnosticSink,
}

impl fmt::Debug for NavigatorPresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigatorPresentation")
            .field("profile", &self.profile)
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

impl NavigatorPresentation {
    pub fn new(profile: NavigatorProfile) -> Self {
        Self {
            profile,
            controller: PresentationController::new(
                Arc::new(profile.registry()),
                Arc::new(profile.rules()),
            ),
            diagnostic_sink: None,
        }
    }

    /// Restore the settings previously stored for this profile, if any.
    pub fn restore(profile: NavigatorProfile, store: &dyn PreferencesStore) -> Self {
        let mut navigator = Self::new(profile);
        if let Some(values) = store.load(profile) {
            navigator.apply(&values);
        }
        navigator
    }

    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.controller = self.controller.with_localizer(localizer);
        self
    }

    /// Register or replace the diagnostics sink.
    pub fn set_diagnostic_sink<F>(&mut self, sink: F)
    where
        F: FnMut(PresentationDiagnostic) + Send + 'static,
    {
        self.diagnostic_sink = Some(Arc::new(Mutex::new(Box::new(sink))));
    }

    fn emit_diagnostic(&self, diagnostic: PresentationDiagnostic) {
        let Some(sink) = &self.diagnostic_sink else {
            return;
        };
        if let Ok(mut sink) = sink.lock() {
            sink(diagnostic);
        }
    }

    pub fn profile(&self) -> NavigatorProfile {
        self.profile
    }

    /// Values the renderer lays out with: overrides over profile defaults.
    pub fn effective_values(&self) -> PresentationValues {
        self.controller.effective_values()
    }

    /// Merge host overrides; invalid entries are dropped and reported.
    pub fn apply(&mut self, overrides: &PresentationValues) -> Vec<PresentationKey> {
        let rejected = self.controller.apply(overrides);
        for key in &rejected {
            if let Some(value) = overrides.get_value(key) {
                self.emit_diagnostic(PresentationDiagnostic::ValueRejected {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }
        rejected
    }

    /// Activate `key` on the current settings and keep the result.
    ///
    /// On failure the settings are unchanged. Use [`Self::localized_error`]
    /// for a user-facing reason.
    pub fn enable(&mut self, key: &PresentationKey) -> Result<(), ActivationError> {
        let before = self.controller.values().clone();
        match self.controller.activate_and_apply(key) {
            Ok(()) => {
                let changed = changed_keys(&before, self.controller.values());
                self.emit_diagnostic(PresentationDiagnostic::Activated {
                    key: key.clone(),
                    changed,
                });
                Ok(())
            }
            Err(err) => {
                self.emit_diagnostic(PresentationDiagnostic::ActivationFailed(err.clone()));
                Err(err)
            }
        }
    }

    pub fn localized_error(&self, error: &ActivationError) -> String {
        self.controller.localized_error(error)
    }

    /// Persist the current overrides.
    pub fn save(&self, store: &dyn PreferencesStore) {
        store.store(self.profile, self.controller.values());
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }
}

impl Presentation for NavigatorPresentation {
    fn values(&self) -> &PresentationValues {
        self.controller.values()
    }

    fn constraints(&self, key: &PresentationKey) -> Option<&ValueConstraint> {
        self.controller.constraints(key)
    }

    fn label(&self, key: &PresentationKey, value: &PresentationValue) -> Option<String> {
        self.controller.label(key, value)
    }

    fn is_active_for(&self, key: &PresentationKey, values: &PresentationValues) -> bool {
        self.controller.is_active_for(key, values)
    }

    fn activate(
        &self,
        key: &PresentationKey,
        values: &PresentationValues,
    ) -> Result<PresentationValues, ActivationError> {
        self.controller.activate(key, values)
    }
}

fn changed_keys(before: &PresentationValues, after: &PresentationValues) -> Vec<PresentationKey> {
    after
        .iter()
        .filter(|(key, value)| before.get_value(key) != Some(*value))
        .map(|(key, _)| key.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{NavigatorPresentation, PresentationDiagnostic};
    use crate::profile::NavigatorProfile;
    use epub_presentation::{
        ActivationError, Overflow, Presentation, PresentationKey, PresentationValue,
        PresentationValues,
    };
    use std::sync::{Arc, Mutex};

    fn recording(navigator: &mut NavigatorPresentation) -> Arc<Mutex<Vec<PresentationDiagnostic>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        navigator.set_diagnostic_sink(move |diagnostic| {
            sink.lock().expect("diagnostic lock").push(diagnostic);
        });
        seen
    }

    #[test]
    fn rejected_overrides_are_reported() {
        let mut navigator = NavigatorPresentation::new(NavigatorProfile::Reflowable);
        let seen = recording(&mut navigator);

        let rejected = navigator.apply(&PresentationValues::new().with_overflow(Overflow::Auto));
        assert_eq!(rejected, vec![PresentationKey::OVERFLOW]);
        assert_eq!(
            seen.lock().expect("diagnostic lock").as_slice(),
            &[PresentationDiagnostic::ValueRejected {
                key: PresentationKey::OVERFLOW,
                value: PresentationValue::from(Overflow::Auto),
            }]
        );
    }

    #[test]
    fn enable_reports_rewritten_keys() {
        let mut navigator = NavigatorPresentation::new(NavigatorProfile::Reflowable);
        let seen = recording(&mut navigator);

        navigator
            .enable(&PresentationKey::CONTINUOUS)
            .expect("continuous should activate");
        assert!(navigator.is_active(&PresentationKey::CONTINUOUS));
        assert_eq!(
            seen.lock().expect("diagnostic lock").as_slice(),
            &[PresentationDiagnostic::Activated {
                key: PresentationKey::CONTINUOUS,
                changed: vec![PresentationKey::OVERFLOW],
            }]
        );
    }

    #[test]
    fn enable_failure_returns_typed_error() {
        let mut navigator = NavigatorPresentation::new(NavigatorProfile::Reflowable);
        let seen = recording(&mut navigator);

        let err = navigator
            .enable(&PresentationKey::PAGE_SPACING)
            .expect_err("page spacing is unsupported when reflowable");
        assert_eq!(
            err,
            ActivationError::Unsupported {
                key: PresentationKey::PAGE_SPACING
            }
        );
        assert_eq!(
            navigator.localized_error(&err),
            "Page spacing is not available for this publication."
        );
        assert!(navigator.values().is_empty());
        assert_eq!(
            seen.lock().expect("diagnostic lock").as_slice(),
            &[PresentationDiagnostic::ActivationFailed(
                ActivationError::Unsupported {
                    key: PresentationKey::PAGE_SPACING
                }
            )]
        );
    }
}
