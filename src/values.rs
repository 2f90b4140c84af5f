//! Settings bundles: ordered key/value overrides handed to a navigator.

use std::collections::btree_map::{self, BTreeMap};

use crate::key::PresentationKey;
use crate::properties::{Fit, Orientation, Overflow, ReadingProgression};
use crate::value::{FromPresentationValue, PresentationValue};

/// Key/value pairs provided by the app to influence a navigator's
/// Presentation Properties.
///
/// The bundle does not validate what it holds; run it through
/// [`crate::ConstraintRegistry`] before applying it to rendering.
/// Iteration order is the key order, which keeps output deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresentationValues {
    values: BTreeMap<PresentationKey, PresentationValue>,
}

impl PresentationValues {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value decoded as `T`.
    ///
    /// A value of another variant, or an enum name `T` does not know, reads
    /// as `None`.
    pub fn get<T: FromPresentationValue>(&self, key: &PresentationKey) -> Option<T> {
        self.values.get(key).and_then(T::from_presentation_value)
    }

    /// Raw stored value.
    pub fn get_value(&self, key: &PresentationKey) -> Option<&PresentationValue> {
        self.values.get(key)
    }

    /// Insert or overwrite `key` with `Some(value)`, or remove it with `None`.
    pub fn set<V: Into<PresentationValue>>(&mut self, key: PresentationKey, value: Option<V>) {
        match value {
            Some(value) => {
                self.values.insert(key, value.into());
            }
            None => {
                self.values.remove(&key);
            }
        }
    }

    /// Builder form of [`Self::set`] with a present value.
    pub fn with(mut self, key: PresentationKey, value: impl Into<PresentationValue>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// Remove `key`, returning its previous value.
    pub fn remove(&mut self, key: &PresentationKey) -> Option<PresentationValue> {
        self.values.remove(key)
    }

    /// Copy of this bundle after overwriting any setting with the values
    /// from `other`.
    pub fn merging(&self, other: &PresentationValues) -> PresentationValues {
        let mut merged = self.values.clone();
        for (key, value) in &other.values {
            merged.insert(key.clone(), value.clone());
        }
        Self { values: merged }
    }

    pub fn contains_key(&self, key: &PresentationKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PresentationKey, PresentationValue> {
        self.values.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, PresentationKey, PresentationValue> {
        self.values.keys()
    }

    pub fn continuous(&self) -> Option<bool> {
        self.get(&PresentationKey::CONTINUOUS)
    }

    pub fn set_continuous(&mut self, value: Option<bool>) {
        self.set(PresentationKey::CONTINUOUS, value);
    }

    pub fn with_continuous(self, value: bool) -> Self {
        self.with(PresentationKey::CONTINUOUS, value)
    }

    pub fn fit(&self) -> Option<Fit> {
        self.get(&PresentationKey::FIT)
    }

    pub fn set_fit(&mut self, value: Option<Fit>) {
        self.set(PresentationKey::FIT, value);
    }

    pub fn with_fit(self, value: Fit) -> Self {
        self.with(PresentationKey::FIT, value)
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.get(&PresentationKey::ORIENTATION)
    }

    pub fn set_orientation(&mut self, value: Option<Orientation>) {
        self.set(PresentationKey::ORIENTATION, value);
    }

    pub fn with_orientation(self, value: Orientation) -> Self {
        self.with(PresentationKey::ORIENTATION, value)
    }

    pub fn overflow(&self) -> Option<Overflow> {
        self.get(&PresentationKey::OVERFLOW)
    }

    pub fn set_overflow(&mut self, value: Option<Overflow>) {
        self.set(PresentationKey::OVERFLOW, value);
    }

    pub fn with_overflow(self, value: Overflow) -> Self {
        self.with(PresentationKey::OVERFLOW, value)
    }

    /// Normalized page spacing in `[0.0, 1.0]` once validated.
    pub fn page_spacing(&self) -> Option<f64> {
        self.get(&PresentationKey::PAGE_SPACING)
    }

    pub fn set_page_spacing(&mut self, value: Option<f64>) {
        self.set(PresentationKey::PAGE_SPACING, value);
    }

    pub fn with_page_spacing(self, value: f64) -> Self {
        self.with(PresentationKey::PAGE_SPACING, value)
    }

    pub fn reading_progression(&self) -> Option<ReadingProgression> {
        self.get(&PresentationKey::READING_PROGRESSION)
    }

    pub fn set_reading_progression(&mut self, value: Option<ReadingProgression>) {
        self.set(PresentationKey::READING_PROGRESSION, value);
    }

    pub fn with_reading_progression(self, value: ReadingProgression) -> Self {
        self.with(PresentationKey::READING_PROGRESSION, value)
    }
}

impl FromIterator<(PresentationKey, PresentationValue)> for PresentationValues {
    fn from_iter<I: IntoIterator<Item = (PresentationKey, PresentationValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<(PresentationKey, PresentationValue)> for PresentationValues {
    fn extend<I: IntoIterator<Item = (PresentationKey, PresentationValue)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl IntoIterator for PresentationValues {
    type Item = (PresentationKey, PresentationValue);
    type IntoIter = btree_map::IntoIter<PresentationKey, PresentationValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a PresentationValues {
    type Item = (&'a PresentationKey, &'a PresentationValue);
    type IntoIter = btree_map::Iter<'a, PresentationKey, PresentationValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
