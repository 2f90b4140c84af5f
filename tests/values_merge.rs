mod common;

use std::collections::BTreeSet;

use common::fixtures::sample_keys;
use epub_presentation::{Fit, PresentationKey, PresentationValue, PresentationValues};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = PresentationValue> {
    prop_oneof![
        any::<bool>().prop_map(PresentationValue::Bool),
        (0.0f64..1.0).prop_map(PresentationValue::Float),
        prop::sample::select(vec!["contain", "cover", "width", "ltr", "scrolled"])
            .prop_map(|name| PresentationValue::enumeration(name)),
        "[a-z]{0,6}".prop_map(PresentationValue::String),
    ]
}

fn values_strategy() -> impl Strategy<Value = PresentationValues> {
    prop::collection::vec((prop::sample::select(sample_keys()), value_strategy()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

fn without_keys(values: &PresentationValues, keys: &BTreeSet<PresentationKey>) -> PresentationValues {
    values
        .iter()
        .filter(|(key, _)| !keys.contains(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

proptest! {
    #[test]
    fn merging_is_right_biased(a in values_strategy(), b in values_strategy()) {
        let merged = a.merging(&b);
        for key in sample_keys() {
            let expected = b.get_value(&key).or_else(|| a.get_value(&key));
            prop_assert_eq!(merged.get_value(&key), expected);
        }
        let keys: BTreeSet<_> = a.keys().chain(b.keys()).cloned().collect();
        prop_assert_eq!(merged.len(), keys.len());
    }

    #[test]
    fn sequential_merging_of_disjoint_bundles_is_associative(
        a in values_strategy(),
        b in values_strategy(),
        c in values_strategy(),
    ) {
        let b_keys: BTreeSet<_> = b.keys().cloned().collect();
        let c = without_keys(&c, &b_keys);

        prop_assert_eq!(a.merging(&b).merging(&c), a.merging(&b.merging(&c)));
    }

    #[test]
    fn merging_with_empty_is_identity(a in values_strategy()) {
        prop_assert_eq!(a.merging(&PresentationValues::new()), a.clone());
        prop_assert_eq!(PresentationValues::new().merging(&a), a);
    }
}

#[test]
fn conflicting_key_resolves_to_rightmost_bundle() {
    let a = PresentationValues::new().with_fit(Fit::Contain);
    let b = PresentationValues::new().with_fit(Fit::Cover);
    let c = PresentationValues::new().with_fit(Fit::Width);

    let left = a.merging(&b).merging(&c);
    let right = a.merging(&b.merging(&c));
    assert_eq!(left.fit(), Some(Fit::Width));
    assert_eq!(left, right);
    assert_eq!(b.merging(&a).fit(), Some(Fit::Contain));
}

#[test]
fn empty_bundle_merged_with_page_spacing() {
    let merged = PresentationValues::new().merging(&PresentationValues::new().with_page_spacing(0.9));
    assert_eq!(merged.page_spacing(), Some(0.9));
    assert_eq!(
        merged.get_value(&PresentationKey::PAGE_SPACING),
        Some(&PresentationValue::Float(0.9))
    );
}
