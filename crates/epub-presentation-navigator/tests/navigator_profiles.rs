use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use epub_presentation::{
    ActivationError, Fit, Overflow, Presentation, PresentationKey, PresentationValue,
    PresentationValues, ReadingProgression,
};
use epub_presentation_navigator::{
    FilePreferencesStore, MemoryPreferencesStore, NavigatorPresentation, NavigatorProfile,
    PreferencesStore,
};

static TEMP_NONCE: AtomicUsize = AtomicUsize::new(0);

fn temp_root(label: &str) -> PathBuf {
    let nonce = TEMP_NONCE.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "epub-presentation-{label}-{}-{nonce}",
        std::process::id()
    ))
}

#[test]
fn fixed_layout_page_spacing_requires_continuous() {
    let navigator = NavigatorPresentation::new(NavigatorProfile::FixedLayout);
    let values = PresentationValues::new().with_page_spacing(0.3);
    assert!(!navigator.is_active_for(&PresentationKey::PAGE_SPACING, &values));

    let activated = navigator
        .activate(&PresentationKey::PAGE_SPACING, &values)
        .expect("page spacing should activate");
    assert_eq!(activated.continuous(), Some(true));
    assert_eq!(activated.page_spacing(), Some(0.3));
    assert!(navigator.is_active_for(&PresentationKey::PAGE_SPACING, &activated));
}

#[test]
fn fixed_layout_has_no_overflow_and_narrow_fit() {
    let mut navigator = NavigatorPresentation::new(NavigatorProfile::FixedLayout);
    assert!(!navigator.is_active(&PresentationKey::OVERFLOW));
    let err = navigator
        .enable(&PresentationKey::OVERFLOW)
        .expect_err("overflow is unsupported for fixed layout");
    assert_eq!(
        err,
        ActivationError::Unsupported {
            key: PresentationKey::OVERFLOW
        }
    );
    assert_eq!(
        navigator.localized_error(&err),
        "Overflow is not available for this publication."
    );

    let rejected = navigator.apply(&PresentationValues::new().with_fit(Fit::Cover));
    assert_eq!(rejected, vec![PresentationKey::FIT]);
    assert_eq!(navigator.effective_values().fit(), Some(Fit::Contain));
}

#[test]
fn reflowable_labels_only_supported_values() {
    let navigator = NavigatorPresentation::new(NavigatorProfile::Reflowable);
    assert_eq!(
        navigator.label(&PresentationKey::OVERFLOW, &PresentationValue::from(Overflow::Auto)),
        None
    );
    assert_eq!(
        navigator.label(
            &PresentationKey::OVERFLOW,
            &PresentationValue::from(Overflow::Paginated)
        ),
        Some("Paginated".to_string())
    );
    assert_eq!(
        navigator.label(&PresentationKey::PAGE_SPACING, &PresentationValue::Float(5.0)),
        None
    );
}

#[test]
fn reflowable_continuous_flips_overflow() {
    let mut navigator = NavigatorPresentation::new(NavigatorProfile::Reflowable);
    navigator.apply(
        &PresentationValues::new()
            .with_continuous(true)
            .with_reading_progression(ReadingProgression::Rtl),
    );
    assert!(!navigator.is_active(&PresentationKey::CONTINUOUS));

    navigator
        .enable(&PresentationKey::CONTINUOUS)
        .expect("continuous should activate");
    let effective = navigator.effective_values();
    assert_eq!(effective.overflow(), Some(Overflow::Scrolled));
    assert_eq!(effective.continuous(), Some(true));
    assert_eq!(effective.reading_progression(), Some(ReadingProgression::Rtl));
}

#[test]
fn file_store_round_trips_per_profile() {
    let root = temp_root("roundtrip");
    let store = FilePreferencesStore::new(&root);

    let mut navigator = NavigatorPresentation::new(NavigatorProfile::FixedLayout);
    navigator.apply(
        &PresentationValues::new()
            .with_fit(Fit::Width)
            .with_continuous(true)
            .with_page_spacing(0.5),
    );
    navigator.apply(&PresentationValues::new().with(
        PresentationKey::new("theme"),
        PresentationValue::enumeration("sepia"),
    ));
    navigator.save(&store);
    assert!(store.profile_path(NavigatorProfile::FixedLayout).exists());
    assert_eq!(store.load(NavigatorProfile::Reflowable), None);

    let restored = NavigatorPresentation::restore(NavigatorProfile::FixedLayout, &store);
    assert_eq!(restored.values(), navigator.values());
    assert_eq!(
        restored.values().get_value(&PresentationKey::new("theme")),
        Some(&PresentationValue::enumeration("sepia"))
    );
    assert!(restored.is_active(&PresentationKey::PAGE_SPACING));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn file_store_ignores_oversized_and_foreign_files() {
    let root = temp_root("guards");
    let store = FilePreferencesStore::new(&root).with_max_file_bytes(16);
    store.store(
        NavigatorProfile::Reflowable,
        &PresentationValues::new().with_overflow(Overflow::Scrolled),
    );
    assert!(!store.profile_path(NavigatorProfile::Reflowable).exists());

    fs::create_dir_all(&root).expect("create temp root");
    fs::write(
        store.profile_path(NavigatorProfile::Reflowable),
        br#"{"version":1,"profile":"fixed-layout","values":{"overflow":"scrolled"}}"#,
    )
    .expect("write foreign file");
    let roomy = FilePreferencesStore::new(&root);
    assert_eq!(roomy.load(NavigatorProfile::Reflowable), None);

    fs::write(roomy.profile_path(NavigatorProfile::FixedLayout), b"not json")
        .expect("write corrupt file");
    assert_eq!(roomy.load(NavigatorProfile::FixedLayout), None);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn restore_drops_values_the_profile_rejects() {
    let store = MemoryPreferencesStore::new();
    store.store(
        NavigatorProfile::Reflowable,
        &PresentationValues::new()
            .with_overflow(Overflow::Auto)
            .with_reading_progression(ReadingProgression::Ltr),
    );

    let navigator = NavigatorPresentation::restore(NavigatorProfile::Reflowable, &store);
    assert_eq!(navigator.values().overflow(), None);
    assert_eq!(
        navigator.values().reading_progression(),
        Some(ReadingProgression::Ltr)
    );
}
