//! Navigator profiles, settings diagnostics, and preference persistence for
//! `epub-presentation`.

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

mod navigator;
mod preferences;
mod profile;

pub use navigator::{NavigatorPresentation, PresentationDiagnostic};
pub use preferences::{
    decode_values, encode_values, FilePreferencesStore, MemoryPreferencesStore, PreferencesStore,
};
pub use profile::NavigatorProfile;
