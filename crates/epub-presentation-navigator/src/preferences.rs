use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use epub_presentation::{
    ConstraintRegistry, PresentationKey, PresentationValue, PresentationValues, ValueKind,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::profile::NavigatorProfile;

/// Storage hooks for the host's presentation preferences.
pub trait PreferencesStore {
    /// Stored overrides for `profile`, if available.
    fn load(&self, _profile: NavigatorProfile) -> Option<PresentationValues> {
        None
    }

    /// Persist overrides for `profile`.
    fn store(&self, _profile: NavigatorProfile, _values: &PresentationValues) {}
}

const ENUM_TAG: &str = "enum";

/// Encode a bundle as a flat JSON object.
///
/// Enum names are written tagged as `{"enum": name}` so they decode back to
/// enum values for any key. Non-finite numbers have no JSON form and are
/// skipped.
pub fn encode_values(values: &PresentationValues) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, value) in values {
        let encoded = match value {
            PresentationValue::Bool(value) => Value::Bool(*value),
            PresentationValue::Float(value) => match Number::from_f64(*value) {
                Some(number) => Value::Number(number),
                None => {
                    log::warn!("Skipping non-finite presentation value {}={}", key, value);
                    continue;
                }
            },
            PresentationValue::Enum(name) => {
                let mut tagged = Map::new();
                tagged.insert(ENUM_TAG.to_string(), Value::String(name.clone()));
                Value::Object(tagged)
            }
            PresentationValue::String(value) => Value::String(value.clone()),
        };
        out.insert(key.as_str().to_string(), encoded);
    }
    out
}

/// Decode a flat JSON object produced by [`encode_values`].
///
/// Tagged `{"enum": name}` objects decode to enum values. Plain strings are
/// decoded as enum values when the key's constraint in `registry` expects
/// one. Entries failing validation are dropped.
pub fn decode_values(object: &Map<String, Value>, registry: &ConstraintRegistry) -> PresentationValues {
    let mut values = PresentationValues::new();
    for (id, encoded) in object {
        let key = PresentationKey::new(id.as_str());
        let expects_enum = registry
            .constraints_for(&key)
            .is_some_and(|constraint| constraint.value_kind() == ValueKind::Enum);
        let value = match encoded {
            Value::Bool(value) => PresentationValue::Bool(*value),
            Value::Number(number) => match number.as_f64() {
                Some(value) => PresentationValue::Float(value),
                None => continue,
            },
            Value::String(value) if expects_enum => PresentationValue::Enum(value.clone()),
            Value::String(value) => PresentationValue::String(value.clone()),
            Value::Object(tagged) => match enum_name(tagged) {
                Some(name) => PresentationValue::Enum(name.to_string()),
                None => {
                    log::warn!("Ignoring structured preference value for {}", key);
                    continue;
                }
            },
            Value::Null => continue,
            Value::Array(_) => {
                log::warn!("Ignoring structured preference value for {}", key);
                continue;
            }
        };
        values.set(key, Some(value));
    }
    registry.sanitized(&values)
}

fn enum_name(tagged: &Map<String, Value>) -> Option<&str> {
    if tagged.len() != 1 {
        return None;
    }
    tagged.get(ENUM_TAG)?.as_str()
}

/// In-memory preference store, mostly for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPreferencesStore {
    entries: Mutex<HashMap<NavigatorProfile, PresentationValues>>,
}

impl MemoryPreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesStore for MemoryPreferencesStore {
    fn load(&self, profile: NavigatorProfile) -> Option<PresentationValues> {
        self.entries.lock().ok()?.get(&profile).cloned()
    }

    fn store(&self, profile: NavigatorProfile, values: &PresentationValues) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(profile, values.clone());
        }
    }
}

const PREFERENCES_SCHEMA_VERSION: u8 = 1;
const DEFAULT_MAX_PREFERENCES_FILE_BYTES: usize = 64 * 1024;
static PREFERENCES_WRITE_NONCE: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Serialize, Deserialize)]
struct PersistedPreferencesEnvelope {
    version: u8,
    profile: String,
    values: Map<String, Value>,
}

/// File-backed preference store.
///
/// Paths are deterministic by profile: `<root>/<profile>.json`. Files hold a
/// JSON envelope with a schema version, and `max_file_bytes` is enforced on
/// reads and writes. I/O, decode, and size failures make `load` return
/// `None` and `store` a no-op.
#[derive(Clone, Debug)]
pub struct FilePreferencesStore {
    root: PathBuf,
    max_file_bytes: usize,
}

impl FilePreferencesStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_file_bytes: DEFAULT_MAX_PREFERENCES_FILE_BYTES,
        }
    }

    /// Set the maximum allowed preference file size in bytes.
    ///
    /// Values of `0` are treated as `1` to keep the cap explicit.
    pub fn with_max_file_bytes(mut self, max_file_bytes: usize) -> Self {
        self.max_file_bytes = max_file_bytes.max(1);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_file_bytes(&self) -> usize {
        self.max_file_bytes
    }

    pub fn profile_path(&self, profile: NavigatorProfile) -> PathBuf {
        self.root.join(format!("{}.json", profile.as_str()))
    }
}

impl PreferencesStore for FilePreferencesStore {
    fn load(&self, profile: NavigatorProfile) -> Option<PresentationValues> {
        let path = self.profile_path(profile);
        let max_file_bytes = self.max_file_bytes as u64;
        if fs::metadata(&path).ok()?.len() > max_file_bytes {
            log::debug!("Preferences file {} exceeds size cap", path.display());
            return None;
        }

        let file = File::open(&path).ok()?;
        let mut reader = file.take(max_file_bytes.saturating_add(1));
        let mut payload = Vec::new();
        if reader.read_to_end(&mut payload).is_err() || payload.len() > self.max_file_bytes {
            return None;
        }
        let envelope: PersistedPreferencesEnvelope = serde_json::from_slice(&payload).ok()?;
        if envelope.version != PREFERENCES_SCHEMA_VERSION || envelope.profile != profile.as_str() {
            log::debug!(
                "Ignoring preferences file {} (version={} profile={})",
                path.display(),
                envelope.version,
                envelope.profile
            );
            return None;
        }
        Some(decode_values(&envelope.values, &profile.registry()))
    }

    fn store(&self, profile: NavigatorProfile, values: &PresentationValues) {
        let envelope = PersistedPreferencesEnvelope {
            version: PREFERENCES_SCHEMA_VERSION,
            profile: profile.as_str().to_string(),
            values: encode_values(values),
        };
        let Ok(payload) = serde_json::to_vec(&envelope) else {
            return;
        };
        if payload.len() > self.max_file_bytes {
            log::warn!(
                "Preferences for {} exceed max_file_bytes ({} > {})",
                profile,
                payload.len(),
                self.max_file_bytes
            );
            return;
        }
        if fs::create_dir_all(&self.root).is_err() {
            return;
        }

        let final_path = self.profile_path(profile);
        let nonce = PREFERENCES_WRITE_NONCE.fetch_add(1, Ordering::Relaxed);
        let temp_path = self.root.join(format!(
            "{}.json.tmp-{}-{}",
            profile.as_str(),
            std::process::id(),
            nonce
        ));
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
        {
            Ok(file) => file,
            Err(_) => return,
        };
        if file.write_all(&payload).is_err() || file.sync_all().is_err() {
            remove_file_quiet(&temp_path);
            return;
        }
        drop(file);
        if fs::rename(&temp_path, &final_path).is_err() {
            remove_file_quiet(&temp_path);
        }
    }
}

fn remove_file_quiet(path: &Path) {
    let _ = fs::remove_file(path);
}
