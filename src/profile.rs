// Profile store
//
// JSON-file-backed key/value settings (QA/staging profiles, remembered
// tip selections). Loading a key always yields a usable value, but the
// branch taken is observable: callers can tell a stored value apart from
// a default applied because the key was missing or failed to decode.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Error types for profile persistence
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile document is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for profile operations
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Which branch produced a loaded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// The stored value decoded cleanly.
    Stored,
    /// No value was stored under the key.
    DefaultMissing,
    /// A value was stored but did not decode as the requested type.
    DefaultDecodeFailed { detail: String },
}

/// A loaded value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub value: T,
    pub origin: LoadOrigin,
}

impl<T> Loaded<T> {
    pub fn is_stored(&self) -> bool {
        self.origin == LoadOrigin::Stored
    }
}

/// File-backed profile store. Every `save` rewrites the whole document.
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    entries: HashMap<String, Value>,
}

impl ProfileStore {
    /// Open a store at `path`. A missing file starts an empty store; a
    /// present but malformed file is a decode error, not a silent reset.
    pub fn open(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => return Err(error.into()),
        };
        Ok(ProfileStore { path, entries })
    }

    /// Load the value stored under `key`, falling back to `T::default()`.
    /// The returned origin says which branch was taken.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Loaded<T> {
        match self.entries.get(key) {
            None => Loaded {
                value: T::default(),
                origin: LoadOrigin::DefaultMissing,
            },
            Some(raw) => match serde_json::from_value(raw.clone()) {
                Ok(value) => Loaded {
                    value,
                    origin: LoadOrigin::Stored,
                },
                Err(error) => {
                    tracing::warn!(key, %error, "stored profile value failed to decode, using default");
                    Loaded {
                        value: T::default(),
                        origin: LoadOrigin::DefaultDecodeFailed {
                            detail: error.to_string(),
                        },
                    }
                }
            },
        }
    }

    /// Store a value under `key` and persist the document.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) -> ProfileResult<()> {
        self.entries
            .insert(key.to_string(), serde_json::to_value(value)?);
        self.persist()
    }

    /// Remove a key, persisting when something was actually removed.
    pub fn remove(&mut self, key: &str) -> ProfileResult<bool> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn persist(&self) -> ProfileResult<()> {
        let document = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, document)?;
        Ok(())
    }
}
