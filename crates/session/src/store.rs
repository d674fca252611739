//! Persisted credential storage.
//!
//! A single slot holds the serialized Identity; absence means logged out.
//! Reads are defensive: a corrupt or unreadable blob resolves to "absent"
//! rather than propagating a parse failure.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::identity::Identity;

/// Process-wide holder of the current session credential.
///
/// `save` and `clear` are atomic replacements; a reader never observes a
/// half-updated Identity. Failures are logged and swallowed — the store
/// behaves like its browser-storage counterpart and never panics a caller.
pub trait CredentialStore: Send + Sync {
    /// Persist the identity, overwriting any prior value.
    fn save(&self, identity: &Identity);

    /// Remove the persisted identity unconditionally. Idempotent.
    fn clear(&self);

    /// The current identity, or `None` when logged out or when the persisted
    /// value is corrupt. Never fails.
    fn read(&self) -> Option<Identity>;
}

/// File-backed store surviving process restarts.
///
/// The blob lives at `{data_dir}/videoclub/session.json`. Writes go through
/// a temp file followed by a rename so the slot is replaced atomically.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Open the store at the OS-conventional location, creating the parent
    /// directory if needed.
    pub fn open_default() -> io::Result<Self> {
        let path = default_session_path().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no OS data directory available")
        })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Open the store at an explicit path (tests, embeddings).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write_atomically(&self, payload: &str) -> io::Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)
    }
}

impl CredentialStore for FileCredentialStore {
    fn save(&self, identity: &Identity) {
        let payload = match serde_json::to_string(identity) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!("failed to serialize identity: {err}");
                return;
            }
        };
        if let Err(err) = self.write_atomically(&payload) {
            tracing::error!("failed to persist session at {:?}: {err}", self.path);
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!("failed to clear session at {:?}: {err}", self.path),
        }
    }

    fn read(&self) -> Option<Identity> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!("failed to read session at {:?}: {err}", self.path);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(err) => {
                // Corrupt blob: treat as logged out. The next save overwrites it.
                tracing::warn!("corrupt session blob at {:?}: {err}", self.path);
                None
            }
        }
    }
}

/// In-memory store for tests and non-persistent embeddings.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<Identity>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, identity: &Identity) {
        *self.slot.lock().expect("credential slot poisoned") = Some(identity.clone());
    }

    fn clear(&self) {
        *self.slot.lock().expect("credential slot poisoned") = None;
    }

    fn read(&self) -> Option<Identity> {
        self.slot.lock().expect("credential slot poisoned").clone()
    }
}

/// `{data_dir}/videoclub/session.json`, with a `~/.local/share` fallback.
fn default_session_path() -> Option<PathBuf> {
    let base = dirs::data_dir().or_else(|| {
        dirs::home_dir().map(|mut home| {
            home.push(".local");
            home.push("share");
            home
        })
    })?;
    let mut path = base;
    path.push("videoclub");
    path.push("session.json");
    Some(path)
}
