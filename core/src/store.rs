//! Local key-value store backing the legacy offline-auth path.
//!
//! Holds a directory of registered users keyed by email, a per-email
//! one-time password, and the currently-logged-in email marker. Persisted
//! as a single JSON file; the in-memory variant backs tests. Only the auth
//! repository touches this — the mapper and safe-call adapter never do.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A registered user as remembered locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    users: HashMap<String, StoredUser>,
    otp: HashMap<String, String>,
    current_email: Option<String>,
}

/// JSON-file-backed key-value store.
#[derive(Debug)]
pub struct LocalStore {
    path: Option<PathBuf>,
    data: RwLock<StoreData>,
}

impl LocalStore {
    /// Volatile store for tests and environments without a writable disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(StoreData::default()),
        }
    }

    /// Open (or create on first write) the store file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: Some(path),
            data: RwLock::new(data),
        })
    }

    pub fn put_user(&self, user: StoredUser) -> Result<(), StoreError> {
        self.mutate(|data| {
            data.users.insert(user.email.clone(), user);
        })
    }

    pub fn user(&self, email: &str) -> Option<StoredUser> {
        self.read(|data| data.users.get(email).cloned())
    }

    pub fn set_otp(&self, email: &str, code: &str) -> Result<(), StoreError> {
        self.mutate(|data| {
            data.otp.insert(email.to_string(), code.to_string());
        })
    }

    /// Check the one-time password for `email`, consuming it on a match.
    pub fn verify_otp(&self, email: &str, code: &str) -> bool {
        let matched = self.read(|data| data.otp.get(email).map(|c| c == code));
        if matched == Some(true) {
            // Consumption failing to persist leaves a stale code; the
            // in-memory state is already correct.
            let _ = self.mutate(|data| {
                data.otp.remove(email);
            });
            return true;
        }
        false
    }

    pub fn set_current_email(&self, email: Option<&str>) -> Result<(), StoreError> {
        self.mutate(|data| {
            data.current_email = email.map(str::to_string);
        })
    }

    pub fn current_email(&self) -> Option<String> {
        self.read(|data| data.current_email.clone())
    }

    fn read<R>(&self, f: impl FnOnce(&StoreData) -> R) -> R {
        f(&self.data.read().unwrap_or_else(|e| e.into_inner()))
    }

    fn mutate(&self, f: impl FnOnce(&mut StoreData)) -> Result<(), StoreError> {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        f(&mut data);
        self.persist(&data)
    }

    fn persist(&self, data: &StoreData) -> Result<(), StoreError> {
        if let Some(path) = &self.path {
            std::fs::write(path, serde_json::to_string_pretty(data)?)?;
        }
        Ok(())
    }
}
