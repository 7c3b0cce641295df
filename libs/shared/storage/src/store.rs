//! File-backed key-value store for whole JSON documents. Single writer by
//! assumption: every mutation is read-document, modify, write-document with
//! last-write-wins semantics.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use shared_config::AppConfig;

use crate::crypto::{self, CryptoEnvelope};
use crate::keys;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("encryption failed for document '{0}'")]
    Encrypt(String),
}

#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
    passphrase: String,
}

impl Store {
    pub fn open(config: &AppConfig) -> Result<Self, StorageError> {
        fs::create_dir_all(&config.data_dir)?;
        Ok(Self {
            root: config.data_dir.clone(),
            passphrase: config.encryption_key.clone(),
        })
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// Read a named document, or `default` when it is missing or unreadable.
    ///
    /// Encrypted documents that fail to decrypt are re-parsed as plaintext
    /// JSON: a one-way migration shim for data written before encryption was
    /// introduced. Once re-saved, a document is always encrypted. Corruption
    /// never surfaces as an error here; the caller just sees `default`.
    pub fn get_document<T: DeserializeOwned>(&self, name: &str, default: T) -> T {
        let Ok(raw) = fs::read_to_string(self.path_for(name)) else {
            return default;
        };

        let text = if keys::is_encrypted(name) {
            match serde_json::from_str::<CryptoEnvelope>(&raw)
                .ok()
                .and_then(|envelope| crypto::decrypt_envelope(&envelope, &self.passphrase))
            {
                Some(plain) => plain,
                None => {
                    debug!("document '{}' is not decryptable, trying plaintext", name);
                    raw
                }
            }
        } else {
            raw
        };

        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                warn!("document '{}' unparseable ({}), using default", name, err);
                default
            }
        }
    }

    pub fn set_document<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        let content = if keys::is_encrypted(name) {
            let envelope = crypto::encrypt_text(&json, &self.passphrase)
                .ok_or_else(|| StorageError::Encrypt(name.to_string()))?;
            serde_json::to_string(&envelope)?
        } else {
            json
        };
        fs::write(self.path_for(name), content)?;
        Ok(())
    }

    /// Return the current value of a counter (starting at 1) and persist the
    /// increment. Safe only under the single-writer assumption.
    pub fn next_id(&self, counter: &str) -> Result<i64, StorageError> {
        let id = self.get_document(counter, 1i64).max(1);
        self.set_document(counter, &(id + 1))?;
        Ok(id)
    }
}
