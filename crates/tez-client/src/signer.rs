//! Wallet/signer store: signer id -> secret key.
//!
//! The store is a flat JSON object loaded fully into memory. Ids are small
//! integers or short strings chosen by the operator; traces reference
//! signers by id only, never by key material.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tez_types::ToolchainError;

/// A signing identity handle. The secret is deliberately excluded from
/// `Debug` output so keys never end up in logs.
#[derive(Clone)]
pub struct SignerKey {
    pub id: String,
    secret: String,
}

impl SignerKey {
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for SignerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerKey")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// In-memory view of the wallet file.
#[derive(Debug, Clone, Default)]
pub struct SignerStore {
    entries: BTreeMap<String, String>,
}

impl SignerStore {
    /// Load the wallet file (JSON object of id -> secret key).
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read wallet file {}", path.display()))?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw)
            .with_context(|| format!("parse wallet file {}", path.display()))?;
        Ok(Self { entries })
    }

    pub fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Look a signer up by id.
    pub fn lookup(&self, id: &str) -> Result<SignerKey, ToolchainError> {
        self.entries
            .get(id)
            .map(|secret| SignerKey::new(id, secret))
            .ok_or_else(|| ToolchainError::UnknownSigner { id: id.to_string() })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
