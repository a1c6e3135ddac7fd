//! The deployed-contract address book.
//!
//! A JSON object mapping contract name -> address, loaded fully into
//! memory and rewritten fully on update; there is no partial patch format.
//! Entries are created on first origination, overwritten on
//! re-origination, and never deleted here.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tez_types::ToolchainError;

#[derive(Debug, Clone)]
pub struct AddressBook {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl AddressBook {
    /// Load the address book. An absent file is an empty book (nothing has
    /// been originated yet); a corrupt file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read address book {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parse address book {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Resolve a contract name to its deployed address.
    pub fn lookup(&self, contract: &str) -> Result<&str, ToolchainError> {
        self.entries
            .get(contract)
            .map(String::as_str)
            .ok_or_else(|| ToolchainError::UnknownContract {
                contract: contract.to_string(),
            })
    }

    /// Insert or overwrite an entry. Callers persist with [`Self::save`].
    pub fn insert(&mut self, contract: impl Into<String>, address: impl Into<String>) {
        self.entries.insert(contract.into(), address.into());
    }

    /// Rewrite the whole file from the in-memory state.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let file = fs::File::create(&self.path)
            .with_context(|| format!("write address book {}", self.path.display()))?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.entries).context("serialize address book")?;
        writer.write_all(b"\n").ok();
        Ok(())
    }

    pub fn contracts(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
