//! CLI subcommand implementations for tez-toolchain.

pub mod compile;
pub mod deploy;
pub mod invoke;
pub mod list;
pub mod trace;

use std::path::PathBuf;

use anyhow::Result;
use tez_client::{HttpChainClient, SignerStore};
use tez_orchestrator::ReportSink;
use tez_resolver::AddressBook;

/// Resolved global options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct ToolchainContext {
    pub endpoint: String,
    pub contracts_dir: PathBuf,
    pub wallet: PathBuf,
    pub address_book: PathBuf,
    pub report_csv: PathBuf,
    pub report_json: PathBuf,
}

impl ToolchainContext {
    pub fn client(&self) -> HttpChainClient {
        HttpChainClient::new(&self.endpoint)
    }

    pub fn signers(&self) -> Result<SignerStore> {
        SignerStore::load(&self.wallet)
    }

    pub fn address_book(&self) -> Result<AddressBook> {
        AddressBook::load(&self.address_book)
    }

    pub fn sink(&self) -> ReportSink {
        ReportSink::new(&self.report_csv, &self.report_json)
    }
}
