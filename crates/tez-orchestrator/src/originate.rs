//! Contract origination: deploy compiled artifacts and record the address.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use tez_client::{ChainClient, ContractArtifacts, SignerKey};
use tez_resolver::AddressBook;
use tez_types::ToolchainError;

/// Outcome of a successful origination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OriginationInfo {
    pub address: String,
    pub hash: String,
}

/// Originate a compiled contract and upsert the address book.
///
/// The address book entry is overwritten on re-origination; the book file
/// is rewritten whole after the update.
pub fn deploy_contract(
    client: &dyn ChainClient,
    artifacts: &ContractArtifacts,
    balance: u64,
    signer: &SignerKey,
    address_book: &mut AddressBook,
    contract: &str,
) -> Result<OriginationInfo> {
    let receipt = client
        .originate(artifacts, balance, signer)
        .with_context(|| format!("originate contract '{contract}'"))?;

    let address = receipt
        .field_str("address")
        .ok_or_else(|| ToolchainError::MalformedReceipt {
            field: "address".to_string(),
        })?
        .to_string();
    let hash = receipt
        .field_str("hash")
        .ok_or_else(|| ToolchainError::MalformedReceipt {
            field: "hash".to_string(),
        })?
        .to_string();

    address_book.insert(contract, address.clone());
    address_book
        .save()
        .with_context(|| format!("record address for '{contract}'"))?;

    info!(contract = %contract, address = %address, hash = %hash, "contract originated");
    Ok(OriginationInfo { address, hash })
}
