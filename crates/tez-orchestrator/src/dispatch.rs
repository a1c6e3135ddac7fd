//! Call dispatch and receipt normalization.

use tez_client::{ChainClient, SignerKey};
use tez_types::{Receipt, ResolvedCall, ResultRecord, ToolchainError};

/// Submit one resolved call and normalize its receipt.
///
/// Any client rejection (insufficient balance, contract runtime failure,
/// network error) surfaces as `InvocationFailed`; no automatic retry.
pub fn dispatch(
    client: &dyn ChainClient,
    call: &ResolvedCall,
    signer: &SignerKey,
) -> Result<ResultRecord, ToolchainError> {
    let receipt = client
        .invoke(
            &call.address,
            &call.entrypoint,
            call.payload.values(),
            call.amount,
            signer,
        )
        .map_err(|e| ToolchainError::InvocationFailed {
            contract: call.contract.clone(),
            entrypoint: call.entrypoint.clone(),
            reason: e.to_string(),
        })?;

    normalize_receipt(&call.contract, &call.entrypoint, &receipt)
}

/// Normalize a raw receipt by the fixed field mapping:
/// `total_cost = fee + burn`, `weight = gas + storage`, `hash` verbatim.
pub fn normalize_receipt(
    contract: &str,
    entrypoint: &str,
    receipt: &Receipt,
) -> Result<ResultRecord, ToolchainError> {
    let required_u64 = |field: &str| {
        receipt
            .field_u64(field)
            .ok_or_else(|| ToolchainError::MalformedReceipt {
                field: field.to_string(),
            })
    };

    let fee = required_u64("fee")?;
    let burn = required_u64("burn")?;
    let gas = required_u64("gas")?;
    let storage = required_u64("storage")?;
    let hash = receipt
        .field_str("hash")
        .ok_or_else(|| ToolchainError::MalformedReceipt {
            field: "hash".to_string(),
        })?;

    Ok(ResultRecord {
        contract: contract.to_string(),
        entry_point: entrypoint.to_string(),
        total_cost: fee + burn,
        weight: gas + storage,
        hash: hash.to_string(),
    })
}
