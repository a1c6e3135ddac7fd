//! Resolved calls, operation receipts, and normalized result records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shape::ParamPayload;

/// A trace intent after resolution: target address known, entrypoint
/// validated, parameters coerced. Transient; consumed by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCall {
    pub contract: String,
    pub address: String,
    pub entrypoint: String,
    pub payload: ParamPayload,
    /// Amount attached to the call, in mutez.
    pub amount: u64,
    /// Signer id; the dispatcher looks the key up at call time.
    pub signer: String,
}

/// Raw operation receipt as returned by the chain client capability.
///
/// Kept loosely typed on purpose: the dispatcher extracts the fields it
/// needs by a fixed mapping and fails with `MalformedReceipt` on absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt(pub Value);

impl Receipt {
    pub fn field_u64(&self, field: &str) -> Option<u64> {
        self.0.get(field).and_then(Value::as_u64)
    }

    pub fn field_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }
}

/// Normalized outcome of one dispatched call. Immutable once produced.
///
/// `total_cost` is fee + burn, `weight` is gas + storage, both in minor
/// units. Failed dispatches are recorded as sentinel records with zero
/// cost/weight and a `failed:<kind>` hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub contract: String,
    pub entry_point: String,
    pub total_cost: u64,
    pub weight: u64,
    pub hash: String,
}

impl ResultRecord {
    /// Sentinel record for a step whose dispatch failed. Keeps the failure
    /// visible in both reports instead of silently dropping the step.
    pub fn failed(contract: &str, entry_point: &str, kind: &str) -> Self {
        Self {
            contract: contract.to_string(),
            entry_point: entry_point.to_string(),
            total_cost: 0,
            weight: 0,
            hash: format!("failed:{kind}"),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.hash.starts_with("failed:")
    }
}
