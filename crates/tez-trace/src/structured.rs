//! Structured (JSON) trace parsing.
//!
//! One file per contract: an object mapping step label -> intent record
//! with explicit `entrypoint`, `wallet`, optional `parameters`, `amount`
//! fields. Document order of the labels is the step order.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tez_types::{CallIntent, ContractTrace, ToolchainError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStep {
    entrypoint: String,
    wallet: String,
    #[serde(default)]
    parameters: Vec<String>,
    amount: u64,
}

fn format_err(path: &Path, reason: impl Into<String>) -> ToolchainError {
    ToolchainError::TraceFormat {
        file: path.display().to_string(),
        reason: reason.into(),
    }
}

pub fn parse_file(path: &Path) -> Result<ContractTrace, ToolchainError> {
    let raw = std::fs::read_to_string(path).map_err(|e| format_err(path, e.to_string()))?;
    let value: Value = serde_json::from_str(&raw).map_err(|e| format_err(path, e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| format_err(path, "top level is not an object of steps"))?;

    let mut trace = ContractTrace::default();
    for (label, step_value) in object {
        let step: RawStep = serde_json::from_value(step_value.clone())
            .map_err(|e| format_err(path, format!("step '{}': {}", label, e)))?;
        if step.entrypoint.is_empty() {
            return Err(format_err(path, format!("step '{}': empty entrypoint", label)));
        }
        trace.push(
            label.clone(),
            CallIntent {
                entrypoint: step.entrypoint,
                signer: step.wallet,
                raw_params: step.parameters,
                amount: step.amount,
            },
        );
    }
    Ok(trace)
}
