//! Intent resolution: address lookup, entrypoint validation, and
//! positional parameter shaping.
//!
//! The resolver turns a raw [`CallIntent`] into a [`ResolvedCall`] the
//! dispatcher can submit as-is. It is read-only: the only external input
//! is the entrypoint schema, which the runner fetches once per contract
//! and reuses for all of that contract's steps.

pub mod address_book;

pub use address_book::AddressBook;

use tez_types::{
    CallIntent, EntrypointSchema, FieldKind, ParamPayload, ParamShape, ParamValue, ResolvedCall,
    ToolchainError,
};

/// Resolve one intent against a contract's address and fetched schema.
///
/// Fails with `UnknownEntrypoint` when the entrypoint is absent from the
/// schema, and `ParameterShapeMismatch` when the raw tokens cannot be
/// coerced into the declared shape.
pub fn resolve(
    contract: &str,
    address: &str,
    intent: &CallIntent,
    schema: &EntrypointSchema,
) -> Result<ResolvedCall, ToolchainError> {
    let shape = schema
        .get(&intent.entrypoint)
        .ok_or_else(|| ToolchainError::UnknownEntrypoint {
            contract: contract.to_string(),
            entrypoint: intent.entrypoint.clone(),
        })?;

    let payload = shape_params(contract, &intent.entrypoint, shape, &intent.raw_params)?;

    Ok(ResolvedCall {
        contract: contract.to_string(),
        address: address.to_string(),
        entrypoint: intent.entrypoint.clone(),
        payload,
        amount: intent.amount,
        signer: intent.signer.clone(),
    })
}

fn mismatch(contract: &str, entrypoint: &str, reason: String) -> ToolchainError {
    ToolchainError::ParameterShapeMismatch {
        contract: contract.to_string(),
        entrypoint: entrypoint.to_string(),
        reason,
    }
}

/// Coerce raw tokens against a declared shape, left to right.
fn shape_params(
    contract: &str,
    entrypoint: &str,
    shape: &ParamShape,
    raw_params: &[String],
) -> Result<ParamPayload, ToolchainError> {
    match shape {
        ParamShape::Unit => {
            if raw_params.is_empty() {
                Ok(ParamPayload::Unit)
            } else {
                Err(mismatch(
                    contract,
                    entrypoint,
                    format!(
                        "entrypoint takes no parameters but {} were supplied",
                        raw_params.len()
                    ),
                ))
            }
        }
        ParamShape::Fields(kinds) => {
            if raw_params.len() != kinds.len() {
                return Err(mismatch(
                    contract,
                    entrypoint,
                    format!(
                        "expected {} parameters, got {}",
                        kinds.len(),
                        raw_params.len()
                    ),
                ));
            }
            let mut values = Vec::with_capacity(kinds.len());
            for (position, (kind, token)) in kinds.iter().zip(raw_params).enumerate() {
                let value = coerce(*kind, token).map_err(|reason| {
                    mismatch(
                        contract,
                        entrypoint,
                        format!("parameter {}: {}", position + 1, reason),
                    )
                })?;
                values.push(value);
            }
            Ok(ParamPayload::Values(values))
        }
    }
}

/// Coerce a single token into a typed value.
fn coerce(kind: FieldKind, token: &str) -> Result<ParamValue, String> {
    match kind {
        FieldKind::Nat => token
            .parse::<u64>()
            .map(ParamValue::Nat)
            .map_err(|_| format!("'{token}' is not a nat")),
        FieldKind::Int => token
            .parse::<i64>()
            .map(ParamValue::Int)
            .map_err(|_| format!("'{token}' is not an int")),
        FieldKind::Mutez => token
            .parse::<u64>()
            .map(ParamValue::Mutez)
            .map_err(|_| format!("'{token}' is not a mutez amount")),
        FieldKind::Bool => match token {
            "true" | "True" => Ok(ParamValue::Bool(true)),
            "false" | "False" => Ok(ParamValue::Bool(false)),
            _ => Err(format!("'{token}' is not a bool")),
        },
        FieldKind::String => Ok(ParamValue::Text(token.to_string())),
        FieldKind::Address => {
            if token.is_empty() {
                Err("empty address".to_string())
            } else {
                Ok(ParamValue::Address(token.to_string()))
            }
        }
    }
}
