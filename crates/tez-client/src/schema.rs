//! Wire decoding of entrypoint schemas.
//!
//! The gateway normalizes on-chain parameter types to a compact JSON form:
//! `"unit"` for parameterless entrypoints, or an array of field kind names
//! (`["nat", "address"]`) for structured ones.

use anyhow::{anyhow, Result};
use serde_json::Value;
use tez_types::{EntrypointSchema, FieldKind, ParamShape};

/// Decode a schema response body into an [`EntrypointSchema`].
pub fn parse_schema(value: &Value) -> Result<EntrypointSchema> {
    let object = value
        .as_object()
        .ok_or_else(|| anyhow!("schema response is not a JSON object"))?;

    let mut schema = EntrypointSchema::new();
    for (entrypoint, shape) in object {
        schema.insert(entrypoint.clone(), parse_shape(entrypoint, shape)?);
    }
    Ok(schema)
}

fn parse_shape(entrypoint: &str, value: &Value) -> Result<ParamShape> {
    match value {
        Value::String(s) if s == "unit" => Ok(ParamShape::Unit),
        Value::Array(items) => {
            let mut kinds = Vec::with_capacity(items.len());
            for item in items {
                let name = item.as_str().ok_or_else(|| {
                    anyhow!("entrypoint '{}': field kind is not a string", entrypoint)
                })?;
                let kind = FieldKind::parse(name).ok_or_else(|| {
                    anyhow!("entrypoint '{}': unknown field kind '{}'", entrypoint, name)
                })?;
                kinds.push(kind);
            }
            Ok(ParamShape::Fields(kinds))
        }
        other => Err(anyhow!(
            "entrypoint '{}': unsupported shape encoding {}",
            entrypoint,
            other
        )),
    }
}
