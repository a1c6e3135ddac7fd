//! Entrypoint parameter shapes and typed parameter values.
//!
//! An entrypoint either takes no parameter (`Unit`) or an ordered list of
//! typed fields. Shapes come from on-chain schema introspection and are
//! matched positionally against the raw string tokens of a trace step;
//! there is no named binding and no runtime reflection.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Schema for one contract: entrypoint name -> declared parameter shape.
///
/// Fetched once per contract per run and treated as read-only.
pub type EntrypointSchema = BTreeMap<String, ParamShape>;

/// The kind of a single parameter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Nat,
    Int,
    Mutez,
    String,
    Address,
    Bool,
}

impl FieldKind {
    /// Parse a wire-format kind name (`"nat"`, `"address"`, ...).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "nat" => Some(Self::Nat),
            "int" => Some(Self::Int),
            "mutez" => Some(Self::Mutez),
            "string" => Some(Self::String),
            "address" => Some(Self::Address),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nat => "nat",
            Self::Int => "int",
            Self::Mutez => "mutez",
            Self::String => "string",
            Self::Address => "address",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared parameter shape of one entrypoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamShape {
    /// No parameter. Any supplied token is a shape mismatch.
    Unit,
    /// Ordered list of typed fields, matched positionally.
    Fields(Vec<FieldKind>),
}

impl ParamShape {
    /// Number of tokens this shape expects.
    pub fn arity(&self) -> usize {
        match self {
            Self::Unit => 0,
            Self::Fields(kinds) => kinds.len(),
        }
    }
}

/// A coerced parameter value, typed per its declared [`FieldKind`].
///
/// Serializes untagged so the wire payload is plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Nat(u64),
    Int(i64),
    Mutez(u64),
    Bool(bool),
    Text(String),
    Address(String),
}

/// Validated parameter payload of a resolved call.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamPayload {
    Unit,
    Values(Vec<ParamValue>),
}

impl ParamPayload {
    /// The payload as a value slice; `Unit` is the empty slice.
    pub fn values(&self) -> &[ParamValue] {
        match self {
            Self::Unit => &[],
            Self::Values(values) => values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_roundtrip() {
        for name in ["nat", "int", "mutez", "string", "address", "bool"] {
            let kind = FieldKind::parse(name).unwrap();
            assert_eq!(kind.as_str(), name);
        }
        assert_eq!(FieldKind::parse("operation"), None);
    }

    #[test]
    fn test_shape_arity() {
        assert_eq!(ParamShape::Unit.arity(), 0);
        assert_eq!(
            ParamShape::Fields(vec![FieldKind::Nat, FieldKind::Address]).arity(),
            2
        );
    }

    #[test]
    fn test_param_value_serializes_as_scalar() {
        assert_eq!(
            serde_json::to_value(ParamValue::Nat(42)).unwrap(),
            serde_json::json!(42)
        );
        assert_eq!(
            serde_json::to_value(ParamValue::Address("tz1abc".to_string())).unwrap(),
            serde_json::json!("tz1abc")
        );
        assert_eq!(
            serde_json::to_value(ParamValue::Bool(true)).unwrap(),
            serde_json::json!(true)
        );
    }

    #[test]
    fn test_unit_payload_has_no_values() {
        assert!(ParamPayload::Unit.values().is_empty());
    }
}
