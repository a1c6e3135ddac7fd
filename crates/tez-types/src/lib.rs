//! Shared types for the tez-toolchain workspace.
//!
//! This crate is the vocabulary every other crate speaks: trace intents,
//! entrypoint parameter shapes, resolved calls, operation receipts, result
//! records, and the closed error enumeration.

pub mod error;
pub mod intent;
pub mod record;
pub mod shape;

pub use error::ToolchainError;
pub use intent::{CallIntent, ContractTrace, TraceSet, TraceStep};
pub use record::{Receipt, ResolvedCall, ResultRecord};
pub use shape::{EntrypointSchema, FieldKind, ParamPayload, ParamShape, ParamValue};
