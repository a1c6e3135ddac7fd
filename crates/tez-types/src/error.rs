//! Closed error taxonomy for the toolchain.
//!
//! Every failure mode the orchestrator distinguishes gets its own variant
//! carrying the contract/step context needed for diagnostics. Step-level
//! variants are caught at the batch boundary; none of them abort a run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolchainError {
    /// The trace source directory is missing or unreadable.
    #[error("trace source not found: {dir}")]
    TraceSourceNotFound { dir: String },

    /// A single trace file could not be parsed. Aborts only that
    /// contract's trace, not the other sources.
    #[error("malformed trace file {file}: {reason}")]
    TraceFormat { file: String, reason: String },

    /// The contract has no entry in the address book.
    #[error("contract '{contract}' has no recorded address (deploy it first)")]
    UnknownContract { contract: String },

    /// The requested entrypoint is absent from the on-chain schema.
    #[error("contract '{contract}' has no entrypoint '{entrypoint}'")]
    UnknownEntrypoint { contract: String, entrypoint: String },

    /// The raw parameter tokens cannot be coerced into the declared shape.
    #[error("parameters for '{contract}.{entrypoint}' do not match the declared shape: {reason}")]
    ParameterShapeMismatch {
        contract: String,
        entrypoint: String,
        reason: String,
    },

    /// No key is registered under the requested signer id.
    #[error("no signer registered under id '{id}'")]
    UnknownSigner { id: String },

    /// The chain client rejected the call (balance, runtime failure,
    /// network error). Recorded as a failed result, never silently dropped.
    #[error("call to '{contract}.{entrypoint}' failed: {reason}")]
    InvocationFailed {
        contract: String,
        entrypoint: String,
        reason: String,
    },

    /// The operation receipt lacks a field the fixed normalization needs.
    #[error("operation receipt is missing required field '{field}'")]
    MalformedReceipt { field: String },
}

impl ToolchainError {
    /// Short stable code for a variant, used in failure sentinel records.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TraceSourceNotFound { .. } => "trace-source-not-found",
            Self::TraceFormat { .. } => "trace-format",
            Self::UnknownContract { .. } => "unknown-contract",
            Self::UnknownEntrypoint { .. } => "unknown-entrypoint",
            Self::ParameterShapeMismatch { .. } => "parameter-shape-mismatch",
            Self::UnknownSigner { .. } => "unknown-signer",
            Self::InvocationFailed { .. } => "invocation-failed",
            Self::MalformedReceipt { .. } => "malformed-receipt",
        }
    }
}
