//! Chain-client capability boundary.
//!
//! The orchestrator never talks to the chain directly: everything that
//! involves signing, fee computation, or the node wire protocol sits behind
//! the [`ChainClient`] trait. The production implementation
//! ([`HttpChainClient`]) forwards each operation as JSON over HTTP to a
//! signing-capable client gateway; tests substitute their own impls.

pub mod compile;
pub mod http;
pub mod schema;
pub mod signer;

use anyhow::Result;
use tez_types::{EntrypointSchema, ParamValue, Receipt};

pub use compile::{compile_contract, ContractArtifacts};
pub use http::HttpChainClient;
pub use signer::{SignerKey, SignerStore};

/// The opaque chain-client capability.
///
/// All operations are synchronous; the orchestrator blocks on each call
/// before moving to the next step. Retry policy, if any, belongs to the
/// implementation, not to the orchestrator.
pub trait ChainClient {
    /// Fetch the entrypoint schema of a deployed contract.
    ///
    /// Fetched once per contract per run; never cached across runs, since
    /// the on-chain schema is authoritative.
    fn entrypoint_schema(&self, address: &str) -> Result<EntrypointSchema>;

    /// Invoke an entrypoint with coerced parameters and an attached amount
    /// (mutez), signed by `signer`.
    fn invoke(
        &self,
        address: &str,
        entrypoint: &str,
        params: &[ParamValue],
        amount: u64,
        signer: &SignerKey,
    ) -> Result<Receipt>;

    /// Originate a compiled contract with an initial balance (mutez).
    fn originate(
        &self,
        artifacts: &ContractArtifacts,
        balance: u64,
        signer: &SignerKey,
    ) -> Result<Receipt>;
}
