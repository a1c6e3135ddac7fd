//! The batch runner: loader output in, persisted reports out.
//!
//! Single-threaded and synchronous by design. Step-level errors are
//! caught here, logged with contract/step context, and the batch
//! continues; nothing is retried.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use tez_client::{ChainClient, SignerStore};
use tez_resolver::AddressBook;
use tez_types::{
    CallIntent, EntrypointSchema, ResultRecord, ToolchainError, TraceSet, TraceStep,
};

use crate::dispatch::dispatch;
use crate::sink::ReportSink;

/// Aggregate outcome of one orchestration run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub steps_total: usize,
    /// Dispatched and recorded with a real operation hash.
    pub succeeded: usize,
    /// Dispatched but rejected; recorded as a sentinel failed record.
    pub failed: usize,
    /// Never dispatched (resolution or signer lookup failed); not recorded.
    pub skipped: usize,
}

/// Execute every step of every loaded trace, in step order per contract.
///
/// The entrypoint schema is fetched once per contract and reused for all
/// of that contract's steps. A contract with no address book entry, or
/// whose schema cannot be fetched, has all its steps skipped; the other
/// contracts still run.
pub fn run_traces(
    client: &dyn ChainClient,
    signers: &SignerStore,
    address_book: &AddressBook,
    traces: &TraceSet,
    sink: &ReportSink,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for (contract, trace) in traces {
        summary.steps_total += trace.len();

        let address = match address_book.lookup(contract) {
            Ok(address) => address,
            Err(err) => {
                warn!(contract = %contract, %err, "skipping contract trace");
                summary.skipped += trace.len();
                continue;
            }
        };

        let schema = match client.entrypoint_schema(address) {
            Ok(schema) => schema,
            Err(err) => {
                warn!(contract = %contract, %err, "schema fetch failed; skipping contract trace");
                summary.skipped += trace.len();
                continue;
            }
        };

        for step in trace.steps() {
            run_step(client, signers, contract, address, &schema, step, sink, &mut summary);
        }
    }

    summary
}

#[allow(clippy::too_many_arguments)]
fn run_step(
    client: &dyn ChainClient,
    signers: &SignerStore,
    contract: &str,
    address: &str,
    schema: &EntrypointSchema,
    step: &TraceStep,
    sink: &ReportSink,
    summary: &mut RunSummary,
) {
    let result = tez_resolver::resolve(contract, address, &step.intent, schema)
        .and_then(|call| {
            let signer = signers.lookup(&step.intent.signer)?;
            dispatch(client, &call, &signer)
        });

    match result {
        Ok(record) => {
            info!(
                contract = %contract,
                step = %step.label,
                hash = %record.hash,
                "step dispatched"
            );
            sink.record(&record);
            summary.succeeded += 1;
        }
        Err(
            err @ (ToolchainError::InvocationFailed { .. } | ToolchainError::MalformedReceipt { .. }),
        ) => {
            warn!(contract = %contract, step = %step.label, %err, "step failed; recording failure");
            sink.record(&ResultRecord::failed(
                contract,
                &step.intent.entrypoint,
                err.kind(),
            ));
            summary.failed += 1;
        }
        Err(err) => {
            warn!(contract = %contract, step = %step.label, %err, "step skipped");
            summary.skipped += 1;
        }
    }
}

/// One-off interactive invocation: resolve and dispatch a single intent
/// outside any trace.
pub fn run_single(
    client: &dyn ChainClient,
    signers: &SignerStore,
    address_book: &AddressBook,
    contract: &str,
    intent: &CallIntent,
) -> Result<ResultRecord> {
    let address = address_book.lookup(contract)?;
    let schema = client
        .entrypoint_schema(address)
        .with_context(|| format!("fetch entrypoint schema for '{contract}'"))?;
    let call = tez_resolver::resolve(contract, address, intent, &schema)?;
    let signer = signers.lookup(&intent.signer)?;
    Ok(dispatch(client, &call, &signer)?)
}
