//! Execution trace orchestration.
//!
//! Ties the pipeline together: resolved intents are dispatched one at a
//! time through the chain-client capability, receipts are normalized into
//! [`tez_types::ResultRecord`]s, and every record lands in two durable
//! reports. Dispatch is strictly sequential — on-chain effect order must
//! match the trace's declared intent, and the signing identity may be
//! nonce-sensitive.

pub mod dispatch;
pub mod originate;
pub mod run;
pub mod sink;

pub use dispatch::{dispatch, normalize_receipt};
pub use originate::{deploy_contract, OriginationInfo};
pub use run::{run_single, run_traces, RunSummary};
pub use sink::ReportSink;
