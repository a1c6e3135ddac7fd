//! Execution trace loading.
//!
//! Traces come in two source kinds — tabular CSV rows or structured JSON
//! records — and both normalize to the same [`TraceSet`] shape so the rest
//! of the pipeline is format-agnostic. Loading is a pure parse: no I/O
//! beyond reading the source files, and per-file failures never abort the
//! other sources.

pub mod params;
pub mod scan;
mod structured;
mod tabular;

use std::path::Path;

use tracing::warn;

use tez_types::{ContractTrace, ToolchainError, TraceSet};

pub use params::split_raw_params;
pub use scan::{contract_names, trace_files};

/// Accepted trace source kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// One CSV file per contract: `label, entrypoint, signer, param..., amount`.
    Tabular,
    /// One JSON file per contract: object of label -> intent record.
    Structured,
}

impl TraceKind {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Tabular => "csv",
            Self::Structured => "json",
        }
    }
}

/// Load all traces of one kind from a source directory.
///
/// The filename sans extension is the contract name. A missing or
/// unreadable directory is [`ToolchainError::TraceSourceNotFound`]; an
/// existing directory with no matching files yields an empty set (nothing
/// to do). A malformed file is logged and skips only that contract.
pub fn load_traces(kind: TraceKind, dir: &Path) -> Result<TraceSet, ToolchainError> {
    let mut set = TraceSet::new();
    for path in trace_files(dir, kind.extension())? {
        let Some(contract) = path.file_stem().and_then(|s| s.to_str()).map(String::from) else {
            continue;
        };
        match load_trace_file(kind, &path) {
            Ok(trace) => {
                set.insert(contract, trace);
            }
            Err(err) => {
                warn!(contract = %contract, %err, "skipping malformed trace source");
            }
        }
    }
    Ok(set)
}

/// Parse a single trace file. Exposed separately so format errors stay
/// observable to callers and tests.
pub fn load_trace_file(kind: TraceKind, path: &Path) -> Result<ContractTrace, ToolchainError> {
    match kind {
        TraceKind::Tabular => tabular::parse_file(path),
        TraceKind::Structured => structured::parse_file(path),
    }
}
