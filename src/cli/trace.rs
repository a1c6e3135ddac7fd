//! Trace command - replay recorded execution traces.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tez_orchestrator::run_traces;
use tez_trace::{load_traces, TraceKind};

use super::ToolchainContext;

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum TraceFormat {
    /// Tabular CSV sources.
    Csv,
    /// Structured JSON sources.
    Json,
}

impl From<TraceFormat> for TraceKind {
    fn from(format: TraceFormat) -> Self {
        match format {
            TraceFormat::Csv => TraceKind::Tabular,
            TraceFormat::Json => TraceKind::Structured,
        }
    }
}

#[derive(Debug, Parser)]
pub struct TraceCmd {
    /// Trace source directory (one file per contract).
    #[arg(long, default_value = "execution_traces")]
    pub dir: PathBuf,

    /// Trace source format.
    #[arg(long, value_enum, default_value_t = TraceFormat::Csv)]
    pub format: TraceFormat,
}

impl TraceCmd {
    pub fn execute(&self, ctx: &ToolchainContext) -> Result<()> {
        let traces = load_traces(self.format.into(), &self.dir)?;
        if traces.is_empty() {
            println!("no traces in {}; nothing to do", self.dir.display());
            return Ok(());
        }

        let signers = ctx.signers()?;
        let book = ctx.address_book()?;
        let sink = ctx.sink();

        let summary = run_traces(&ctx.client(), &signers, &book, &traces, &sink);
        println!(
            "steps: {}  succeeded: {}  failed: {}  skipped: {}",
            summary.steps_total, summary.succeeded, summary.failed, summary.skipped
        );
        println!(
            "reports: {} (append) / {} (latest)",
            ctx.report_csv.display(),
            ctx.report_json.display()
        );
        Ok(())
    }
}
