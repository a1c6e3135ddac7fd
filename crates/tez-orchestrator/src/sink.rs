//! The result sink: two durable report views with divergent retention.
//!
//! - Tabular report: strict CSV append, one row per call, full history
//!   across runs (the audit trail).
//! - Structured report: JSON object keyed by contract, last-write-wins,
//!   whole-file rewrite (the latest-state view).
//!
//! Persistence errors are logged and swallowed: a reporting failure must
//! never be conflated with a chain-call failure, and never unwinds the
//! batch.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::warn;

use tez_types::ResultRecord;

#[derive(Debug, Clone)]
pub struct ReportSink {
    csv_path: PathBuf,
    json_path: PathBuf,
}

impl ReportSink {
    pub fn new(csv_path: impl Into<PathBuf>, json_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            json_path: json_path.into(),
        }
    }

    /// Persist one record into both reports. Never fails the run.
    pub fn record(&self, record: &ResultRecord) {
        if let Err(err) = self.append_tabular(record) {
            warn!(
                contract = %record.contract,
                report = %self.csv_path.display(),
                %err,
                "tabular report write failed"
            );
        }
        if let Err(err) = self.upsert_structured(record) {
            warn!(
                contract = %record.contract,
                report = %self.json_path.display(),
                %err,
                "structured report write failed"
            );
        }
    }

    /// Append `[contract, entry_point, total_cost, weight, hash]` as one
    /// CSV row. No header, no deduplication.
    fn append_tabular(&self, record: &ResultRecord) -> Result<()> {
        ensure_parent(&self.csv_path)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("open {}", self.csv_path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        let total_cost = record.total_cost.to_string();
        let weight = record.weight.to_string();
        writer.write_record([
            record.contract.as_str(),
            record.entry_point.as_str(),
            total_cost.as_str(),
            weight.as_str(),
            record.hash.as_str(),
        ])?;
        writer.flush()?;
        Ok(())
    }

    /// Read-modify-write the structured report. An absent or corrupt prior
    /// file is the empty base state, not an error.
    fn upsert_structured(&self, record: &ResultRecord) -> Result<()> {
        let mut entries: Map<String, Value> = fs::read_to_string(&self.json_path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        entries.insert(
            record.contract.clone(),
            serde_json::json!({
                "Entrypoint": record.entry_point,
                "TotalCost": record.total_cost,
                "Weight": record.weight,
                "Hash": record.hash,
            }),
        );

        ensure_parent(&self.json_path)?;
        let file = fs::File::create(&self.json_path)
            .with_context(|| format!("write {}", self.json_path.display()))?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &entries).context("serialize report")?;
        writer.write_all(b"\n").ok();
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}
