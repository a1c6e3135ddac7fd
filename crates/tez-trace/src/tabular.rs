//! Tabular (CSV) trace parsing.
//!
//! Row layout: `label, entrypoint, signer, param..., amount`. The
//! parameter span is derived — everything between the two fixed leading
//! columns and the fixed trailing amount column — so a four-column row has
//! no parameters.

use std::path::Path;

use tez_types::{CallIntent, ContractTrace, ToolchainError};

fn format_err(path: &Path, reason: impl Into<String>) -> ToolchainError {
    ToolchainError::TraceFormat {
        file: path.display().to_string(),
        reason: reason.into(),
    }
}

pub fn parse_file(path: &Path) -> Result<ContractTrace, ToolchainError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| format_err(path, e.to_string()))?;

    let mut trace = ContractTrace::default();
    for (row_index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format_err(path, e.to_string()))?;

        // Blank lines surface as a single empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() < 4 {
            return Err(format_err(
                path,
                format!(
                    "row {}: expected at least label, entrypoint, signer, amount ({} columns found)",
                    row_index + 1,
                    record.len()
                ),
            ));
        }

        let label = record[0].to_string();
        let entrypoint = record[1].to_string();
        if entrypoint.is_empty() {
            return Err(format_err(
                path,
                format!("row {}: empty entrypoint name", row_index + 1),
            ));
        }
        let signer = record[2].to_string();

        let amount_token = &record[record.len() - 1];
        let amount: u64 = amount_token.parse().map_err(|_| {
            format_err(
                path,
                format!(
                    "row {}: amount '{}' is not a non-negative integer",
                    row_index + 1,
                    amount_token
                ),
            )
        })?;

        let raw_params: Vec<String> = (3..record.len() - 1)
            .map(|i| record[i].to_string())
            .collect();

        trace.push(
            label,
            CallIntent {
                entrypoint,
                signer,
                raw_params,
                amount,
            },
        );
    }
    Ok(trace)
}
