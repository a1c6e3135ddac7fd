//! Trace intents: what a recorded step asks the toolchain to do.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One recorded transaction intent, before resolution.
///
/// `raw_params` are the untyped string tokens exactly as they appeared in
/// the trace source; the resolver coerces them against the entrypoint's
/// declared shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallIntent {
    pub entrypoint: String,
    /// Signer id, resolved against the wallet store at dispatch time.
    pub signer: String,
    pub raw_params: Vec<String>,
    /// Amount attached to the call, in mutez.
    pub amount: u64,
}

/// A labeled step within a contract's trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub label: String,
    pub intent: CallIntent,
}

/// Ordered steps for one contract. Step order is the insertion order of
/// the source rows/records and must be preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTrace {
    steps: Vec<TraceStep>,
}

impl ContractTrace {
    pub fn push(&mut self, label: impl Into<String>, intent: CallIntent) {
        self.steps.push(TraceStep {
            label: label.into(),
            intent,
        });
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// All loaded traces for one run: contract name -> ordered steps.
/// Ordering across contracts is insignificant.
pub type TraceSet = BTreeMap<String, ContractTrace>;

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(entrypoint: &str) -> CallIntent {
        CallIntent {
            entrypoint: entrypoint.to_string(),
            signer: "1".to_string(),
            raw_params: vec![],
            amount: 0,
        }
    }

    #[test]
    fn test_contract_trace_preserves_step_order() {
        let mut trace = ContractTrace::default();
        trace.push("step3", intent("a"));
        trace.push("step1", intent("b"));
        trace.push("step2", intent("c"));

        let labels: Vec<&str> = trace.steps().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["step3", "step1", "step2"]);
    }
}
