//! Batch runner integration tests against an in-memory chain client.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde_json::{json, Value};

use tez_client::{ChainClient, ContractArtifacts, SignerKey, SignerStore};
use tez_orchestrator::{deploy_contract, run_single, run_traces, ReportSink, RunSummary};
use tez_resolver::AddressBook;
use tez_trace::{load_traces, TraceKind};
use tez_types::{CallIntent, EntrypointSchema, FieldKind, ParamShape, Receipt, TraceSet};

/// In-memory chain client: canned schemas, scripted failures, and a log of
/// every invocation in submission order.
struct MockClient {
    schemas: BTreeMap<String, EntrypointSchema>,
    fail_entrypoints: Vec<String>,
    invocations: RefCell<Vec<(String, String)>>,
    schema_fetches: RefCell<Vec<String>>,
    hash_counter: RefCell<u64>,
}

impl MockClient {
    fn new(schemas: BTreeMap<String, EntrypointSchema>) -> Self {
        Self {
            schemas,
            fail_entrypoints: Vec::new(),
            invocations: RefCell::new(Vec::new()),
            schema_fetches: RefCell::new(Vec::new()),
            hash_counter: RefCell::new(0),
        }
    }

    fn failing_on(mut self, entrypoint: &str) -> Self {
        self.fail_entrypoints.push(entrypoint.to_string());
        self
    }
}

impl ChainClient for MockClient {
    fn entrypoint_schema(&self, address: &str) -> Result<EntrypointSchema> {
        self.schema_fetches.borrow_mut().push(address.to_string());
        self.schemas
            .get(address)
            .cloned()
            .ok_or_else(|| anyhow!("no contract at {address}"))
    }

    fn invoke(
        &self,
        address: &str,
        entrypoint: &str,
        _params: &[tez_types::ParamValue],
        _amount: u64,
        _signer: &SignerKey,
    ) -> Result<Receipt> {
        if self.fail_entrypoints.iter().any(|e| e == entrypoint) {
            return Err(anyhow!("balance too low"));
        }
        self.invocations
            .borrow_mut()
            .push((address.to_string(), entrypoint.to_string()));
        let mut counter = self.hash_counter.borrow_mut();
        *counter += 1;
        Ok(Receipt(json!({
            "fee": 1000, "burn": 500, "gas": 2000, "storage": 40,
            "hash": format!("oo{:03}", *counter),
        })))
    }

    fn originate(
        &self,
        _artifacts: &ContractArtifacts,
        _balance: u64,
        _signer: &SignerKey,
    ) -> Result<Receipt> {
        Ok(Receipt(json!({"address": "KT1new", "hash": "ooOrig"})))
    }
}

fn token_schema() -> EntrypointSchema {
    let mut schema = EntrypointSchema::new();
    schema.insert(
        "transfer".to_string(),
        ParamShape::Fields(vec![FieldKind::Nat]),
    );
    schema.insert("close".to_string(), ParamShape::Unit);
    schema
}

fn signers() -> SignerStore {
    let mut entries = BTreeMap::new();
    entries.insert("wallet1".to_string(), "edsk-one".to_string());
    SignerStore::from_entries(entries)
}

fn address_book(dir: &Path, entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::load(&dir.join("addressList.json")).unwrap();
    for (contract, address) in entries {
        book.insert(*contract, *address);
    }
    book
}

fn write_token_trace(dir: &Path) -> TraceSet {
    fs::write(
        dir.join("token.csv"),
        "step1,transfer,wallet1,42,100\nstep2,close,wallet1,0\n",
    )
    .unwrap();
    load_traces(TraceKind::Tabular, dir).unwrap()
}

fn sink_in(dir: &Path) -> ReportSink {
    ReportSink::new(dir.join("out.csv"), dir.join("out.json"))
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_full_run_records_every_step() {
    let dir = tempfile::tempdir().unwrap();
    let traces = write_token_trace(dir.path());

    let mut schemas = BTreeMap::new();
    schemas.insert("KT1token".to_string(), token_schema());
    let client = MockClient::new(schemas);
    let book = address_book(dir.path(), &[("token", "KT1token")]);
    let sink = sink_in(dir.path());

    let summary = run_traces(&client, &signers(), &book, &traces, &sink);
    assert_eq!(
        summary,
        RunSummary {
            steps_total: 2,
            succeeded: 2,
            failed: 0,
            skipped: 0
        }
    );

    // Dispatched sequentially, in step order.
    assert_eq!(
        *client.invocations.borrow(),
        vec![
            ("KT1token".to_string(), "transfer".to_string()),
            ("KT1token".to_string(), "close".to_string()),
        ]
    );
    // Schema fetched once per contract, not per step.
    assert_eq!(client.schema_fetches.borrow().len(), 1);

    let csv = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("token,transfer,1500,2040,oo001"));

    let json = read_json(&dir.path().join("out.json"));
    assert_eq!(json.as_object().unwrap().len(), 1);
    assert_eq!(json["token"]["Entrypoint"], "close");
}

#[test]
fn test_rerun_doubles_tabular_rows_not_structured_entries() {
    let dir = tempfile::tempdir().unwrap();
    let traces = write_token_trace(dir.path());

    let mut schemas = BTreeMap::new();
    schemas.insert("KT1token".to_string(), token_schema());
    let client = MockClient::new(schemas);
    let book = address_book(dir.path(), &[("token", "KT1token")]);
    let sink = sink_in(dir.path());

    run_traces(&client, &signers(), &book, &traces, &sink);
    run_traces(&client, &signers(), &book, &traces, &sink);

    let csv = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert_eq!(csv.lines().count(), 4);

    let json = read_json(&dir.path().join("out.json"));
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[test]
fn test_unknown_contract_skips_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let traces = write_token_trace(dir.path());

    let client = MockClient::new(BTreeMap::new());
    // Empty book: "token" has no address.
    let book = address_book(dir.path(), &[]);
    let sink = sink_in(dir.path());

    let summary = run_traces(&client, &signers(), &book, &traces, &sink);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.succeeded + summary.failed, 0);
    assert!(client.invocations.borrow().is_empty());
    assert!(!dir.path().join("out.csv").exists());
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn test_empty_trace_source_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let traces = load_traces(TraceKind::Tabular, dir.path()).unwrap();

    let client = MockClient::new(BTreeMap::new());
    let book = address_book(dir.path(), &[]);
    let sink = sink_in(dir.path());

    let summary = run_traces(&client, &signers(), &book, &traces, &sink);
    assert_eq!(summary, RunSummary::default());
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_failed_dispatch_is_recorded_and_batch_continues() {
    let dir = tempfile::tempdir().unwrap();
    let traces = write_token_trace(dir.path());

    let mut schemas = BTreeMap::new();
    schemas.insert("KT1token".to_string(), token_schema());
    let client = MockClient::new(schemas).failing_on("transfer");
    let book = address_book(dir.path(), &[("token", "KT1token")]);
    let sink = sink_in(dir.path());

    let summary = run_traces(&client, &signers(), &book, &traces, &sink);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.succeeded, 1);

    let csv = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("token,transfer,0,0,failed:invocation-failed"));
    assert!(csv.contains("token,close,"));
}

#[test]
fn test_unknown_signer_skips_step_without_recording() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("token.csv"), "step1,close,ghost,0\n").unwrap();
    let traces = load_traces(TraceKind::Tabular, dir.path()).unwrap();

    let mut schemas = BTreeMap::new();
    schemas.insert("KT1token".to_string(), token_schema());
    let client = MockClient::new(schemas);
    let book = address_book(dir.path(), &[("token", "KT1token")]);
    let sink = sink_in(dir.path());

    let summary = run_traces(&client, &signers(), &book, &traces, &sink);
    assert_eq!(summary.skipped, 1);
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_run_single_invocation() {
    let dir = tempfile::tempdir().unwrap();
    let mut schemas = BTreeMap::new();
    schemas.insert("KT1token".to_string(), token_schema());
    let client = MockClient::new(schemas);
    let book = address_book(dir.path(), &[("token", "KT1token")]);

    let intent = CallIntent {
        entrypoint: "transfer".to_string(),
        signer: "wallet1".to_string(),
        raw_params: vec!["42".to_string()],
        amount: 100,
    };
    let record = run_single(&client, &signers(), &book, "token", &intent).unwrap();
    assert_eq!(record.contract, "token");
    assert_eq!(record.entry_point, "transfer");
    assert_eq!(record.total_cost, 1500);
    assert_eq!(record.weight, 2040);
    assert_eq!(record.hash, "oo001");
}

#[test]
fn test_deploy_contract_updates_address_book() {
    let dir = tempfile::tempdir().unwrap();
    let client = MockClient::new(BTreeMap::new());
    let mut book = address_book(dir.path(), &[]);
    let artifacts = ContractArtifacts {
        code: "parameter unit;".to_string(),
        storage: "Unit".to_string(),
    };
    let signer = SignerKey::new("1", "edsk-one");

    let info = deploy_contract(&client, &artifacts, 1_000_000, &signer, &mut book, "token").unwrap();
    assert_eq!(info.address, "KT1new");
    assert_eq!(info.hash, "ooOrig");

    let reloaded = AddressBook::load(&dir.path().join("addressList.json")).unwrap();
    assert_eq!(reloaded.lookup("token").unwrap(), "KT1new");
}
