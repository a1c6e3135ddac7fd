//! tez-toolchain: compile, deploy, and interact with contracts from the
//! archive, or replay recorded execution traces.
//!
//! ## Example usage
//!
//! ```bash
//! # Compile a contract source
//! tez-toolchain compile token
//!
//! # Originate it with an initial balance (mutez)
//! tez-toolchain deploy token --balance 1000000 --signer 1
//!
//! # Call an entrypoint once
//! tez-toolchain invoke token transfer --params "42" --amount 100 --signer 1
//!
//! # Replay every recorded trace in a directory
//! tez-toolchain trace --dir execution_traces --format csv
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{
    compile::CompileCmd, deploy::DeployCmd, invoke::InvokeCmd, list::ListCmd, trace::TraceCmd,
    ToolchainContext,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Client gateway endpoint (owns signing and the node wire protocol).
    #[arg(
        long,
        value_name = "URL",
        global = true,
        default_value = "http://127.0.0.1:20090"
    )]
    endpoint: String,

    /// Contract archive directory (one subdirectory per contract).
    #[arg(long, value_name = "DIR", global = true, default_value = "contracts")]
    contracts_dir: std::path::PathBuf,

    /// Wallet file: JSON object of signer id -> secret key.
    #[arg(long, value_name = "PATH", global = true, default_value = "wallet.json")]
    wallet: std::path::PathBuf,

    /// Address book path (defaults to <contracts-dir>/addressList.json).
    #[arg(long, value_name = "PATH", global = true)]
    address_book: Option<std::path::PathBuf>,

    /// Tabular (append-only) report path.
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        default_value = "transactionsOutput.csv"
    )]
    report_csv: std::path::PathBuf,

    /// Structured (last-write-wins) report path.
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        default_value = "transactionsOutput.json"
    )]
    report_json: std::path::PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List contracts in the archive and their deployed addresses.
    List(ListCmd),
    /// Compile a contract source into Michelson artifacts.
    Compile(CompileCmd),
    /// Originate a compiled contract and record its address.
    Deploy(DeployCmd),
    /// Invoke a single entrypoint of a deployed contract.
    Invoke(InvokeCmd),
    /// Replay recorded execution traces and persist the reports.
    Trace(TraceCmd),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let ctx = ToolchainContext {
        endpoint: cli.endpoint,
        contracts_dir: cli.contracts_dir.clone(),
        wallet: cli.wallet,
        address_book: cli
            .address_book
            .unwrap_or_else(|| cli.contracts_dir.join("addressList.json")),
        report_csv: cli.report_csv,
        report_json: cli.report_json,
    };

    match cli.command {
        Command::List(cmd) => cmd.execute(&ctx),
        Command::Compile(cmd) => cmd.execute(&ctx),
        Command::Deploy(cmd) => cmd.execute(&ctx),
        Command::Invoke(cmd) => cmd.execute(&ctx),
        Command::Trace(cmd) => cmd.execute(&ctx),
    }
}
