//! List command - show archive contracts and their deployed addresses.

use anyhow::Result;
use clap::Parser;
use tez_trace::contract_names;

use super::ToolchainContext;

#[derive(Debug, Parser)]
pub struct ListCmd {}

impl ListCmd {
    pub fn execute(&self, ctx: &ToolchainContext) -> Result<()> {
        let names = contract_names(&ctx.contracts_dir)?;
        if names.is_empty() {
            println!("no contracts in {}", ctx.contracts_dir.display());
            return Ok(());
        }

        let book = ctx.address_book()?;
        for name in names {
            match book.lookup(&name) {
                Ok(address) => println!("{name}  {address}"),
                Err(_) => println!("{name}  (not deployed)"),
            }
        }
        Ok(())
    }
}
