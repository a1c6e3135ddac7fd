//! Deploy command - originate compiled artifacts and record the address.

use anyhow::Result;
use clap::Parser;
use tez_client::ContractArtifacts;
use tez_orchestrator::deploy_contract;

use super::ToolchainContext;

#[derive(Debug, Parser)]
pub struct DeployCmd {
    /// Contract name (artifacts expected in <contracts-dir>/<name>/).
    pub contract: String,

    /// Initial balance, in mutez.
    #[arg(long, default_value_t = 0)]
    pub balance: u64,

    /// Signer id from the wallet file.
    #[arg(long)]
    pub signer: String,
}

impl DeployCmd {
    pub fn execute(&self, ctx: &ToolchainContext) -> Result<()> {
        let artifacts = ContractArtifacts::load(&ctx.contracts_dir.join(&self.contract))?;
        let signer = ctx.signers()?.lookup(&self.signer)?;
        let mut book = ctx.address_book()?;

        let info = deploy_contract(
            &ctx.client(),
            &artifacts,
            self.balance,
            &signer,
            &mut book,
            &self.contract,
        )?;

        println!("address: {}", info.address);
        println!("hash:    {}", info.hash);
        Ok(())
    }
}
