//! Compile command - run the external compiler on one contract source.

use anyhow::Result;
use clap::Parser;
use tez_client::compile_contract;

use super::ToolchainContext;

#[derive(Debug, Parser)]
pub struct CompileCmd {
    /// Contract name (expects <contracts-dir>/<name>/<name>.py).
    pub contract: String,

    /// Compiler command to invoke.
    #[arg(long, default_value = "smartpy")]
    pub compiler: String,
}

impl CompileCmd {
    pub fn execute(&self, ctx: &ToolchainContext) -> Result<()> {
        let contract_dir = ctx.contracts_dir.join(&self.contract);
        let source = contract_dir.join(format!("{}.py", self.contract));

        compile_contract(&self.compiler, &source, &contract_dir)?;
        println!(
            "compiled '{}' -> {}",
            self.contract,
            contract_dir.display()
        );
        Ok(())
    }
}
