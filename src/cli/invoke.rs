//! Invoke command - one-off entrypoint call outside any trace.

use anyhow::Result;
use clap::Parser;
use tez_orchestrator::run_single;
use tez_trace::split_raw_params;
use tez_types::CallIntent;

use super::ToolchainContext;

#[derive(Debug, Parser)]
pub struct InvokeCmd {
    /// Contract name from the address book.
    pub contract: String,

    /// Entrypoint to call.
    pub entrypoint: String,

    /// Parameters, comma-separated if multiple (a single value needs no
    /// separator). Omit for unit entrypoints.
    #[arg(long, default_value = "")]
    pub params: String,

    /// Amount attached to the call, in mutez.
    #[arg(long, default_value_t = 0)]
    pub amount: u64,

    /// Signer id from the wallet file.
    #[arg(long)]
    pub signer: String,

    /// Also append the result to both reports.
    #[arg(long, default_value_t = false)]
    pub export: bool,
}

impl InvokeCmd {
    pub fn execute(&self, ctx: &ToolchainContext) -> Result<()> {
        let intent = CallIntent {
            entrypoint: self.entrypoint.clone(),
            signer: self.signer.clone(),
            raw_params: split_raw_params(&self.params),
            amount: self.amount,
        };

        let record = run_single(
            &ctx.client(),
            &ctx.signers()?,
            &ctx.address_book()?,
            &self.contract,
            &intent,
        )?;

        println!("{}", serde_json::to_string_pretty(&record)?);

        if self.export {
            ctx.sink().record(&record);
            println!("result exported to {} and {}", ctx.report_csv.display(), ctx.report_json.display());
        }
        Ok(())
    }
}
