//! Contract compilation: external compiler invocation and artifact loading.
//!
//! Compilation is delegated to the configured compiler command (e.g. the
//! SmartPy CLI), which writes Michelson artifacts into
//! `<out_dir>/<contract>/`. The toolchain only reads the resulting code
//! and storage files back.

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Context, Result};

/// Compiled contract artifact filenames, as emitted by the compiler.
pub const CODE_ARTIFACT: &str = "step_001_cont_0_contract.tz";
pub const STORAGE_ARTIFACT: &str = "step_001_cont_0_storage.tz";

/// Compiled Michelson code plus its initial storage expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractArtifacts {
    pub code: String,
    pub storage: String,
}

impl ContractArtifacts {
    /// Load artifacts from a compiled contract directory.
    ///
    /// Fails with context when the contract has not been compiled yet.
    pub fn load(dir: &Path) -> Result<Self> {
        let code_path = dir.join(CODE_ARTIFACT);
        let storage_path = dir.join(STORAGE_ARTIFACT);

        let code = fs::read_to_string(&code_path).with_context(|| {
            format!(
                "read compiled contract {} (compile the contract first)",
                code_path.display()
            )
        })?;
        let storage = fs::read_to_string(&storage_path)
            .with_context(|| format!("read initial storage {}", storage_path.display()))?;

        Ok(Self { code, storage })
    }
}

/// Run the external compiler on one contract source.
///
/// Invoked as `<compiler> compile <source> <out_dir>`; artifacts land in
/// `out_dir`. The compiler's own diagnostics go to the inherited stderr.
pub fn compile_contract(compiler: &str, source: &Path, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;

    let status = Command::new(compiler)
        .arg("compile")
        .arg(source)
        .arg(out_dir)
        .status()
        .with_context(|| format!("run compiler '{}'", compiler))?;

    if !status.success() {
        return Err(anyhow!(
            "compiler '{}' failed on {} (exit status {})",
            compiler,
            source.display(),
            status
        ));
    }
    Ok(())
}
