//! Standalone driver for the DRDA security audit script.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};

use specter_auditor::{AuditorConfig, ScriptRunner};

#[derive(Parser, Debug)]
#[command(
    name = "specter-audit",
    about = "Run a PowerShell audit script and inspect its JSON output"
)]
struct Args {
    /// Path to the audit script
    #[arg(long, default_value = "auditar_drda.ps1")]
    script: PathBuf,

    /// Service token passed to the cmdlet
    #[arg(long, default_value = "SPECTER-HIS-AUTH-2025")]
    service_token: String,

    /// Database alias to audit
    #[arg(long, default_value = "DB2PROD")]
    alias: String,

    /// PowerShell binary to invoke
    #[arg(long, default_value = "powershell.exe")]
    powershell: PathBuf,

    /// Invocation timeout in seconds
    #[arg(long, default_value_t = 300)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!("== Iniciando Auditoría DRDA (alias: {}) ==", args.alias);

    let runner = ScriptRunner::new(
        AuditorConfig::new(args.powershell).with_timeout(args.timeout_secs),
    );
    let params = [
        ("ServiceToken", args.service_token.as_str()),
        ("Alias", args.alias.as_str()),
    ];

    match runner.run(&args.script, &params).await {
        Ok(result) => {
            info!("Auditoría DRDA completada con éxito");
            if result.get("TracingLevel").and_then(|v| v.as_str()) == Some("High") {
                // Remediation would be Set-HisDrdaService -TracingLevel None
                warn!("Se detectó un nivel de seguimiento alto en producción");
            }
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(e) => {
            error!("Auditoría fallida: {e}");
            println!("{}", serde_json::to_string_pretty(&e.to_record())?);
            std::process::exit(1);
        }
    }
}
