//! One-shot script invocation and output parsing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::record::AuditRecord;
use crate::AuditorConfig;

/// Errors that can occur while running an automation script.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("failed to spawn PowerShell process: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("PowerShell binary not found at: {0}")]
    BinaryNotFound(PathBuf),

    #[error("script timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    #[error("script exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("script output is not JSON: {output}")]
    MalformedJson { output: String },
}

impl AuditError {
    /// Translate into the structured record handed to callers that expect
    /// the cmdlet's own error shape.
    pub fn to_record(&self) -> AuditRecord {
        match self {
            AuditError::Spawn(e) => {
                AuditRecord::error("Fallo de Ejecución de PowerShell").with_error(e.to_string())
            }
            AuditError::BinaryNotFound(_) => AuditRecord::error("Powershell no encontrado"),
            AuditError::Timeout { timeout_secs } => {
                AuditRecord::error("Fallo de Ejecución de PowerShell")
                    .with_error(format!("timeout tras {timeout_secs}s"))
            }
            AuditError::NonZeroExit { stderr, .. } => {
                AuditRecord::error("Fallo de Ejecución de PowerShell").with_error(stderr.clone())
            }
            AuditError::MalformedJson { output } => {
                AuditRecord::error("JSON Malformado del Cmdlet").with_output(output.clone())
            }
        }
    }
}

/// Runner for platform automation scripts.
pub struct ScriptRunner {
    config: AuditorConfig,
}

impl ScriptRunner {
    pub fn new(config: AuditorConfig) -> Self {
        Self { config }
    }

    /// Invoke a script with named parameters and parse its JSON stdout.
    ///
    /// Blocks the caller for the duration of the subprocess, bounded by the
    /// configured timeout.
    pub async fn run(
        &self,
        script_path: &Path,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, AuditError> {
        timeout(
            Duration::from_secs(self.config.timeout_secs),
            self.spawn_script(script_path, params),
        )
        .await
        .map_err(|_| AuditError::Timeout {
            timeout_secs: self.config.timeout_secs,
        })?
    }

    async fn spawn_script(
        &self,
        script_path: &Path,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, AuditError> {
        let mut cmd = Command::new(&self.config.powershell_path);
        cmd.args(build_args(script_path, params));
        // Reap the child if the timeout drops this future mid-flight
        cmd.kill_on_drop(true);

        debug!("Spawning audit script: {:?}", cmd);

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AuditError::BinaryNotFound(self.config.powershell_path.clone())
            } else {
                AuditError::Spawn(e)
            }
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if !output.status.success() {
            return Err(AuditError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }

        if !stderr.is_empty() {
            warn!("Audit script stderr: {}", stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        parse_stdout(&stdout)
    }
}

/// Build the PowerShell argument vector: execution-policy bypass, the
/// script file, then each `-Key value` pair as its own arguments.
fn build_args(script_path: &Path, params: &[(&str, &str)]) -> Vec<String> {
    let mut args = vec![
        "-ExecutionPolicy".to_string(),
        "Bypass".to_string(),
        "-File".to_string(),
        script_path.display().to_string(),
    ];

    for (key, value) in params {
        args.push(format!("-{key}"));
        args.push((*value).to_string());
    }

    args
}

/// Parse the script's stdout as JSON.
fn parse_stdout(stdout: &str) -> Result<serde_json::Value, AuditError> {
    serde_json::from_str(stdout.trim()).map_err(|_| AuditError::MalformedJson {
        output: stdout.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args_order() {
        let args = build_args(
            Path::new("auditar_drda.ps1"),
            &[("ServiceToken", "SPECTER-HIS-AUTH-2025"), ("Alias", "DB2PROD")],
        );

        assert_eq!(
            args,
            vec![
                "-ExecutionPolicy",
                "Bypass",
                "-File",
                "auditar_drda.ps1",
                "-ServiceToken",
                "SPECTER-HIS-AUTH-2025",
                "-Alias",
                "DB2PROD",
            ]
        );
    }

    #[test]
    fn test_parse_stdout_json() {
        let value = parse_stdout("{\"Status\": \"Ok\", \"TracingLevel\": \"None\"}\n").unwrap();
        assert_eq!(value["TracingLevel"], "None");
    }

    #[test]
    fn test_parse_stdout_malformed() {
        let err = parse_stdout("WARNING: something happened").unwrap_err();
        match err {
            AuditError::MalformedJson { output } => {
                assert!(output.contains("WARNING"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_records() {
        let record = AuditError::BinaryNotFound(PathBuf::from("powershell.exe")).to_record();
        assert_eq!(record.message, "Powershell no encontrado");

        let record = AuditError::MalformedJson {
            output: "garbage".to_string(),
        }
        .to_record();
        assert_eq!(record.message, "JSON Malformado del Cmdlet");
        assert_eq!(record.output.as_deref(), Some("garbage"));
    }

    #[tokio::test]
    async fn test_run_missing_binary() {
        let runner = ScriptRunner::new(AuditorConfig::new(PathBuf::from(
            "specter-no-such-binary",
        )));

        let err = runner.run(Path::new("audit.ps1"), &[]).await.unwrap_err();
        assert!(matches!(err, AuditError::BinaryNotFound(_)));
    }

    #[tokio::test]
    async fn test_run_non_zero_exit() {
        // `false` ignores its arguments and exits 1, which exercises the
        // non-zero-exit mapping without needing PowerShell on the host.
        let runner = ScriptRunner::new(AuditorConfig::new(PathBuf::from("false")));

        let err = runner.run(Path::new("audit.ps1"), &[]).await.unwrap_err();
        match err {
            AuditError::NonZeroExit { code, .. } => assert_eq!(code, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
