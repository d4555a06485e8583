//! PowerShell automation runner for Specter audits.
//!
//! One-shot invocation of a platform automation script: spawn, capture
//! stdout/stderr, parse stdout as JSON. No pooling, no retries.

mod record;
mod runner;

pub use record::AuditRecord;
pub use runner::{AuditError, ScriptRunner};

use std::path::PathBuf;

/// Configuration for the script runner.
#[derive(Debug, Clone)]
pub struct AuditorConfig {
    /// Path to the PowerShell binary.
    pub powershell_path: PathBuf,
    /// Wall-clock timeout in seconds for one invocation.
    pub timeout_secs: u64,
}

impl Default for AuditorConfig {
    fn default() -> Self {
        Self {
            powershell_path: PathBuf::from("powershell.exe"),
            timeout_secs: 300,
        }
    }
}

impl AuditorConfig {
    /// Create a configuration with the specified PowerShell binary.
    pub fn new(powershell_path: PathBuf) -> Self {
        Self {
            powershell_path,
            ..Default::default()
        }
    }

    /// Set the invocation timeout in seconds.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
