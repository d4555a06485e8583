//! Core types for the Specter scan gateway.
//!
//! This crate provides the fundamental types shared across the gateway:
//! - Vulnerability-type labels (VulnLabel)
//! - The static severity/remediation table (SeverityEntry)
//! - Scan report structures
//! - Snippet hashing

mod hash;
mod report;
mod severity;
mod vuln_label;

pub use hash::snippet_hash;
pub use report::ScanReport;
pub use severity::{severity_for, SeverityEntry};
pub use vuln_label::VulnLabel;
