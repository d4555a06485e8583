//! Vulnerability-type label definitions.

use serde::{Deserialize, Serialize};

/// Represents the closed set of vulnerability-type labels the model is
/// expected to emit. Anything outside the set falls back to `LowRisk`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum VulnLabel {
    /// Remote code execution, critical
    RceCritical,
    /// Insecure direct object reference, high
    IdorHigh,
    /// SQL injection, high
    SqliHigh,
    /// Cross-site scripting, medium
    XssMedium,
    /// Default bucket for everything else
    LowRisk,
}

impl std::fmt::Display for VulnLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VulnLabel::RceCritical => write!(f, "RCE_CRITICAL"),
            VulnLabel::IdorHigh => write!(f, "IDOR_HIGH"),
            VulnLabel::SqliHigh => write!(f, "SQLI_HIGH"),
            VulnLabel::XssMedium => write!(f, "XSS_MEDIUM"),
            VulnLabel::LowRisk => write!(f, "LOW_RISK"),
        }
    }
}

impl VulnLabel {
    /// Parse a wire label into a VulnLabel. Unknown labels map to `LowRisk`.
    pub fn from_label(s: &str) -> Self {
        match s {
            "RCE_CRITICAL" => VulnLabel::RceCritical,
            "IDOR_HIGH" => VulnLabel::IdorHigh,
            "SQLI_HIGH" => VulnLabel::SqliHigh,
            "XSS_MEDIUM" => VulnLabel::XssMedium,
            _ => VulnLabel::LowRisk,
        }
    }

    /// Get CWE (Common Weakness Enumeration) IDs for this label
    pub fn cwe_ids(&self) -> Vec<String> {
        match self {
            VulnLabel::RceCritical => vec![
                "CWE-77".to_string(),
                "CWE-78".to_string(),
                "CWE-94".to_string(),
            ],
            VulnLabel::IdorHigh => vec!["CWE-639".to_string(), "CWE-284".to_string()],
            VulnLabel::SqliHigh => vec!["CWE-89".to_string()],
            VulnLabel::XssMedium => vec!["CWE-79".to_string(), "CWE-80".to_string()],
            VulnLabel::LowRisk => vec![],
        }
    }

    /// Get OWASP Top 10 category for this label
    pub fn owasp_categories(&self) -> Vec<String> {
        match self {
            VulnLabel::RceCritical => vec!["A03:2021-Injection".to_string()],
            VulnLabel::IdorHigh => vec!["A01:2021-Broken Access Control".to_string()],
            VulnLabel::SqliHigh => vec!["A03:2021-Injection".to_string()],
            VulnLabel::XssMedium => vec!["A03:2021-Injection".to_string()],
            VulnLabel::LowRisk => vec![],
        }
    }
}
