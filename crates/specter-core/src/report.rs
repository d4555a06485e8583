//! Scan report types.

use serde::{Deserialize, Serialize};

/// The structured result of one snippet analysis. Derived per request,
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanReport {
    /// Free-form vulnerability description from the model.
    pub vulnerability: String,
    /// CVSS base score rendered as a decimal string, e.g. "8.1".
    pub severity: String,
    /// Remediation guidance from the severity table.
    pub remediation: String,
    /// SHA-256 hex digest of the analyzed snippet.
    pub code_hash: String,
}

impl ScanReport {
    /// Check whether the report carries a usable finding.
    pub fn is_complete(&self) -> bool {
        !self.vulnerability.is_empty() && !self.severity.is_empty() && !self.remediation.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialization() {
        let report = ScanReport {
            vulnerability: "Inyección SQL en consulta de usuarios".to_string(),
            severity: "8.1".to_string(),
            remediation: "Usar consultas parametrizadas en todos los accesos a datos.".to_string(),
            code_hash: "ab".repeat(32),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["severity"], "8.1");
        assert_eq!(json["code_hash"].as_str().unwrap().len(), 64);

        let back: ScanReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_is_complete() {
        let mut report = ScanReport {
            vulnerability: "x".to_string(),
            severity: "3.0".to_string(),
            remediation: "y".to_string(),
            code_hash: String::new(),
        };
        assert!(report.is_complete());

        report.severity.clear();
        assert!(!report.is_complete());
    }
}
