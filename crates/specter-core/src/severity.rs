//! Static severity table mapping vulnerability labels to CVSS base scores
//! and remediation guidance. Pure lookup, no scoring algorithm.

use crate::vuln_label::VulnLabel;

/// A single row of the severity table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityEntry {
    /// CVSS v3.1 base score (0.0–10.0).
    pub score: f64,
    /// Remediation guidance shown to the caller.
    pub remediation: &'static str,
}

// CVSS Vector: AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H
const RCE_CRITICAL: SeverityEntry = SeverityEntry {
    score: 9.8,
    remediation: "Validación estricta de entrada y uso de APIs seguras (no 'exec').",
};

// CVSS Vector: AV:N/AC:L/PR:L/UI:N/S:U/C:H/I:H/A:N
const IDOR_HIGH: SeverityEntry = SeverityEntry {
    score: 8.1,
    remediation: "Implementar chequeos de propiedad (RBAC) en cada acceso a recurso.",
};

const SQLI_HIGH: SeverityEntry = SeverityEntry {
    score: 8.1,
    remediation: "Usar consultas parametrizadas en todos los accesos a datos.",
};

// CVSS Vector: AV:N/AC:L/PR:N/UI:R/S:C/C:L/I:L/A:N
const XSS_MEDIUM: SeverityEntry = SeverityEntry {
    score: 6.1,
    remediation: "Escapar toda salida al DOM o usar frameworks con protección automática (React/Vue).",
};

const LOW_RISK: SeverityEntry = SeverityEntry {
    score: 3.0,
    remediation: "Revisión menor de buenas prácticas.",
};

/// Look up the severity entry for a label.
///
/// `VulnLabel::from_label` already folds unknown labels into `LowRisk`, so
/// every finding resolves to a row.
pub fn severity_for(label: VulnLabel) -> &'static SeverityEntry {
    match label {
        VulnLabel::RceCritical => &RCE_CRITICAL,
        VulnLabel::IdorHigh => &IDOR_HIGH,
        VulnLabel::SqliHigh => &SQLI_HIGH,
        VulnLabel::XssMedium => &XSS_MEDIUM,
        VulnLabel::LowRisk => &LOW_RISK,
    }
}
