//! Scan prompt template.

/// Build the analysis prompt for one snippet.
///
/// The template asks for OWASP Top 10 findings (IDOR, Broken Access
/// Control, potential RCE) and a JSON reply carrying the vulnerability,
/// its impact, and exploitation difficulty.
pub fn build_scan_prompt(code_snippet: &str, code_language: &str) -> String {
    format!(
        r#"Eres un analista de ciberseguridad experto. Analiza el siguiente código
escrito en {code_language}. Identifica vulnerabilidades críticas de
OWASP Top 10 (especialmente IDOR, Broken Access Control, o RCE potencial).
Devuelve un único objeto JSON con los campos "vulnerability_type" (una de
RCE_CRITICAL, IDOR_HIGH, SQLI_HIGH, XSS_MEDIUM, LOW_RISK), "vulnerability",
"impact" y "difficulty". No incluyas texto fuera del JSON.
CÓDIGO: {code_snippet}"#,
    )
}
