//! Snippet sanitization gates.
//!
//! A naive deny-list placeholder, not a parser. It rejects snippets that
//! are oversized or contain shell metacharacters that would be dangerous
//! if a downstream analysis step ever shelled out.

use crate::error::GatewayError;

/// Maximum accepted snippet length, in characters.
pub const MAX_SNIPPET_CHARS: usize = 5000;

/// Characters that fail the sanitization gate.
pub const DENY_LIST: [char; 3] = [';', '|', '`'];

/// Normalize CRLF line endings and trim surrounding whitespace.
pub fn normalize_snippet(snippet: &str) -> String {
    snippet.replace("\r\n", "\n").trim().to_string()
}

/// Apply the length and deny-list checks to a normalized snippet.
pub fn check_snippet(snippet: &str) -> Result<(), GatewayError> {
    if snippet.is_empty() {
        return Err(GatewayError::EmptySnippet);
    }

    if snippet.chars().count() > MAX_SNIPPET_CHARS
        || snippet.chars().any(|c| DENY_LIST.contains(&c))
    {
        return Err(GatewayError::SanitizationFailed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_snippet() {
        assert!(check_snippet("SELECT * FROM users WHERE id=").is_ok());
    }

    #[test]
    fn test_rejects_empty_snippet() {
        assert!(matches!(
            check_snippet(""),
            Err(GatewayError::EmptySnippet)
        ));
    }

    #[test]
    fn test_rejects_oversized_snippet() {
        let snippet = "a".repeat(MAX_SNIPPET_CHARS + 1);
        assert!(matches!(
            check_snippet(&snippet),
            Err(GatewayError::SanitizationFailed)
        ));
    }

    #[test]
    fn test_accepts_snippet_at_limit() {
        let snippet = "a".repeat(MAX_SNIPPET_CHARS);
        assert!(check_snippet(&snippet).is_ok());
    }

    #[test]
    fn test_rejects_each_deny_list_char() {
        for c in DENY_LIST {
            let snippet = format!("console.log('x'){c}");
            assert!(
                matches!(check_snippet(&snippet), Err(GatewayError::SanitizationFailed)),
                "should reject {c:?}"
            );
        }
    }

    #[test]
    fn test_normalize_crlf_and_whitespace() {
        let normalized = normalize_snippet("  let x = 1;\r\nlet y = 2;\r\n  ");
        assert_eq!(normalized, "let x = 1;\nlet y = 2;");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(matches!(
            check_snippet(&normalize_snippet("   \r\n  ")),
            Err(GatewayError::EmptySnippet)
        ));
    }
}
