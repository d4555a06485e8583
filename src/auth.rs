use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::AuthConfig;
use crate::error::GatewayError;
use crate::state::AppState;

/// Claims carried by the bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub exp: usize,
    #[serde(default)]
    pub role: Option<String>,
}

/// Verify an `Authorization` header value against the configured secret
/// and issuer.
///
/// Missing or malformed header maps to 401; expiry, signature, and every
/// other decode failure map to distinct 403 variants.
pub fn verify_bearer(header: Option<&str>, config: &AuthConfig) -> Result<Claims, GatewayError> {
    let header = header.ok_or(GatewayError::AuthMissing)?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(GatewayError::AuthMissing)?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => GatewayError::AuthExpired,
        ErrorKind::InvalidSignature => GatewayError::AuthInvalidSignature,
        _ => GatewayError::AuthRejected,
    })
}

/// The verified caller. Subject is exposed for logging only.
pub struct AuthenticatedClient {
    pub subject: String,
}

impl FromRequestParts<Arc<AppState>> for AuthenticatedClient {
    type Rejection = GatewayError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let claims = verify_bearer(header, &state.config.auth)?;

        Ok(AuthenticatedClient {
            subject: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn test_config() -> AuthConfig {
        AuthConfig {
            secret: "test-secret".to_string(),
            issuer: "specter-ai-client".to_string(),
        }
    }

    fn mint(secret: &str, issuer: &str, exp_offset_secs: i64) -> String {
        let exp = (chrono::Utc::now() + chrono::Duration::seconds(exp_offset_secs)).timestamp();
        let claims = Claims {
            sub: "specter-test-user".to_string(),
            iss: issuer.to_string(),
            exp: exp as usize,
            role: Some("tester".to_string()),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token() {
        let token = mint("test-secret", "specter-ai-client", 3600);
        let claims = verify_bearer(Some(&format!("Bearer {token}")), &test_config()).unwrap();
        assert_eq!(claims.sub, "specter-test-user");
    }

    #[test]
    fn test_missing_header() {
        let err = verify_bearer(None, &test_config()).unwrap_err();
        assert!(matches!(err, GatewayError::AuthMissing));
    }

    #[test]
    fn test_wrong_scheme() {
        let err = verify_bearer(Some("Basic dXNlcjpwYXNz"), &test_config()).unwrap_err();
        assert!(matches!(err, GatewayError::AuthMissing));
    }

    #[test]
    fn test_expired_token() {
        let token = mint("test-secret", "specter-ai-client", -3600);
        let err = verify_bearer(Some(&format!("Bearer {token}")), &test_config()).unwrap_err();
        assert!(matches!(err, GatewayError::AuthExpired));
    }

    #[test]
    fn test_tampered_signature() {
        let token = mint("another-secret", "specter-ai-client", 3600);
        let err = verify_bearer(Some(&format!("Bearer {token}")), &test_config()).unwrap_err();
        assert!(matches!(err, GatewayError::AuthInvalidSignature));
    }

    #[test]
    fn test_wrong_issuer() {
        let token = mint("test-secret", "someone-else", 3600);
        let err = verify_bearer(Some(&format!("Bearer {token}")), &test_config()).unwrap_err();
        assert!(matches!(err, GatewayError::AuthRejected));
    }

    #[test]
    fn test_garbage_token() {
        let err =
            verify_bearer(Some("Bearer not.a.jwt"), &test_config()).unwrap_err();
        assert!(matches!(err, GatewayError::AuthRejected));
    }
}
