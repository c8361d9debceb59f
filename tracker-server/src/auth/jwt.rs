//! JWT issue and validation
//!
//! One static symmetric secret, one algorithm (HS256). Tokens carry the
//! account id, role, and linked-employee id so the access scoping can run
//! without an extra lookup.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use shared::models::User;
use thiserror::Error;

/// Signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Symmetric signing secret, at least 32 bytes
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: resolve_secret(),
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
        }
    }
}

/// Claims embedded in every access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account email
    pub sub: String,
    /// Account id
    pub user_id: i64,
    /// Role name as stored
    pub role: String,
    /// Linked employee id, if any
    #[serde(default)]
    pub employee_id: Option<i64>,
    /// Absolute expiry (unix seconds)
    pub exp: i64,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Resolve the signing secret from `JWT_SECRET`.
///
/// Development builds fall back to a random throwaway secret (all tokens
/// die with the process); release builds refuse to start without one.
fn resolve_secret() -> String {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if secret.len() >= 32 => secret,
        Ok(_) => missing_secret("JWT_SECRET is shorter than 32 characters"),
        Err(_) => missing_secret("JWT_SECRET is not set"),
    }
}

#[cfg(debug_assertions)]
fn missing_secret(reason: &str) -> String {
    use ring::rand::{SecureRandom, SystemRandom};

    tracing::warn!("{reason}, using a generated development secret");

    let rng = SystemRandom::new();
    let mut bytes = [0u8; 32];
    match rng.fill(&mut bytes) {
        Ok(()) => bytes.iter().map(|b| format!("{b:02x}")).collect(),
        Err(_) => "tracker-dev-signing-secret-0123456789abcdef".to_string(),
    }
}

#[cfg(not(debug_assertions))]
fn missing_secret(reason: &str) -> String {
    panic!("FATAL: {reason}; a real JWT_SECRET is required in release builds");
}

/// Token service with the keys derived once from the secret
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a token for an account, expiring `expiration_minutes` from now
    pub fn generate_token(&self, user: &User) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user.email.clone(),
            user_id: user.id,
            role: user.role.clone(),
            employee_id: user.employee_id,
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate signature and expiry, returning the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No leeway: one second past expiry is already too late
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => Err(match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            }),
        }
    }

    /// Pull the raw token out of an `Authorization` header value.
    ///
    /// A `Bearer ` prefix is accepted case-insensitively; anything else is
    /// treated as the token itself.
    pub fn extract_from_header(header: &str) -> &str {
        let value = header.trim();
        match value.split_at_checked(7) {
            Some((prefix, rest)) if prefix.eq_ignore_ascii_case("bearer ") => rest.trim_start(),
            _ => value,
        }
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret-key-with-enough-length".to_string(),
            expiration_minutes: 60,
        }
    }

    fn test_user() -> User {
        User {
            id: 7,
            name: "Jo".to_string(),
            email: "jo@co.com".to_string(),
            password_hash: "irrelevant".to_string(),
            role: "employee".to_string(),
            is_active: true,
            employee_id: Some(3),
        }
    }

    #[test]
    fn issued_tokens_validate_and_round_trip_claims() {
        let service = JwtService::with_config(test_config());

        let token = service.generate_token(&test_user()).expect("generate");
        let claims = service.validate_token(&token).expect("validate");

        assert_eq!(claims.sub, "jo@co.com");
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.role, "employee");
        assert_eq!(claims.employee_id, Some(3));
    }

    #[test]
    fn expired_tokens_fail_even_with_a_valid_signature() {
        let service = JwtService::with_config(JwtConfig {
            expiration_minutes: -2,
            ..test_config()
        });

        let token = service.generate_token(&test_user()).expect("generate");

        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::ExpiredToken)
        ));
    }

    #[test]
    fn tokens_signed_with_another_secret_fail() {
        let service = JwtService::with_config(test_config());
        let other = JwtService::with_config(JwtConfig {
            secret: "a-completely-different-signing-secret!!".to_string(),
            expiration_minutes: 60,
        });

        let token = service.generate_token(&test_user()).expect("generate");

        assert!(matches!(
            other.validate_token(&token),
            Err(JwtError::InvalidSignature)
        ));
    }

    #[test]
    fn garbage_tokens_are_invalid() {
        let service = JwtService::with_config(test_config());
        assert!(matches!(
            service.validate_token("not.a.token"),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn header_extraction_handles_bearer_prefix() {
        assert_eq!(JwtService::extract_from_header("Bearer abc.def"), "abc.def");
        assert_eq!(JwtService::extract_from_header("bearer abc.def"), "abc.def");
        assert_eq!(JwtService::extract_from_header("BEARER abc.def"), "abc.def");
        assert_eq!(
            JwtService::extract_from_header("  Bearer  abc.def"),
            "abc.def"
        );
        // No prefix: the value is the token
        assert_eq!(JwtService::extract_from_header("abc.def"), "abc.def");
        assert_eq!(JwtService::extract_from_header("bear"), "bear");
    }
}
