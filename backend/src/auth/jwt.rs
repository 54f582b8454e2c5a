//! Token issuance and verification
//!
//! The credential issuer signs a caller-supplied identity payload into a
//! time-limited HS256 token. Issuance is a pure computation: the store is
//! never consulted, so the issuer will happily sign a payload for an
//! identity it has never seen. Verification is a function of the token and
//! the shared secret alone; the server keeps no session state.
//!
//! Keys are pre-computed once at startup and wrapped in `Arc` for cheap
//! cloning across request tasks.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rsh_network_shared::types::IdentityPayload;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

/// Token operation failure
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),

    #[error("token rejected: {0}")]
    Invalid(jsonwebtoken::errors::Error),
}

/// Signed claim set
///
/// The identity payload's claims plus the timestamps added at issuance.
/// `exp` and `iat` are consumed by the explicit fields on decode, so the
/// flattened `extra` map holds exactly what the caller originally sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Recover the identity payload as originally signed
    pub fn into_identity(self) -> IdentityPayload {
        IdentityPayload {
            email: self.email,
            extra: self.extra,
        }
    }
}

/// Pre-computed signing keys
///
/// Expensive to derive, so they are built once and cached in `AppState`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// Credential issuer and verifier
#[derive(Clone)]
pub struct TokenService {
    keys: TokenKeys,
    expiry_secs: i64,
}

impl TokenService {
    /// Create a new token service with pre-computed keys
    ///
    /// Call once at application startup and store in `AppState`; do not
    /// create per-request.
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        Self {
            keys: TokenKeys::new(secret),
            expiry_secs,
        }
    }

    /// Sign an identity payload into an access token
    pub fn issue(&self, payload: &IdentityPayload) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            email: payload.email.clone(),
            extra: payload.extra.clone(),
            exp: (now + Duration::seconds(self.expiry_secs)).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding).map_err(TokenError::Signing)
    }

    /// Verify a token's signature and expiry, returning its claims
    #[inline]
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn expiry_secs(&self) -> i64 {
        self.expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_service() -> TokenService {
        TokenService::new("test-secret", 3600)
    }

    fn payload(email: &str, extra: Value) -> IdentityPayload {
        let mut value = extra;
        value["email"] = json!(email);
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = create_test_service();
        let identity = payload("a@x.com", json!({"name": "A", "picture": "p.png"}));

        let token = service.issue(&identity).unwrap();
        let claims = service.verify(&token).unwrap();

        // Claims equal the signed payload modulo exp/iat
        let recovered = claims.into_identity();
        assert_eq!(recovered.email, "a@x.com");
        assert_eq!(recovered.extra, identity.extra);
    }

    #[test]
    fn test_timestamps_excluded_from_extra_claims() {
        let service = create_test_service();
        let identity = payload("a@x.com", json!({}));

        let claims = service.verify(&service.issue(&identity).unwrap()).unwrap();

        assert!(claims.exp > claims.iat);
        assert!(!claims.extra.contains_key("exp"));
        assert!(!claims.extra.contains_key("iat"));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Already past expiry by more than the default validation leeway
        let service = TokenService::new("test-secret", -120);
        let token = service.issue(&payload("a@x.com", json!({}))).unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = create_test_service();
        let other = TokenService::new("another-secret", 3600);
        let token = service.issue(&payload("a@x.com", json!({}))).unwrap();

        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let service = create_test_service();
        assert!(service.verify("not.a.token").is_err());
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let cloned = service.clone(); // Arc increments only

        let token = service.issue(&payload("a@x.com", json!({}))).unwrap();
        assert!(cloned.verify(&token).is_ok());
    }
}
