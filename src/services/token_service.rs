use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::errors::internal::TokenError;
use crate::types::internal::Claims;

/// Validates bearer JWTs issued by the auth provider.
///
/// Sessions are issued externally; this service only verifies the signature
/// and expiry and extracts the acting user.
pub struct TokenService {
    jwt_secret: String,
}

impl TokenService {
    pub fn new(jwt_secret: String) -> Self {
        Self { jwt_secret }
    }

    /// Validate a JWT and return the claims
    pub fn validate_jwt(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e.to_string()),
        })
    }

    /// Issue a signed JWT for `user_id`, valid for `ttl_seconds`.
    ///
    /// Production tokens come from the auth provider; this is for local
    /// tooling and tests.
    pub fn issue_jwt(&self, user_id: &str, ttl_seconds: i64) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + ttl_seconds,
            iat: now,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips() {
        let service = TokenService::new("test-secret-key-minimum-32-characters".to_string());
        let token = service.issue_jwt("user-123", 900).expect("issue");
        let claims = service.validate_jwt(&token).expect("validate");
        assert_eq!(claims.sub, "user-123");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = TokenService::new("test-secret-key-minimum-32-characters".to_string());
        let token = service.issue_jwt("user-123", -3600).expect("issue");
        assert!(matches!(service.validate_jwt(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new("one-secret-key-minimum-32-characters!".to_string());
        let verifier = TokenService::new("another-secret-key-minimum-32-chars!!".to_string());
        let token = issuer.issue_jwt("user-123", 900).expect("issue");
        assert!(matches!(
            verifier.validate_jwt(&token),
            Err(TokenError::Invalid(_))
        ));
    }
}
