//! JWT token generation and validation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::user::User;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID)
    pub sub: String,
    pub username: String,
    pub role: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
    /// Unique token id
    pub jti: String,
}

impl JwtClaims {
    /// Create new claims for a user, expiring `lifetime` from now
    pub fn new(user: &User, lifetime: Duration) -> Result<Self, DomainError> {
        let now = Utc::now();
        let exp = now.checked_add_signed(lifetime).ok_or_else(|| {
            DomainError::configuration("JWT expiration is beyond the representable date range")
        })?;

        Ok(Self {
            sub: user.id().to_string(),
            username: user.username().to_string(),
            role: user.role().as_str().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// Numeric user id carried in `sub`
    pub fn user_id(&self) -> Result<i64, DomainError> {
        self.sub
            .parse()
            .map_err(|_| DomainError::unauthorized("Invalid or expired token"))
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }
}

/// A signed token and the instant it stops being accepted
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Configuration for JWT service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret for signing tokens
    pub secret: String,
    /// Token expiration time in hours
    pub expiration_hours: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// Token lifetime, rejecting hour counts chrono cannot represent
    pub fn lifetime(&self) -> Result<Duration, DomainError> {
        i64::try_from(self.expiration_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                DomainError::configuration(format!(
                    "JWT expiration of {} hours is out of range",
                    self.expiration_hours
                ))
            })
    }
}

/// Trait for JWT operations
pub trait JwtGenerator: Send + Sync + Debug {
    /// Generate a signed token for a user
    fn generate(&self, user: &User) -> Result<IssuedToken, DomainError>;

    /// Validate a token's signature and expiry and return its claims
    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError>;

    fn expiration_hours(&self) -> u64;
}

/// JWT service implementation using a shared secret
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiration_hours", &self.config.expiration_hours)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl JwtGenerator for JwtService {
    fn generate(&self, user: &User) -> Result<IssuedToken, DomainError> {
        let claims = JwtClaims::new(user, self.config.lifetime()?)?;

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    fn validate(&self, token: &str) -> Result<JwtClaims, DomainError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| DomainError::unauthorized("Invalid or expired token"))?;

        Ok(token_data.claims)
    }

    fn expiration_hours(&self) -> u64 {
        self.config.expiration_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserRole;

    fn create_test_user() -> User {
        User::new("admin", "admin@example.com", "hashed_password", UserRole::Admin).with_id(7)
    }

    fn create_service() -> JwtService {
        JwtService::new(JwtConfig::new("test-secret-key-12345", 24))
    }

    #[test]
    fn test_generate_and_validate() {
        let service = create_service();
        let user = create_test_user();

        let issued = service.generate(&user).unwrap();
        assert!(!issued.token.is_empty());
        assert!(issued.expires_at > Utc::now() + Duration::hours(23));

        let claims = service.validate(&issued.token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > Utc::now().timestamp());
        assert_eq!(claims.expires_at(), issued.expires_at);
    }

    #[test]
    fn test_tokens_are_unique() {
        let service = create_service();
        let user = create_test_user();

        let first = service.validate(&service.generate(&user).unwrap().token).unwrap();
        let second = service.validate(&service.generate(&user).unwrap().token).unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_invalid_token() {
        let service = create_service();

        let result = service.validate("invalid-token");
        assert!(matches!(result, Err(DomainError::Unauthorized { .. })));
    }

    #[test]
    fn test_wrong_secret() {
        let signer = JwtService::new(JwtConfig::new("secret-1", 24));
        let verifier = JwtService::new(JwtConfig::new("secret-2", 24));

        let token = signer.generate(&create_test_user()).unwrap().token;

        assert!(verifier.validate(&token).is_err());
    }

    #[test]
    fn test_expired_token() {
        let service = JwtService::new(JwtConfig::new("test-secret", 24));

        let past_time = Utc::now() - Duration::hours(1);
        let claims = JwtClaims {
            sub: "7".to_string(),
            username: "admin".to_string(),
            role: "admin".to_string(),
            iat: (past_time - Duration::hours(2)).timestamp(),
            exp: past_time.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(service.validate(&token).is_err());
    }

    #[test]
    fn test_non_numeric_subject() {
        let mut claims = JwtClaims::new(&create_test_user(), Duration::hours(1)).unwrap();
        claims.sub = "admin".to_string();

        assert!(claims.user_id().is_err());
    }

    #[test]
    fn test_out_of_range_expiration_is_a_configuration_error() {
        let too_long = JwtConfig::new("secret", u64::MAX);
        assert!(matches!(
            too_long.lifetime(),
            Err(DomainError::Configuration { .. })
        ));

        let past_chrono_range = JwtService::new(JwtConfig::new("secret", u64::from(u32::MAX)));
        assert!(matches!(
            past_chrono_range.generate(&create_test_user()),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_expiration_hours() {
        let service = JwtService::new(JwtConfig::new("secret", 48));
        assert_eq!(service.expiration_hours(), 48);
    }
}
