use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;

/// Fixed validity window for issued tokens.
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject (username)
    pub exp: usize,  // Expiration time (as UTC timestamp)
    pub iat: usize,  // Issued at
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Username required")]
    MissingSubject,
    #[error("JWT secret is required in production mode (set JWT_SECRET)")]
    MissingSecret,
    /// Malformed, tampered and expired tokens all collapse here. Keep it
    /// that way: callers must not be able to tell the cases apart.
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Failed to generate token")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}

/// Resolve the process-wide signing secret, established once at startup.
///
/// Precedence: JWT_SECRET environment variable, then the config value.
/// An empty string at either source counts as absent. With no secret,
/// production mode fails fast; otherwise a random key is generated for
/// this process's lifetime (restarting invalidates all issued tokens).
pub fn resolve_secret(config: &AuthConfig, production: bool) -> Result<String, AuthError> {
    pick_secret(std::env::var("JWT_SECRET").ok(), config, production)
}

fn pick_secret(
    env_secret: Option<String>,
    config: &AuthConfig,
    production: bool,
) -> Result<String, AuthError> {
    let supplied = env_secret
        .filter(|s| !s.trim().is_empty())
        .or_else(|| {
            config
                .jwt_secret
                .clone()
                .filter(|s| !s.trim().is_empty())
        });

    match supplied {
        Some(secret) => Ok(secret),
        None if production => Err(AuthError::MissingSecret),
        None => {
            let generated: [u8; 32] = rand::random();
            tracing::warn!(
                "No JWT secret supplied; generated an ephemeral one. \
                 Issued tokens will not survive a restart."
            );
            Ok(hex::encode(generated))
        }
    }
}

/// Stateless token authority: issues and verifies signed, time-bounded
/// bearer tokens. Holds no record of issued tokens - validity is
/// self-contained in the token's signed expiry.
pub struct TokenService {
    jwt_secret: String,
    validity: Duration,
}

impl TokenService {
    pub fn new(jwt_secret: String) -> Self {
        Self::with_validity(jwt_secret, Duration::hours(TOKEN_VALIDITY_HOURS))
    }

    /// Construct with an explicit validity window. Tests use this to
    /// force already-expired tokens.
    pub fn with_validity(jwt_secret: String, validity: Duration) -> Self {
        Self {
            jwt_secret,
            validity,
        }
    }

    /// Issue a token binding the subject and the issuance time.
    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        if subject.trim().is_empty() {
            return Err(AuthError::MissingSubject);
        }

        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + self.validity).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(AuthError::Encoding)
    }

    /// Verify signature and expiry against the process secret.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
