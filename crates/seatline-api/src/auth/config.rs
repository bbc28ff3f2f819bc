// Authentication configuration loaded from environment variables.
// Decision: AUTH_ prefix for all auth config
// Decision: Tokens default to a 7 day lifetime, matching the web client's
// login cadence

use std::time::Duration;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing JWTs
    pub secret: String,
    /// Access token lifetime
    pub token_lifetime: Duration,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            token_lifetime: Duration::from_secs(7 * 24 * 60 * 60),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("AUTH_JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("AUTH_JWT_SECRET not set, generating a random dev secret");
            use rand::Rng;
            let bytes: [u8; 32] = rand::thread_rng().gen();
            hex::encode(bytes)
        });

        let token_lifetime = std::env::var("AUTH_TOKEN_LIFETIME")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(7 * 24 * 60 * 60));

        Self {
            jwt: JwtConfig {
                secret,
                token_lifetime,
            },
        }
    }
}
