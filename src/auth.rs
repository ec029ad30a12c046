/// JWT validation for hivelooks-service
///
/// Token issuance belongs to the external identity provider; this service
/// only validates RS256 access tokens and extracts the caller's identity.
/// The public key is loaded once at startup and immutable thereafter.
use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, TokenData, Validation};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// JWT algorithm - RS256 only, no symmetric fallback
const JWT_ALGORITHM: Algorithm = Algorithm::RS256;

/// Claims carried by access tokens issued by the identity provider
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type: "access" or "refresh"
    pub token_type: String,
    /// Email address
    pub email: String,
    /// Username
    pub username: String,
}

static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Initialize the validation key from a PEM-formatted RSA public key.
///
/// Must be called during startup before any token validation. Can only be
/// called once; subsequent calls return an error.
pub fn initialize_validation_key(public_key_pem: &str) -> Result<()> {
    let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
        .map_err(|e| anyhow!("Failed to parse RSA public key: {e}"))?;

    JWT_DECODING_KEY
        .set(decoding_key)
        .map_err(|_| anyhow!("JWT decoding key already initialized"))?;

    Ok(())
}

fn get_decoding_key() -> Result<&'static DecodingKey> {
    JWT_DECODING_KEY.get().ok_or_else(|| {
        anyhow!("JWT key not initialized. Call initialize_validation_key() during startup.")
    })
}

/// Validate and decode an access token.
///
/// Verifies the RS256 signature and expiration; rejects refresh tokens so
/// they cannot be replayed against the API.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let decoding_key = get_decoding_key()?;

    let mut validation = Validation::new(JWT_ALGORITHM);
    validation.validate_exp = true;

    let data = decode::<Claims>(token, decoding_key, &validation)
        .map_err(|e| anyhow!("Token validation failed: {e}"))?;

    if data.claims.token_type != "access" {
        return Err(anyhow!("Not an access token"));
    }

    Ok(data)
}
