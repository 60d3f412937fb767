use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};

use crate::errors::AppError;

use super::models::TokenClaims;

pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 60;

/// Sign a token the same way the identity provider does (HS256, shared secret).
/// Used by local tooling and tests; production tokens come from the provider.
pub fn issue_token(
    user_id: &str,
    email: Option<&str>,
    jwt_secret: &Secret<String>,
) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES);

    let claims = TokenClaims {
        sub: user_id.to_string(),
        email: email.map(str::to_string),
        iat: now.timestamp() as usize,
        exp: expires_at.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.expose_secret().as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Failed to create token: {e}")))
}

/// Decode and validate an identity token
pub fn decode_token(token: &str, jwt_secret: &Secret<String>) -> Result<TokenClaims, AppError> {
    // Providers stamp their own audience; the signature and expiry are what we check
    let mut validation = Validation::default();
    validation.validate_aud = false;

    let claims = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.expose_secret().as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {e}")))?;

    if claims.sub.trim().is_empty() {
        return Err(AppError::Unauthorized(
            "Token has no subject".to_string(),
        ));
    }

    Ok(claims)
}
