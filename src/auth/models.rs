use serde::{Deserialize, Serialize};

/// Claims carried by identity tokens. `sub` is the externally issued user id.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,           // User ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>, // Email, when the provider includes it
    pub iat: usize,            // Issued at
    pub exp: usize,            // Expiration
}
