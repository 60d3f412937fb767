mod jwt;
mod models;

// Re-export for use in extractors and integration tests
pub use jwt::{decode_token, issue_token, ACCESS_TOKEN_EXPIRY_MINUTES};
pub use models::TokenClaims;
