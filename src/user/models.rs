use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

lazy_static! {
    /// Identity-provider subjects: printable, no whitespace, at most 128 chars
    /// (e.g. "user_2abc", "google-oauth2|1234", UUIDs).
    static ref USER_ID_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9_\-|:.@]{1,128}$").expect("Invalid user id pattern");
}

/// Validate an externally issued user identifier
pub fn validate_user_id(id: &str) -> Result<(), ValidationError> {
    if USER_ID_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_user_id"))
    }
}

/// Database entity for users
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User information returned in responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Identifier issued by the identity provider
    #[schema(example = "user_2abc")]
    pub id: String,
    /// User's email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request body for registering the signed-in user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    /// User's email address
    #[validate(email(message = "Email must be a valid address"))]
    #[schema(example = "user@example.com")]
    pub email: String,
}
