use sqlx::PgPool;
use tracing::info;

use super::models::{validate_user_id, User};
use crate::errors::AppError;

/// Service layer for user records.
pub struct UserService;

impl UserService {
    /// Create a user on first sign-in. Duplicate id or email is a conflict.
    pub async fn create_user(pool: &PgPool, id: &str, email: &str) -> Result<User, AppError> {
        validate_user_id(id)
            .map_err(|_| AppError::ValidationError("Invalid user identifier".to_string()))?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE id = $1 OR lower(email) = lower($2)",
        )
        .bind(id)
        .bind(email)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        if existing > 0 {
            return Err(AppError::Conflict(
                "User with this id or email already exists".to_string(),
            ));
        }

        // A concurrent insert can still win the race; the unique constraint
        // surfaces it as a conflict through From<sqlx::Error>.
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email)
            VALUES ($1, $2)
            RETURNING id, email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(email)
        .fetch_one(pool)
        .await?;

        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Get a user by id, if present
    pub async fn get_user(pool: &PgPool, id: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))
    }

    /// Fail with not-found unless the user exists
    pub async fn ensure_exists(pool: &PgPool, id: &str) -> Result<(), AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

        if !exists {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }

    /// Delete a user; their transactions and notes go with them.
    pub async fn delete_user(pool: &PgPool, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(user_id = %id, "user deleted");
        }
        Ok(deleted)
    }
}
