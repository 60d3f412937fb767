use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, info};

use super::models::{CreateTransactionDto, Transaction, TransactionFilters, UpdateTransactionDto};
use crate::errors::AppError;
use crate::models::MAX_PAGE_SIZE;
use crate::user::service::UserService;

/// Number of entries in the dashboard's "recent activity" list
pub const RECENT_TRANSACTIONS_LIMIT: i64 = 5;

/// Service layer for transaction records.
/// Every query is scoped by owner; a record owned by someone else is treated as missing.
pub struct TransactionService;

impl TransactionService {
    /// Create a transaction for an existing user.
    pub async fn create_transaction(
        pool: &PgPool,
        user_id: &str,
        dto: CreateTransactionDto,
    ) -> Result<Transaction, AppError> {
        UserService::ensure_exists(pool, user_id).await?;

        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions
                (user_id, transaction_type, amount, category, description, transaction_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, transaction_type, amount, category, description,
                      transaction_date, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(dto.transaction_type.as_str())
        .bind(dto.amount)
        .bind(dto.category.as_str())
        .bind(&dto.description)
        .bind(dto.transaction_date)
        .fetch_one(pool)
        .await?;

        info!(user_id = %user_id, transaction_id = transaction.id, "transaction created");
        Ok(transaction)
    }

    /// Get a single transaction by ID
    pub async fn get_transaction(
        pool: &PgPool,
        user_id: &str,
        transaction_id: i64,
    ) -> Result<Transaction, AppError> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, transaction_type, amount, category, description,
                   transaction_date, created_at, updated_at
            FROM transactions
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(transaction_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))
    }

    /// List transactions with filters, newest business date first
    pub async fn list_transactions(
        pool: &PgPool,
        user_id: &str,
        filters: &TransactionFilters,
    ) -> Result<(Vec<Transaction>, i64), AppError> {
        let limit = filters.limit.clamp(1, MAX_PAGE_SIZE);
        let offset = filters.offset.max(0);
        let transaction_type = filters.transaction_type.map(|t| t.as_str());
        let category = filters.category.map(|c| c.as_str());

        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, transaction_type, amount, category, description,
                   transaction_date, created_at, updated_at
            FROM transactions
            WHERE user_id = $1
              AND ($2::text IS NULL OR transaction_type = $2)
              AND ($3::text IS NULL OR category = $3)
              AND ($4::timestamptz IS NULL OR transaction_date >= $4)
              AND ($5::timestamptz IS NULL OR transaction_date <= $5)
            ORDER BY transaction_date DESC, id ASC
            LIMIT $6 OFFSET $7
            "#,
        )
        .bind(user_id)
        .bind(transaction_type)
        .bind(category)
        .bind(filters.start_date)
        .bind(filters.end_date)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM transactions
            WHERE user_id = $1
              AND ($2::text IS NULL OR transaction_type = $2)
              AND ($3::text IS NULL OR category = $3)
              AND ($4::timestamptz IS NULL OR transaction_date >= $4)
              AND ($5::timestamptz IS NULL OR transaction_date <= $5)
            "#,
        )
        .bind(user_id)
        .bind(transaction_type)
        .bind(category)
        .bind(filters.start_date)
        .bind(filters.end_date)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok((transactions, total))
    }

    /// All transactions dated within `[start, end]` (both ends inclusive),
    /// newest business date first, ties in insertion order.
    pub async fn list_in_range(
        pool: &PgPool,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, AppError> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, transaction_type, amount, category, description,
                   transaction_date, created_at, updated_at
            FROM transactions
            WHERE user_id = $1
              AND transaction_date >= $2
              AND transaction_date <= $3
            ORDER BY transaction_date DESC, id ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))
    }

    /// Every transaction the user owns, unbounded by date
    pub async fn list_all(pool: &PgPool, user_id: &str) -> Result<Vec<Transaction>, AppError> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, transaction_type, amount, category, description,
                   transaction_date, created_at, updated_at
            FROM transactions
            WHERE user_id = $1
            ORDER BY transaction_date DESC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))
    }

    /// Most recently created transactions (by record creation, not business date)
    pub async fn list_recent(
        pool: &PgPool,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<Transaction>, AppError> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, transaction_type, amount, category, description,
                   transaction_date, created_at, updated_at
            FROM transactions
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))
    }

    /// Partial update: only supplied fields change, `updated_at` always advances.
    /// A description sent as `null` is cleared.
    pub async fn update_transaction(
        pool: &PgPool,
        user_id: &str,
        transaction_id: i64,
        dto: UpdateTransactionDto,
    ) -> Result<Transaction, AppError> {
        let description_supplied = dto.description.is_some();

        let updated = sqlx::query_as::<_, Transaction>(
            r#"
            UPDATE transactions SET
                transaction_type = COALESCE($3::text, transaction_type),
                amount = COALESCE($4::numeric, amount),
                category = COALESCE($5::text, category),
                description = CASE WHEN $8::boolean THEN $6::text ELSE description END,
                transaction_date = COALESCE($7::timestamptz, transaction_date),
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, transaction_type, amount, category, description,
                      transaction_date, created_at, updated_at
            "#,
        )
        .bind(transaction_id)
        .bind(user_id)
        .bind(dto.transaction_type.map(|t| t.as_str()))
        .bind(dto.amount)
        .bind(dto.category.map(|c| c.as_str()))
        .bind(dto.description.flatten())
        .bind(dto.transaction_date)
        .bind(description_supplied)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))?;

        debug!(user_id = %user_id, transaction_id, "transaction updated");
        Ok(updated)
    }

    /// Delete a transaction. Returns false when no record matches both id and owner.
    pub async fn delete_transaction(
        pool: &PgPool,
        user_id: &str,
        transaction_id: i64,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1 AND user_id = $2")
            .bind(transaction_id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let deleted = result.rows_affected() == 1;
        if deleted {
            info!(user_id = %user_id, transaction_id, "transaction deleted");
        }
        Ok(deleted)
    }
}
