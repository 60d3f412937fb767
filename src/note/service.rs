use sqlx::PgPool;
use tracing::{debug, info};

use super::models::{CreateNoteDto, Note, NoteListQuery, UpdateNoteDto};
use crate::errors::AppError;
use crate::models::MAX_PAGE_SIZE;
use crate::user::service::UserService;

/// Service layer for notes.
pub struct NoteService;

impl NoteService {
    pub async fn create_note(
        pool: &PgPool,
        user_id: &str,
        dto: CreateNoteDto,
    ) -> Result<Note, AppError> {
        UserService::ensure_exists(pool, user_id).await?;

        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (user_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, content, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&dto.title)
        .bind(&dto.content)
        .fetch_one(pool)
        .await?;

        info!(user_id = %user_id, note_id = note.id, "note created");
        Ok(note)
    }

    pub async fn get_note(pool: &PgPool, user_id: &str, note_id: i64) -> Result<Note, AppError> {
        sqlx::query_as::<_, Note>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM notes
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(note_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Note not found".to_string()))
    }

    /// The user's notes, newest first
    pub async fn list_notes(
        pool: &PgPool,
        user_id: &str,
        query: &NoteListQuery,
    ) -> Result<Vec<Note>, AppError> {
        sqlx::query_as::<_, Note>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM notes
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(query.limit.clamp(1, MAX_PAGE_SIZE))
        .bind(query.offset.max(0))
        .fetch_all(pool)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))
    }

    /// Partial update. `updated_at` advances even when no field is supplied.
    pub async fn update_note(
        pool: &PgPool,
        user_id: &str,
        note_id: i64,
        dto: UpdateNoteDto,
    ) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes SET
                title = COALESCE($3::text, title),
                content = COALESCE($4::text, content),
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, content, created_at, updated_at
            "#,
        )
        .bind(note_id)
        .bind(user_id)
        .bind(&dto.title)
        .bind(&dto.content)
        .fetch_optional(pool)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

        debug!(user_id = %user_id, note_id, "note updated");
        Ok(note)
    }

    /// Delete a note. Returns false when no note matches both id and owner.
    pub async fn delete_note(pool: &PgPool, user_id: &str, note_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(note_id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }
}
