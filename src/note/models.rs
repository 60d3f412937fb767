use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::default_limit;

/// Database model for notes
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Note returned in responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    #[schema(example = 7)]
    pub id: i64,
    pub user_id: String,
    #[schema(example = "Quarterly review")]
    pub title: String,
    #[schema(example = "Expenses under PAD ran higher than planned.")]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            user_id: n.user_id,
            title: n.title,
            content: n.content,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

/// Request body for creating a note
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNoteDto {
    /// Title (1-200 characters)
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Free-form content
    #[validate(length(max = 10000, message = "Content cannot exceed 10000 characters"))]
    pub content: String,
}

/// Request body for updating a note (PATCH - all fields optional)
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateNoteDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 10000, message = "Content cannot exceed 10000 characters"))]
    pub content: Option<String>,
}

/// Pagination for note listings
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct NoteListQuery {
    /// Maximum results (1-100)
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    #[param(example = 50)]
    pub limit: i64,

    /// Number of results to skip
    #[validate(range(min = 0))]
    #[serde(default)]
    #[param(example = 0)]
    pub offset: i64,
}

/// Path parameters for note ID
#[derive(Debug, Deserialize, IntoParams)]
pub struct NoteIdPath {
    /// Note ID
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_note_requires_title() {
        let dto = CreateNoteDto {
            title: String::new(),
            content: "body".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpdateNoteDto::default().validate().is_ok());
    }

    #[test]
    fn test_list_query_defaults() {
        let query: NoteListQuery = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(query.limit, 50);
        assert_eq!(query.offset, 0);
    }
}
