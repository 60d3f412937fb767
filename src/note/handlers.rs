use actix_web::{delete, get, patch, post, web, HttpResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::errors::{AppError, ErrorResponse};
use crate::extractors::AuthenticatedUser;
use crate::models::DeleteResponse;

use super::models::{CreateNoteDto, NoteIdPath, NoteListQuery, NoteResponse, UpdateNoteDto};
use super::service::NoteService;

/// GET /notes - List the caller's notes, newest first
#[utoipa::path(
    get,
    path = "/notes",
    tag = "Notes",
    params(NoteListQuery),
    responses(
        (status = 200, description = "List of notes", body = Vec<NoteResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/notes")]
pub async fn list_notes(
    pool: web::Data<PgPool>,
    auth: AuthenticatedUser,
    query: web::Query<NoteListQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let notes = NoteService::list_notes(pool.get_ref(), &auth.user_id, &query).await?;

    let response: Vec<NoteResponse> = notes.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// GET /notes/{id} - Get a specific note
#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "Notes",
    params(NoteIdPath),
    responses(
        (status = 200, description = "Note details", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/notes/{id}")]
pub async fn get_note(
    pool: web::Data<PgPool>,
    auth: AuthenticatedUser,
    path: web::Path<NoteIdPath>,
) -> Result<HttpResponse, AppError> {
    let note = NoteService::get_note(pool.get_ref(), &auth.user_id, path.id).await?;

    Ok(HttpResponse::Ok().json(NoteResponse::from(note)))
}

/// POST /notes - Create a note
#[utoipa::path(
    post,
    path = "/notes",
    tag = "Notes",
    request_body = CreateNoteDto,
    responses(
        (status = 201, description = "Note created", body = NoteResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/notes")]
pub async fn create_note(
    pool: web::Data<PgPool>,
    auth: AuthenticatedUser,
    body: web::Json<CreateNoteDto>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let note = NoteService::create_note(pool.get_ref(), &auth.user_id, body.into_inner()).await?;

    Ok(HttpResponse::Created().json(NoteResponse::from(note)))
}

/// PATCH /notes/{id} - Update a note's title and/or content
#[utoipa::path(
    patch,
    path = "/notes/{id}",
    tag = "Notes",
    params(NoteIdPath),
    request_body = UpdateNoteDto,
    responses(
        (status = 200, description = "Note updated", body = NoteResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[patch("/notes/{id}")]
pub async fn update_note(
    pool: web::Data<PgPool>,
    auth: AuthenticatedUser,
    path: web::Path<NoteIdPath>,
    body: web::Json<UpdateNoteDto>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let note =
        NoteService::update_note(pool.get_ref(), &auth.user_id, path.id, body.into_inner())
            .await?;

    Ok(HttpResponse::Ok().json(NoteResponse::from(note)))
}

/// DELETE /notes/{id} - Delete one of the caller's notes
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "Notes",
    params(NoteIdPath),
    responses(
        (status = 200, description = "Note deleted", body = DeleteResponse),
        (status = 404, description = "No note with this id for the caller", body = DeleteResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/notes/{id}")]
pub async fn delete_note(
    pool: web::Data<PgPool>,
    auth: AuthenticatedUser,
    path: web::Path<NoteIdPath>,
) -> Result<HttpResponse, AppError> {
    let deleted = NoteService::delete_note(pool.get_ref(), &auth.user_id, path.id).await?;

    Ok(DeleteResponse::into_response(deleted))
}
