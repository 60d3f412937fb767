use actix_web::{delete, get, post, web, HttpResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::errors::{AppError, ErrorResponse};
use crate::extractors::AuthenticatedUser;
use crate::models::DeleteResponse;

use super::models::{CreateUserDto, UserResponse};
use super::service::UserService;

/// POST /users - Register the signed-in user (first sign-in)
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "User id or email already registered", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/users")]
pub async fn create_user(
    pool: web::Data<PgPool>,
    auth: AuthenticatedUser,
    body: web::Json<CreateUserDto>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let user = UserService::create_user(pool.get_ref(), &auth.user_id, &body.email).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// GET /users/me - Get the signed-in user's record
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "User record", body = UserResponse),
        (status = 404, description = "User has not been created yet", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/users/me")]
pub async fn get_current_user(
    pool: web::Data<PgPool>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = UserService::get_user(pool.get_ref(), &auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// DELETE /users/me - Delete the signed-in user with all their records
#[utoipa::path(
    delete,
    path = "/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "User deleted", body = DeleteResponse),
        (status = 404, description = "User not found", body = DeleteResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/users/me")]
pub async fn delete_current_user(
    pool: web::Data<PgPool>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let deleted = UserService::delete_user(pool.get_ref(), &auth.user_id).await?;

    Ok(DeleteResponse::into_response(deleted))
}
