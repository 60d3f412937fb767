use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::errors::{AppError, ErrorResponse};
use crate::extractors::AuthenticatedUser;

use super::models::DashboardData;
use super::service::DashboardService;

/// GET /dashboard - All-time and current-month totals plus recent activity
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard overview", body = DashboardData),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/dashboard")]
pub async fn get_dashboard(
    pool: web::Data<PgPool>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let dashboard = DashboardService::get_dashboard(pool.get_ref(), &auth.user_id, Utc::now()).await?;

    Ok(HttpResponse::Ok().json(dashboard))
}
