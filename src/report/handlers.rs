use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::errors::{AppError, ErrorResponse};
use crate::extractors::AuthenticatedUser;

use super::models::{ReportData, ReportQuery};
use super::service::ReportService;

/// GET /reports - Totals and category breakdown for a period
#[utoipa::path(
    get,
    path = "/reports",
    tag = "Reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "Report for the resolved period", body = ReportData),
        (status = 400, description = "Missing or invalid dates for custom period", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/reports")]
pub async fn generate_report(
    pool: web::Data<PgPool>,
    auth: AuthenticatedUser,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse, AppError> {
    let report =
        ReportService::generate_report(pool.get_ref(), &auth.user_id, &query, Utc::now()).await?;

    Ok(HttpResponse::Ok().json(report))
}
