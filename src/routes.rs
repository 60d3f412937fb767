use actix_web::{error, get, web, HttpResponse, Responder};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::{dashboard, note, report, transaction, user};

/// Health check endpoint that verifies database connectivity
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database reachable"),
        (status = 503, description = "Database unreachable")
    )
)]
#[get("/health")]
pub async fn health_check(pool: web::Data<PgPool>) -> impl Responder {
    match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected"
        })),
        Err(_) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "database": "disconnected"
        })),
    }
}

/// Body/query/path extraction failures answer with the same JSON shape as other validation errors.
pub fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::ValidationError(err.to_string()))
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::ValidationError(err.to_string()))
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::ValidationError(err.to_string()))
    }));
}

/// Register every authenticated API route.
/// Order matters: specific routes before generic `{id}` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    extractor_configs(cfg);

    cfg.service(health_check)
        // User endpoints
        .service(user::get_current_user)
        .service(user::delete_current_user)
        // Transaction endpoints
        .service(transaction::list_transactions)
        .service(transaction::get_transaction)
        .service(transaction::create_transaction)
        .service(transaction::update_transaction)
        .service(transaction::delete_transaction)
        // Note endpoints
        .service(note::list_notes)
        .service(note::get_note)
        .service(note::create_note)
        .service(note::update_note)
        .service(note::delete_note)
        // Aggregates
        .service(dashboard::get_dashboard)
        .service(report::generate_report);
}
