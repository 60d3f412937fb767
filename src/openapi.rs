use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::dashboard::models::DashboardData;
use crate::errors::ErrorResponse;
use crate::models::DeleteResponse;
use crate::note::models::{CreateNoteDto, NoteResponse, UpdateNoteDto};
use crate::report::models::ReportData;
use crate::report::period::ReportPeriod;
use crate::transaction::models::{
    Category, CreateTransactionDto, PaginatedTransactionResponse, TransactionResponse,
    TransactionType, UpdateTransactionDto,
};
use crate::user::models::{CreateUserDto, UserResponse};

/// Security scheme modifier for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Identity provider token; `sub` is the user id"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation configuration
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ledgerly API",
        version = "0.1.0",
        description = "Personal finance records, dashboard and period reports",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User records keyed by identity provider subject"),
        (name = "Transactions", description = "Income and expense records"),
        (name = "Notes", description = "Free-form notes"),
        (name = "Dashboard", description = "All-time and monthly overview"),
        (name = "Reports", description = "Period reports with category breakdowns")
    ),
    paths(
        crate::routes::health_check,
        // User endpoints
        crate::user::handlers::create_user,
        crate::user::handlers::get_current_user,
        crate::user::handlers::delete_current_user,
        // Transaction endpoints
        crate::transaction::handlers::list_transactions,
        crate::transaction::handlers::get_transaction,
        crate::transaction::handlers::create_transaction,
        crate::transaction::handlers::update_transaction,
        crate::transaction::handlers::delete_transaction,
        // Note endpoints
        crate::note::handlers::list_notes,
        crate::note::handlers::get_note,
        crate::note::handlers::create_note,
        crate::note::handlers::update_note,
        crate::note::handlers::delete_note,
        // Aggregates
        crate::dashboard::handlers::get_dashboard,
        crate::report::handlers::generate_report,
    ),
    components(
        schemas(
            ErrorResponse,
            DeleteResponse,
            // User schemas
            CreateUserDto,
            UserResponse,
            // Transaction schemas
            TransactionType,
            Category,
            TransactionResponse,
            PaginatedTransactionResponse,
            CreateTransactionDto,
            UpdateTransactionDto,
            // Note schemas
            NoteResponse,
            CreateNoteDto,
            UpdateNoteDto,
            // Aggregate schemas
            DashboardData,
            ReportPeriod,
            ReportData,
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;
