use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::DashboardData;
use super::summary::summarize;
use crate::errors::AppError;
use crate::report::period::month_bounds;
use crate::transaction::service::{TransactionService, RECENT_TRANSACTIONS_LIMIT};
use crate::user::service::UserService;

pub struct DashboardService;

impl DashboardService {
    pub async fn get_dashboard(
        pool: &PgPool,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<DashboardData, AppError> {
        let (month_start, next_month_start) = month_bounds(now)
            .ok_or_else(|| AppError::InternalError(format!("No calendar month for {now}")))?;

        UserService::ensure_exists(pool, user_id).await?;

        let transactions = TransactionService::list_all(pool, user_id).await?;
        let totals = summarize(&transactions, month_start, next_month_start);

        let recent =
            TransactionService::list_recent(pool, user_id, RECENT_TRANSACTIONS_LIMIT).await?;

        Ok(DashboardData::new(totals, recent))
    }
}
