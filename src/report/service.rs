use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use super::aggregate::aggregate;
use super::models::{ReportData, ReportQuery};
use super::period::resolve_range;
use crate::errors::AppError;
use crate::transaction::service::TransactionService;
use crate::user::service::UserService;

/// Period reports over a user's transactions.
pub struct ReportService;

impl ReportService {
    /// Resolve the period against `now`, then total the transactions dated inside it.
    pub async fn generate_report(
        pool: &PgPool,
        user_id: &str,
        query: &ReportQuery,
        now: DateTime<Utc>,
    ) -> Result<ReportData, AppError> {
        let range = resolve_range(query.period, query.start_date, query.end_date, now)?;

        UserService::ensure_exists(pool, user_id).await?;

        let transactions =
            TransactionService::list_in_range(pool, user_id, range.start, range.end).await?;
        let totals = aggregate(&transactions);

        debug!(
            user_id = %user_id,
            period = ?query.period,
            count = transactions.len(),
            "report generated"
        );

        Ok(ReportData::new(query.period, range, totals, transactions))
    }
}
