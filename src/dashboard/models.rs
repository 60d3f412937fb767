use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::summary::DashboardTotals;
use crate::transaction::models::{Transaction, TransactionResponse};

/// Dashboard overview for the signed-in user
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// All-time income
    #[schema(example = "1500.50")]
    pub total_income: Decimal,
    /// All-time expenses
    #[schema(example = "351.00")]
    pub total_expenses: Decimal,
    /// All-time income minus expenses
    #[schema(example = "1149.50")]
    pub current_balance: Decimal,
    /// Income dated in the current calendar month
    #[schema(example = "1000.50")]
    pub monthly_income: Decimal,
    /// Expenses dated in the current calendar month
    #[schema(example = "250.25")]
    pub monthly_expenses: Decimal,
    /// Most recently created transactions
    pub recent_transactions: Vec<TransactionResponse>,
}

impl DashboardData {
    pub fn new(totals: DashboardTotals, recent: Vec<Transaction>) -> Self {
        Self {
            total_income: totals.total_income,
            total_expenses: totals.total_expenses,
            current_balance: totals.current_balance,
            monthly_income: totals.monthly_income,
            monthly_expenses: totals.monthly_expenses,
            recent_transactions: recent.into_iter().map(Into::into).collect(),
        }
    }
}
