use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::transaction::models::{Transaction, TransactionType};

/// All-time and current-month totals shown on the dashboard
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardTotals {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub current_balance: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
}

/// Sum all-time and monthly figures in one pass.
///
/// The monthly window is half-open: `month_start <= date < next_month_start`.
/// Every figure is rounded to cents.
pub fn summarize<'a, I>(
    transactions: I,
    month_start: DateTime<Utc>,
    next_month_start: DateTime<Utc>,
) -> DashboardTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals = DashboardTotals::default();

    for t in transactions {
        let in_month = month_start <= t.transaction_date && t.transaction_date < next_month_start;
        match t.get_type() {
            TransactionType::Income => {
                totals.total_income += t.amount;
                if in_month {
                    totals.monthly_income += t.amount;
                }
            }
            TransactionType::Expense => {
                totals.total_expenses += t.amount;
                if in_month {
                    totals.monthly_expenses += t.amount;
                }
            }
        }
    }

    totals.total_income = totals.total_income.round_dp(2);
    totals.total_expenses = totals.total_expenses.round_dp(2);
    totals.current_balance = (totals.total_income - totals.total_expenses).round_dp(2);
    totals.monthly_income = totals.monthly_income.round_dp(2);
    totals.monthly_expenses = totals.monthly_expenses.round_dp(2);
    totals
}
