use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

use super::aggregate::Totals;
use super::period::{DateRange, ReportPeriod};
use crate::transaction::models::{Category, Transaction, TransactionResponse};

/// Query parameters for generating a report
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    /// weekly, monthly, yearly or custom
    #[param(example = "monthly")]
    pub period: ReportPeriod,
    /// Required for custom period (inclusive)
    pub start_date: Option<DateTime<Utc>>,
    /// Required for custom period (inclusive)
    pub end_date: Option<DateTime<Utc>>,
}

/// Aggregated report over a resolved date range
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub period: ReportPeriod,
    /// Resolved range start (inclusive)
    pub start_date: DateTime<Utc>,
    /// Resolved range end (inclusive)
    pub end_date: DateTime<Utc>,
    #[schema(example = "1500.50")]
    pub total_income: Decimal,
    #[schema(example = "351.00")]
    pub total_expenses: Decimal,
    #[schema(example = "1149.50")]
    pub net_balance: Decimal,
    /// Every transaction in range, newest business date first
    pub transactions: Vec<TransactionResponse>,
    /// Income per category code; every category is present
    pub income_by_category: BTreeMap<Category, Decimal>,
    /// Expenses per category code; every category is present
    pub expenses_by_category: BTreeMap<Category, Decimal>,
}

impl ReportData {
    pub fn new(
        period: ReportPeriod,
        range: DateRange,
        totals: Totals,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            period,
            start_date: range.start,
            end_date: range.end,
            total_income: totals.total_income,
            total_expenses: totals.total_expenses,
            net_balance: totals.net_balance,
            transactions: transactions.into_iter().map(Into::into).collect(),
            income_by_category: totals.income_by_category,
            expenses_by_category: totals.expenses_by_category,
        }
    }
}
