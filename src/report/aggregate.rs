use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::transaction::models::{Category, Transaction, TransactionType};

/// Per-category sums, always carrying every category (zero when idle)
pub type CategoryTotals = BTreeMap<Category, Decimal>;

pub fn zeroed_categories() -> CategoryTotals {
    Category::ALL
        .into_iter()
        .map(|category| (category, Decimal::ZERO))
        .collect()
}

/// Income/expense totals with their category breakdowns
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_balance: Decimal,
    pub income_by_category: CategoryTotals,
    pub expenses_by_category: CategoryTotals,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            total_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            net_balance: Decimal::ZERO,
            income_by_category: zeroed_categories(),
            expenses_by_category: zeroed_categories(),
        }
    }
}

/// Reduce a transaction list in a single pass.
pub fn aggregate<'a, I>(transactions: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals = Totals::default();

    for t in transactions {
        let (total, buckets) = match t.get_type() {
            TransactionType::Income => (&mut totals.total_income, &mut totals.income_by_category),
            TransactionType::Expense => {
                (&mut totals.total_expenses, &mut totals.expenses_by_category)
            }
        };
        *total += t.amount;
        *buckets.entry(t.get_category()).or_insert(Decimal::ZERO) += t.amount;
    }

    totals.net_balance = totals.total_income - totals.total_expenses;
    totals
}
