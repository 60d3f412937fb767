use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::models::default_limit;

/// Transaction type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received
    Income,
    /// Money spent
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

/// Closed set of transaction categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Dd,
    Add,
    Pad,
    Pbh,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Dd,
        Category::Add,
        Category::Pad,
        Category::Pbh,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dd => "DD",
            Category::Add => "ADD",
            Category::Pad => "PAD",
            Category::Pbh => "PBH",
            Category::Other => "OTHER",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

const MAX_DESCRIPTION_LEN: usize = 500;

/// Largest amount a `NUMERIC(12, 2)` column holds
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, 2);

/// Amounts are stored exactly: positive, at most two decimal places, within column range.
fn validate_amount_value(amount: &Decimal) -> Result<(), ValidationError> {
    let error = |code: &'static str, message: &'static str| -> Result<(), ValidationError> {
        Err(ValidationError::new(code).with_message(message.into()))
    };

    if *amount <= Decimal::ZERO {
        return error("amount_must_be_positive", "Amount must be positive");
    }
    if amount.normalize().scale() > 2 {
        return error(
            "amount_too_precise",
            "Amount cannot have more than two decimal places",
        );
    }
    if *amount > MAX_AMOUNT {
        return error("amount_too_large", "Amount cannot exceed 9999999999.99");
    }
    Ok(())
}

/// Database model for transactions
#[derive(Debug, Clone, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub user_id: String,
    pub transaction_type: String,
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub transaction_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Rows are constrained to valid types; expense is the fallback for anything else.
    pub fn get_type(&self) -> TransactionType {
        TransactionType::parse(&self.transaction_type).unwrap_or(TransactionType::Expense)
    }

    pub fn get_category(&self) -> Category {
        Category::parse(&self.category).unwrap_or_default()
    }
}

/// Transaction information returned in responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Unique transaction identifier
    #[schema(example = 42)]
    pub id: i64,
    /// Owning user
    pub user_id: String,
    /// Transaction type (income, expense)
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Transaction amount (always positive)
    #[schema(example = "1000.50")]
    pub amount: Decimal,
    /// Category code
    pub category: Category,
    /// Optional description
    #[schema(example = "Village fund disbursement")]
    pub description: Option<String>,
    /// Business date of the transaction
    pub transaction_date: DateTime<Utc>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            transaction_type: t.get_type(),
            category: t.get_category(),
            user_id: t.user_id,
            amount: t.amount,
            description: t.description,
            transaction_date: t.transaction_date,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Request body for creating a transaction
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionDto {
    /// Transaction type
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Transaction amount: positive, at most two decimal places
    #[validate(custom(function = "validate_amount_value"))]
    #[schema(example = "1000.50")]
    pub amount: Decimal,

    /// Category code
    pub category: Category,

    /// Optional description (max 500 chars)
    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    #[schema(example = "Village fund disbursement")]
    pub description: Option<String>,

    /// Business date of the transaction
    pub transaction_date: DateTime<Utc>,
}

/// Request body for updating a transaction (PATCH - all fields optional)
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionDto {
    /// Transaction type
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,

    /// Transaction amount
    #[schema(example = "250.25")]
    pub amount: Option<Decimal>,

    /// Category code
    pub category: Option<Category>,

    /// Description; an explicit `null` clears it, an absent field keeps it
    #[serde(default, deserialize_with = "crate::models::explicit_null")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    /// Business date
    pub transaction_date: Option<DateTime<Utc>>,
}

impl UpdateTransactionDto {
    /// Checks for the supplied fields that the derive cannot express.
    pub fn validate_patch(&self) -> Result<(), ValidationError> {
        if let Some(amount) = &self.amount {
            validate_amount_value(amount)?;
        }
        if let Some(Some(description)) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(ValidationError::new("length")
                    .with_message("Description cannot exceed 500 characters".into()));
            }
        }
        Ok(())
    }
}

/// Query parameters for listing transactions
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilters {
    /// Filter by type (income, expense)
    #[serde(rename = "type")]
    #[param(example = "expense")]
    pub transaction_type: Option<TransactionType>,
    /// Filter by category code
    pub category: Option<Category>,
    /// Only transactions dated on or after this instant
    pub start_date: Option<DateTime<Utc>>,
    /// Only transactions dated on or before this instant
    pub end_date: Option<DateTime<Utc>>,

    /// Maximum results (1-100)
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    #[param(example = 50)]
    pub limit: i64,

    /// Number of results to skip
    #[validate(range(min = 0))]
    #[serde(default)]
    #[param(example = 0)]
    pub offset: i64,
}

impl Default for TransactionFilters {
    fn default() -> Self {
        Self {
            transaction_type: None,
            category: None,
            start_date: None,
            end_date: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedTransactionResponse {
    /// List of transactions
    pub data: Vec<TransactionResponse>,
    /// Total count matching filters
    #[schema(example = 100)]
    pub total: i64,
    /// Limit used
    #[schema(example = 50)]
    pub limit: i64,
    /// Offset used
    #[schema(example = 0)]
    pub offset: i64,
}

/// Path parameters for transaction ID
#[derive(Debug, Deserialize, IntoParams)]
pub struct TransactionIdPath {
    /// Transaction ID
    pub id: i64,
}
