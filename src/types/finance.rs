//! Financial record types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// What kind of money movement a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialKind {
    Income,
    Expense,
    Invoice,
    Payment,
}

/// Settlement state of a financial record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Pending,
    Completed,
    Overdue,
    Cancelled,
}

/// A single income/expense/invoice/payment entry
///
/// Financial records are a flat list; they are not linked to contacts at the
/// storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FinancialKind,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FinancialRecord {
    /// Create a record dated today, pending, in the given currency
    pub fn new(kind: FinancialKind, amount: f64, currency: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            kind,
            amount,
            currency: currency.into(),
            category: String::new(),
            date: now.date_naive(),
            status: RecordStatus::Pending,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
