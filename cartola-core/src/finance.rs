//! Finance record types produced by one statement extraction run

use serde::{Deserialize, Serialize};

/// "n/m" position of a charge inside a multi-payment purchase plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Installment {
    /// Current payment number (n)
    pub index: u32,
    /// Total number of payments (m)
    pub total: u32,
}

/// One structured row of a credit-card statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Date exactly as printed (dd/mm/yy or dd/mm/yyyy), not parsed
    pub date: String,
    /// Merchant/location text before the date, or the no-place sentinel
    pub place: String,
    /// Free text between the date and the last `$` on the line
    pub description: String,
    /// `None` when the amount string does not normalize to a number
    pub amount: Option<f64>,
    /// Description mentions the installment keyword
    pub is_installment: bool,
    /// Present only for installment rows with a trailing "n/m"
    pub installment: Option<Installment>,
    /// Category assigned by keyword lookup
    pub category: String,
}

impl Transaction {
    pub fn installment_index(&self) -> Option<u32> {
        self.installment.map(|i| i.index)
    }

    pub fn installment_total(&self) -> Option<u32> {
        self.installment.map(|i| i.total)
    }

    /// Amount with unparseable values counted as zero
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

/// One row of the per-category summary table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryRow {
    pub category: String,
    /// Sum of the category's parsed amounts
    pub total: f64,
    /// `total` rendered for display, e.g. "$200.000"
    pub formatted_total: String,
    /// `total / grand total`, rounded to 2 decimals
    pub share: f64,
}

/// Both tables derived from a single statement text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatementReport {
    pub transactions: Vec<Transaction>,
    pub summary: Vec<SummaryRow>,
}

impl StatementReport {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of every parsed amount in the transaction table
    pub fn grand_total(&self) -> f64 {
        self.transactions.iter().map(Transaction::amount_or_zero).sum()
    }
}
