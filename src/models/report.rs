use rust_decimal::Decimal;
use serde::Serialize;

use super::category::Category;
use super::transaction::Transaction;

/// Indicator shown by the host when a document yields no transactions.
pub const NO_TRANSACTIONS_DETECTED: &str = "No valid transactions detected";

/// Total spending for one category present among the transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Complete output of one analysis run.
///
/// `wasteful` holds indices into `transactions` rather than copies, so the
/// wasteful view is always a subset of the transaction list by identity.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub transactions: Vec<Transaction>,
    pub summary: Vec<CategoryTotal>,
    pub wasteful: Vec<usize>,
    pub advice: String,
}

impl Report {
    pub fn wasteful_transactions(&self) -> Vec<&Transaction> {
        self.wasteful.iter().map(|&i| &self.transactions[i]).collect()
    }
}

/// Outcome of an analysis run. Empty input and no qualifying lines both land
/// on `Empty`; it is a normal terminal outcome, not an error.
#[derive(Debug, Clone, Serialize)]
pub enum Analysis {
    Empty,
    Report(Report),
}

impl Analysis {
    pub fn as_report(&self) -> Option<&Report> {
        match self {
            Analysis::Empty => None,
            Analysis::Report(report) => Some(report),
        }
    }
}
