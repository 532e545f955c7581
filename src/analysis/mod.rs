//! Extraction-to-insight pipeline: filter candidate lines, parse amounts,
//! categorize, aggregate, flag wasteful spending, compose advice.
//!
//! The pipeline is synchronous and holds no state across runs; each call
//! derives a fresh result from its input lines and performs no I/O.

pub mod advice;
pub mod amount;
pub mod summary;

use crate::models::category::Category;
use crate::models::report::{Analysis, Report};
use crate::models::transaction::Transaction;

/// Run the full analysis over lines of extracted statement text.
///
/// Lines that do not look like transactions are skipped, order is preserved
/// among those that do. A line that passes the filter but yields no parsable
/// amount is dropped silently; it never becomes a half-built transaction.
/// Zero surviving transactions is the `Analysis::Empty` terminal outcome,
/// which also covers empty input.
pub fn analyze<S: AsRef<str>>(lines: &[S]) -> Analysis {
    let transactions: Vec<Transaction> = lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| amount::is_transaction_line(line))
        .filter_map(|line| {
            let amount = amount::parse_amount(line)?;
            Some(Transaction {
                text: line.to_string(),
                amount,
                category: Category::categorize(line),
            })
        })
        .collect();

    if transactions.is_empty() {
        return Analysis::Empty;
    }

    let summary = summary::summarize(&transactions);
    let wasteful = summary::find_wasteful(&transactions);
    let advice = advice::compose(&summary, wasteful.len());

    Analysis::Report(Report {
        transactions,
        summary,
        wasteful,
        advice,
    })
}
