use rust_decimal::Decimal;

use crate::models::category::Category;
use crate::models::report::CategoryTotal;
use crate::models::transaction::Transaction;

/// Amounts below this mark a Shopping transaction as impulse spending.
const IMPULSE_SHOPPING_LIMIT: u32 = 500;

/// Group transactions by category and rank the totals in descending order.
///
/// Entries are accumulated in first-seen category order and the sort is
/// stable, so equal totals keep that order. Total conservation holds exactly
/// because amounts are `Decimal`.
pub fn summarize(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions {
        match totals.iter_mut().find(|t| t.category == transaction.category) {
            Some(entry) => entry.total += transaction.amount,
            None => totals.push(CategoryTotal {
                category: transaction.category,
                total: transaction.amount,
            }),
        }
    }

    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Indices of transactions flagged as likely unnecessary spending: any
/// Entertainment transaction, or a Shopping transaction under the impulse
/// limit. Evaluated per transaction, no cross-transaction state.
pub fn find_wasteful(transactions: &[Transaction]) -> Vec<usize> {
    transactions
        .iter()
        .enumerate()
        .filter(|(_, t)| {
            t.category == Category::Entertainment
                || (t.category == Category::Shopping
                    && t.amount < Decimal::from(IMPULSE_SHOPPING_LIMIT))
        })
        .map(|(i, _)| i)
        .collect()
}
