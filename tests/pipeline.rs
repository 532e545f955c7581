//! End-to-end tests for the extraction-to-insight pipeline: raw statement
//! lines in, transactions / summary / wasteful set / advice out.

use rust_decimal::Decimal;
use statement_insight::analysis::advice::NO_DATA_ADVICE;
use statement_insight::{Analysis, Category, Report, analyze};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn report(lines: &[&str]) -> Report {
    match analyze(lines) {
        Analysis::Report(report) => report,
        Analysis::Empty => panic!("expected a report for {lines:?}"),
    }
}

#[test]
fn mixed_statement_keeps_only_transaction_lines() {
    let report = report(&[
        "Paid to SUPERMARKET 245.50",
        "random header text",
        "UBER RIDE 120.00",
    ]);

    assert_eq!(report.transactions.len(), 2);
    assert_eq!(report.transactions[0].amount, dec("245.50"));
    assert_eq!(report.transactions[0].category, Category::Grocery);
    assert_eq!(report.transactions[1].amount, dec("120.00"));
    assert_eq!(report.transactions[1].category, Category::Travel);

    assert_eq!(report.summary.len(), 2);
    assert_eq!(report.summary[0].category, Category::Grocery);
    assert_eq!(report.summary[0].total, dec("245.50"));
    assert_eq!(report.summary[1].category, Category::Travel);
    assert_eq!(report.summary[1].total, dec("120.00"));

    assert!(report.wasteful.is_empty());
    assert!(report.advice.contains("Highest spending category: **Grocery**"));
    assert!(report.advice.contains("Wasteful transactions: **0**"));
}

#[test]
fn entertainment_and_small_shopping_are_flagged() {
    let report = report(&["NETFLIX SUBSCRIPTION 499.00", "AMAZON ORDER 350.00"]);

    assert_eq!(report.wasteful, vec![0, 1]);
    let flagged = report.wasteful_transactions();
    assert_eq!(flagged[0].category, Category::Entertainment);
    assert_eq!(flagged[1].category, Category::Shopping);

    let totals: Vec<Decimal> = report.summary.iter().map(|t| t.total).collect();
    assert_eq!(totals, vec![dec("499.00"), dec("350.00")]);
    assert!(report.advice.contains("Wasteful transactions: **2**"));
}

#[test]
fn empty_input_is_the_no_data_outcome() {
    let lines: [&str; 0] = [];
    assert!(matches!(analyze(&lines), Analysis::Empty));
}

#[test]
fn noise_only_input_matches_the_empty_outcome() {
    assert!(matches!(analyze(&["random text no amount"]), Analysis::Empty));
}

#[test]
fn comma_grouping_and_rule_order() {
    let report = report(&["Grocery bill 1,234.56"]);

    assert_eq!(report.transactions[0].amount, dec("1234.56"));
    // The line matches both the Grocery and Bills keyword groups; the
    // earlier group wins.
    assert_eq!(report.transactions[0].category, Category::Grocery);
}

#[test]
fn summary_totals_conserve_the_transaction_sum() {
    let report = report(&[
        "milk 12.30",
        "NETFLIX 499.00",
        "water bill 89.99",
        "AMAZON 1,250.00",
        "vegetable market 45.05",
        "unknown payee 7.77",
    ]);

    let summary_sum: Decimal = report.summary.iter().map(|t| t.total).sum();
    let txn_sum: Decimal = report.transactions.iter().map(|t| t.amount).sum();
    assert_eq!(summary_sum, txn_sum);

    // Non-increasing ranking.
    for pair in report.summary.windows(2) {
        assert!(pair[0].total >= pair[1].total);
    }
}

#[test]
fn wasteful_is_a_subset_satisfying_the_heuristic() {
    let report = report(&[
        "NETFLIX 2,000.00",
        "AMAZON ORDER 499.99",
        "AMAZON ORDER 500.00",
        "milk 20.00",
    ]);

    let limit = Decimal::from(500);
    for &i in &report.wasteful {
        let t = &report.transactions[i];
        assert!(
            t.category == Category::Entertainment
                || (t.category == Category::Shopping && t.amount < limit)
        );
    }
    // Entertainment at any amount, Shopping only strictly under 500.
    assert_eq!(report.wasteful, vec![0, 1]);
}

#[test]
fn every_transaction_comes_from_a_qualifying_line() {
    let lines = [
        "page 3 of 7",
        "UPI REF 100",
        "swiggy order 250.00",
        "balance 1,000.5",
        "movie ticket 180.00",
    ];

    let report = report(&lines);
    assert_eq!(report.transactions.len(), 2);
    for t in &report.transactions {
        assert!(lines.contains(&t.text.as_str()));
    }
}

#[test]
fn one_fractional_digit_never_qualifies() {
    // Exactly-two-fractional-digits is the signal a line is a transaction.
    assert!(matches!(analyze(&["amount due 100.5"]), Analysis::Empty));

    // Three digits still qualify via the embedded two-digit prefix.
    let report = report(&["meter 100.456"]);
    assert_eq!(report.transactions[0].amount, dec("100.45"));
}

#[test]
fn advice_short_circuits_without_data() {
    use statement_insight::analysis::advice::compose;
    assert_eq!(compose(&[], 42), NO_DATA_ADVICE);
}

#[test]
fn determinism_same_lines_same_result() {
    let lines = ["ZOMATO 320.00", "OLA CAB 150.00", "NETFLIX 499.00"];

    let a = report(&lines);
    let b = report(&lines);
    assert_eq!(a.transactions.len(), b.transactions.len());
    for (x, y) in a.transactions.iter().zip(&b.transactions) {
        assert_eq!(x.category, y.category);
        assert_eq!(x.amount, y.amount);
    }
    assert_eq!(a.wasteful, b.wasteful);
    assert_eq!(a.advice, b.advice);
}
