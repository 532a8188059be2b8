//! Per-category totals and shares of a transaction table.
//!
//! Rows without a parsed amount add nothing to their category's total, but
//! the category is still listed (with 0 if none of its rows parsed).

use cartola_core::{SummaryRow, Transaction};
use std::collections::BTreeMap;
use tracing::debug;

/// Group by category, largest total first. Equal totals keep category
/// name order. Shares are computed against the grand total of all groups
/// and rounded independently, so they need not add up to exactly 1.
pub fn summarize(txns: &[Transaction]) -> Vec<SummaryRow> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for t in txns {
        *totals.entry(t.category.as_str()).or_insert(0.0) += t.amount_or_zero();
    }

    let grand_total: f64 = totals.values().sum();
    let mut groups: Vec<(&str, f64)> = totals.into_iter().collect();
    groups.sort_by(|a, b| b.1.total_cmp(&a.1));

    debug!(categories = groups.len(), grand_total, "summarized transactions");

    groups
        .into_iter()
        .map(|(category, total)| SummaryRow {
            category: category.to_string(),
            total,
            formatted_total: format_currency(total),
            share: share_of(total, grand_total),
        })
        .collect()
}

/// `part / whole` rounded half-to-even at 2 decimals; 0 when `whole` is 0.
pub fn share_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    (part / whole * 100.0).round_ties_even() / 100.0
}

/// Whole pesos with `.` thousands separators: 200000.0 → "$200.000".
pub fn format_currency(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("${sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(category: &str, amount: Option<f64>) -> Transaction {
        Transaction {
            date: "05/03/24".to_string(),
            place: "SIN LUGAR".to_string(),
            description: String::new(),
            amount,
            is_installment: false,
            installment: None,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_two_categories_shares_and_format() {
        let txns = vec![
            txn("SUPERMERCADO", Some(100_000.0)),
            txn("VUELOS", Some(700_000.0)),
            txn("SUPERMERCADO", Some(200_000.0)),
        ];
        let summary = summarize(&txns);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].category, "VUELOS");
        assert_eq!(summary[0].formatted_total, "$700.000");
        assert_eq!(summary[0].share, 0.70);
        assert_eq!(summary[1].category, "SUPERMERCADO");
        assert_eq!(summary[1].total, 300_000.0);
        assert_eq!(summary[1].formatted_total, "$300.000");
        assert_eq!(summary[1].share, 0.30);
    }

    #[test]
    fn test_missing_amounts_count_as_nothing() {
        let txns = vec![
            txn("CONSUMO", Some(1000.0)),
            txn("CONSUMO", None),
            txn("SII", None),
        ];
        let summary = summarize(&txns);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].total, 1000.0);
        assert_eq!(summary[0].share, 1.0);
        assert_eq!(summary[1].category, "SII");
        assert_eq!(summary[1].total, 0.0);
        assert_eq!(summary[1].formatted_total, "$0");
    }

    #[test]
    fn test_ties_ordered_by_name() {
        let txns = vec![txn("ZETA", Some(5.0)), txn("ALFA", Some(5.0)), txn("MEDIO", Some(9.0))];
        let names: Vec<_> = summarize(&txns).into_iter().map(|r| r.category).collect();
        assert_eq!(names, vec!["MEDIO", "ALFA", "ZETA"]);
    }

    #[test]
    fn test_shares_round_independently() {
        let txns = vec![txn("A", Some(1.0)), txn("B", Some(1.0)), txn("C", Some(1.0))];
        let summary = summarize(&txns);
        assert!(summary.iter().all(|r| r.share == 0.33));
    }

    #[test]
    fn test_zero_grand_total() {
        let summary = summarize(&[txn("CONSUMO", None)]);
        assert_eq!(summary[0].share, 0.0);
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(200_000.0), "$200.000");
        assert_eq!(format_currency(1_234_567.89), "$1.234.568");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1000.0), "$1.000");
        assert_eq!(format_currency(-25_000.0), "$-25.000");
        assert_eq!(format_currency(0.0), "$0");
    }
}
