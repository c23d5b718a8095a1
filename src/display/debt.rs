//! Debt display formatting

use crate::models::{DebtRecord, Money};

/// Format the "Debts Owed to You" section
///
/// Rows are numbered by their position in the outstanding view, which is
/// what `ram debt delete` expects.
pub fn format_outstanding(outstanding: &[(usize, DebtRecord)], total: Money, symbol: &str) -> String {
    let mut output = String::from("Debts Owed to You\n");

    if outstanding.is_empty() {
        output.push_str("  No one owes you anything.\n");
    }

    for (view_position, (_, debt)) in outstanding.iter().enumerate() {
        output.push_str(&format!(
            "  [{}] {} owes you {}\n",
            view_position,
            debt.name,
            debt.amount.format_with_symbol(symbol)
        ));
    }

    output.push_str(&format!("\nTotal: {}\n", total.format_with_symbol(symbol)));
    output
}

/// Format every debt, including settled and negative ones
pub fn format_debt_list(debts: &[DebtRecord], symbol: &str) -> String {
    if debts.is_empty() {
        return "No debts recorded.\n".to_string();
    }

    let name_width = debts.iter().map(|d| d.name.len()).max().unwrap_or(4).max(4);

    let mut output = format!(
        "{:>4}  {:<name_width$}  {:>12}  {}\n",
        "#",
        "Name",
        "Amount",
        "ID",
        name_width = name_width
    );
    output.push_str(&format!(
        "{:->4}  {:-<name_width$}  {:->12}  {:-<13}\n",
        "",
        "",
        "",
        "",
        name_width = name_width
    ));

    for (position, debt) in debts.iter().enumerate() {
        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:>12}  {}\n",
            position,
            debt.name,
            debt.amount.format_with_symbol(symbol),
            debt.id,
            name_width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_outstanding() {
        let outstanding = vec![
            (0, DebtRecord::new("Alice", Money::from_cents(5000))),
            (3, DebtRecord::new("Bob", Money::from_cents(1225))),
        ];

        let output = format_outstanding(&outstanding, Money::from_cents(6225), "$");

        assert!(output.starts_with("Debts Owed to You\n"));
        assert!(output.contains("[0] Alice owes you $50.00"));
        assert!(output.contains("[1] Bob owes you $12.25"));
        assert!(output.contains("Total: $62.25"));
    }

    #[test]
    fn test_format_outstanding_empty() {
        let output = format_outstanding(&[], Money::zero(), "$");
        assert!(output.contains("No one owes you anything."));
    }

    #[test]
    fn test_format_debt_list() {
        let debts = vec![
            DebtRecord::new("Alice", Money::from_cents(5000)),
            DebtRecord::new("Me", Money::from_cents(-700)),
        ];

        let output = format_debt_list(&debts, "$");

        assert!(output.contains("Alice"));
        assert!(output.contains("-$7.00"));
        assert!(output.contains("debt-"));
        assert_eq!(format_debt_list(&[], "$"), "No debts recorded.\n");
    }
}
