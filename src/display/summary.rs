//! Summary display formatting

use crate::report::{BudgetProjection, SummaryReport};

/// Format a summary report, with the budget comparison when configured
pub fn format_summary(report: &SummaryReport, projection: Option<&BudgetProjection>) -> String {
    let mut output = String::new();

    output.push_str(&format!("Summary from {} to {}\n", report.start, report.end));
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!("Total: {:.2}\n", report.total));

    output.push_str("\nBy category:\n");
    for (category, sum) in &report.by_category {
        output.push_str(&format!("  {:16} {:>10.2}\n", category, sum));
    }

    if let Some(projection) = projection {
        output.push_str(&format!(
            "\nBudget (monthly): {:.2}  — projected monthly spending based on this period: {:.2}\n",
            projection.budget, projection.projected
        ));
        if projection.exceeded() {
            output.push_str("  Warning: projected spending exceeds your monthly budget!\n");
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report() -> SummaryReport {
        SummaryReport {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            total: 70.0,
            by_category: vec![("food".into(), 50.0), ("travel".into(), 20.0)],
        }
    }

    #[test]
    fn test_summary_without_budget_has_no_budget_line() {
        let text = format_summary(&report(), None);
        assert!(text.contains("Total: 70.00"));
        assert!(text.contains("food"));
        assert!(!text.contains("Budget"));
    }

    #[test]
    fn test_summary_with_exceeded_budget_warns() {
        let r = report();
        let projection = BudgetProjection::new(100.0, r.total, r.start, r.end);
        let text = format_summary(&r, Some(&projection));
        assert!(text.contains("Budget (monthly): 100.00"));
        assert!(text.contains("projected monthly spending based on this period: 300.00"));
        assert!(text.contains("Warning"));
    }

    #[test]
    fn test_summary_within_budget_has_no_warning() {
        let r = report();
        let projection = BudgetProjection::new(500.0, r.total, r.start, r.end);
        let text = format_summary(&r, Some(&projection));
        assert!(text.contains("Budget (monthly): 500.00"));
        assert!(!text.contains("Warning"));
    }
}
