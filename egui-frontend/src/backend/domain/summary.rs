use shared::{Record, RecordKind};

/// Income, expense and balance totals for one period
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Sum the given records by kind. The balance is income minus expense and
/// an empty slice yields zeros. Amounts are summed as-is: a NaN from
/// unvalidated form input poisons the affected totals visibly rather than
/// being silently dropped.
pub fn compute_totals(records: &[Record]) -> Totals {
    let mut totals = Totals::default();

    for record in records {
        match record.kind() {
            RecordKind::Income => totals.income += record.amount(),
            RecordKind::Expense => totals.expense += record.amount(),
        }
    }

    totals.balance = totals.income - totals.expense;
    totals
}

/// Expense totals grouped by category, in first-seen order.
///
/// Grouping is exact and case-sensitive; an unexpected category label forms
/// its own group instead of being dropped. First-seen order keeps chart
/// colors and legend rows stable for a given dataset.
pub fn category_breakdown(records: &[Record]) -> Vec<(String, f64)> {
    let mut breakdown: Vec<(String, f64)> = Vec::new();

    for record in records {
        if let Record::Expense {
            category, amount, ..
        } = record
        {
            match breakdown.iter_mut().find(|(name, _)| name == category) {
                Some((_, total)) => *total += amount,
                None => breakdown.push((category.clone(), *amount)),
            }
        }
    }

    breakdown
}

/// Copy of the records ordered most recent first. The sort is stable, so
/// records sharing a date keep their relative ledger order.
pub fn sort_for_display(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(date: &str, amount: f64) -> Record {
        Record::income(
            "Maria".to_string(),
            "Airport".to_string(),
            date.to_string(),
            amount,
        )
    }

    fn expense(category: &str, date: &str, amount: f64) -> Record {
        Record::expense(
            category.to_string(),
            String::new(),
            date.to_string(),
            amount,
        )
    }

    #[test]
    fn test_totals_for_empty_period_are_zero() {
        let totals = compute_totals(&[]);
        assert_eq!(totals.income, 0.0);
        assert_eq!(totals.expense, 0.0);
        assert_eq!(totals.balance, 0.0);
    }

    #[test]
    fn test_totals_sum_by_kind_and_balance_is_the_difference() {
        let records = vec![
            income("2024-03-05", 150.0),
            expense("Fuel", "2024-03-06", 40.0),
        ];

        let totals = compute_totals(&records);
        assert_eq!(totals.income, 150.0);
        assert_eq!(totals.expense, 40.0);
        assert_eq!(totals.balance, 110.0);
    }

    #[test]
    fn test_totals_can_go_negative() {
        let records = vec![income("2024-03-05", 30.0), expense("Fuel", "2024-03-06", 70.0)];

        let totals = compute_totals(&records);
        assert_eq!(totals.balance, -40.0);
    }

    #[test]
    fn test_totals_are_additive_over_disjoint_slices() {
        let first = vec![income("2024-03-01", 10.0), expense("Fuel", "2024-03-02", 4.0)];
        let second = vec![income("2024-03-03", 20.0), expense("Meals", "2024-03-04", 6.0)];

        let combined: Vec<Record> = first.iter().chain(second.iter()).cloned().collect();

        let a = compute_totals(&first);
        let b = compute_totals(&second);
        let whole = compute_totals(&combined);

        assert_eq!(whole.income, a.income + b.income);
        assert_eq!(whole.expense, a.expense + b.expense);
        assert_eq!(whole.balance, a.balance + b.balance);
    }

    #[test]
    fn test_nan_amount_poisons_the_totals() {
        let records = vec![income("2024-03-05", 150.0), income("2024-03-06", f64::NAN)];

        let totals = compute_totals(&records);
        assert!(totals.income.is_nan());
        assert!(totals.balance.is_nan());
        assert_eq!(totals.expense, 0.0);
    }

    #[test]
    fn test_breakdown_groups_by_category_in_first_seen_order() {
        let records = vec![
            expense("Fuel", "2024-03-01", 40.0),
            expense("Meals", "2024-03-02", 25.0),
            expense("Fuel", "2024-03-03", 10.0),
            income("2024-03-04", 100.0),
        ];

        let breakdown = category_breakdown(&records);
        assert_eq!(
            breakdown,
            vec![("Fuel".to_string(), 50.0), ("Meals".to_string(), 25.0)]
        );
    }

    #[test]
    fn test_breakdown_is_case_sensitive_and_keeps_unknown_categories() {
        let records = vec![
            expense("fuel", "2024-03-01", 1.0),
            expense("Fuel", "2024-03-02", 2.0),
            expense("Parking fine", "2024-03-03", 3.0),
        ];

        let breakdown = category_breakdown(&records);
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].0, "fuel");
        assert_eq!(breakdown[1].0, "Fuel");
        assert_eq!(breakdown[2].0, "Parking fine");
    }

    #[test]
    fn test_breakdown_ignores_income_records() {
        let records = vec![income("2024-03-05", 150.0)];
        assert!(category_breakdown(&records).is_empty());
    }

    #[test]
    fn test_sort_is_descending_by_date() {
        let records = vec![
            income("2024-03-05", 1.0),
            income("2024-03-20", 2.0),
            income("2024-03-10", 3.0),
        ];

        let sorted = sort_for_display(&records);
        let dates: Vec<&str> = sorted.iter().map(|r| r.date()).collect();
        assert_eq!(dates, vec!["2024-03-20", "2024-03-10", "2024-03-05"]);
    }

    #[test]
    fn test_sort_is_stable_for_records_sharing_a_date() {
        let records = vec![
            income("2024-03-05", 1.0),
            expense("Fuel", "2024-03-05", 2.0),
            income("2024-03-05", 3.0),
        ];

        let sorted = sort_for_display(&records);
        assert_eq!(sorted[0].amount(), 1.0);
        assert_eq!(sorted[1].amount(), 2.0);
        assert_eq!(sorted[2].amount(), 3.0);
    }
}
