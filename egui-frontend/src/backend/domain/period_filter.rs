use chrono::Datelike;

use shared::{Period, Record};

/// Records whose date falls inside the given period.
///
/// Records whose stored date does not parse belong to no period: they stay
/// in the ledger but never appear in a filtered view. The result keeps
/// ledger order; display sorting is a separate step.
pub fn records_in_period(records: &[Record], period: Period) -> Vec<Record> {
    records
        .iter()
        .filter(|record| {
            record
                .parsed_date()
                .map_or(false, |date| period.contains(date))
        })
        .cloned()
        .collect()
}

/// Distinct years seen in the data plus the current year, newest first.
///
/// The current year is always offered so the year selector works even for
/// an empty ledger.
pub fn available_years(records: &[Record], current_year: i32) -> Vec<i32> {
    let mut years: Vec<i32> = records
        .iter()
        .filter_map(|record| record.parsed_date())
        .map(|date| date.year())
        .collect();

    years.push(current_year);
    years.sort_unstable();
    years.dedup();
    years.reverse();
    years
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
    fn test_filter_matches_month_and_year_exactly() {
        let records = vec![
            income("2024-03-05", 150.0),
            expense("Fuel", "2024-03-06", 40.0),
            income("2024-04-01", 99.0),
            income("2023-03-15", 80.0),
        ];

        let march_2024 = records_in_period(&records, Period::new(3, 2024).unwrap());
        assert_eq!(march_2024.len(), 2);
        assert!(march_2024.iter().all(|r| r.date().starts_with("2024-03")));

        let april_2024 = records_in_period(&records, Period::new(4, 2024).unwrap());
        assert_eq!(april_2024.len(), 1);

        let march_2023 = records_in_period(&records, Period::new(3, 2023).unwrap());
        assert_eq!(march_2023.len(), 1);
    }

    #[test]
    fn test_filter_excludes_unparseable_dates() {
        let records = vec![
            income("2024-03-05", 150.0),
            income("not-a-date", 10.0),
            income("", 20.0),
            income("2024-13-40", 30.0),
        ];

        let march_2024 = records_in_period(&records, Period::new(3, 2024).unwrap());
        assert_eq!(march_2024.len(), 1);
        assert_eq!(march_2024[0].date(), "2024-03-05");
    }

    #[test]
    fn test_filter_on_empty_ledger() {
        let march = records_in_period(&[], Period::new(3, 2024).unwrap());
        assert!(march.is_empty());
    }

    #[test]
    fn test_available_years_includes_current_year_for_empty_ledger() {
        assert_eq!(available_years(&[], 2026), vec![2026]);
    }

    #[test]
    fn test_available_years_dedups_and_sorts_descending() {
        let records = vec![
            income("2024-03-05", 1.0),
            income("2024-07-01", 1.0),
            income("2022-01-01", 1.0),
            income("2025-12-31", 1.0),
        ];

        assert_eq!(available_years(&records, 2026), vec![2026, 2025, 2024, 2022]);
    }

    #[test]
    fn test_available_years_does_not_duplicate_the_current_year() {
        let records = vec![income("2026-01-05", 1.0)];
        assert_eq!(available_years(&records, 2026), vec![2026]);
    }

    #[test]
    fn test_available_years_ignores_unparseable_dates() {
        let records = vec![income("garbage", 1.0), income("2024-06-01", 1.0)];
        assert_eq!(available_years(&records, 2026), vec![2026, 2024]);
    }
}
