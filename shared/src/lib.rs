use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use chrono::{Datelike, NaiveDate};

/// Kind of ledger record, used for id prefixes and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    /// Short prefix used in generated record ids
    pub fn prefix(&self) -> &'static str {
        match self {
            RecordKind::Income => "inc",
            RecordKind::Expense => "exp",
        }
    }

    /// Human-readable label for detail views
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Income => "Income",
            RecordKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single ledger entry: a fare received or an expense paid.
///
/// The `kind` tag is the persisted discriminator, so a stored document is
/// self-describing and documents with an unknown kind fail to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Income {
        id: String,
        /// Calendar date as entered, "YYYY-MM-DD"
        date: String,
        /// Magnitude in currency units; sign is implied by the kind
        #[serde(deserialize_with = "amount_or_nan")]
        amount: f64,
        /// Who paid the fare
        client: String,
        /// Where the ride went
        destination: String,
    },
    Expense {
        id: String,
        /// Calendar date as entered, "YYYY-MM-DD"
        date: String,
        /// Magnitude in currency units; sign is implied by the kind
        #[serde(deserialize_with = "amount_or_nan")]
        amount: f64,
        /// Expense category (Fuel, Tolls, Maintenance, Meals, Other)
        category: String,
        /// Free-text note
        description: String,
    },
}

impl Record {
    /// Create an income record with a freshly generated id
    pub fn income(client: String, destination: String, date: String, amount: f64) -> Self {
        Record::Income {
            id: Self::generate_id(RecordKind::Income, current_epoch_millis()),
            date,
            amount,
            client,
            destination,
        }
    }

    /// Create an expense record with a freshly generated id
    pub fn expense(category: String, description: String, date: String, amount: f64) -> Self {
        Record::Expense {
            id: Self::generate_id(RecordKind::Expense, current_epoch_millis()),
            date,
            amount,
            category,
            description,
        }
    }

    /// Generate a unique record ID from the kind and a creation timestamp.
    /// Format: <kind prefix>-<timestamp_ms>-<random_suffix>
    /// Example: inc-1709626500123-af3c
    pub fn generate_id(kind: RecordKind, timestamp_ms: u64) -> String {
        let random_suffix = Self::generate_random_suffix(4);
        format!("{}-{}-{}", kind.prefix(), timestamp_ms, random_suffix)
    }

    /// Generate a random hex suffix for record IDs.
    fn generate_random_suffix(len: usize) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("{:x}", now % (16_u128.pow(len as u32)))
            .chars()
            .take(len)
            .collect()
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Income { .. } => RecordKind::Income,
            Record::Expense { .. } => RecordKind::Expense,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Record::Income { id, .. } => id,
            Record::Expense { id, .. } => id,
        }
    }

    pub fn date(&self) -> &str {
        match self {
            Record::Income { date, .. } => date,
            Record::Expense { date, .. } => date,
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            Record::Income { amount, .. } => *amount,
            Record::Expense { amount, .. } => *amount,
        }
    }

    /// Parse the stored date string. Returns `None` for anything that is not
    /// a valid "YYYY-MM-DD" date; such records stay in the store but are
    /// excluded from period views.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date(), "%Y-%m-%d").ok()
    }
}

fn current_epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

/// JSON has no NaN literal, so a non-finite amount is stored as `null`.
/// Decode it back to NaN instead of rejecting the whole document.
fn amount_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.unwrap_or(f64::NAN))
}

/// A month/year pair selecting which records are visible on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Calendar month, 1 = January through 12 = December
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    #[error("Month {0} is out of range (expected 1-12)")]
    MonthOutOfRange(u32),
}

impl Period {
    /// Create a period, rejecting months outside 1-12. Any year is accepted.
    pub fn new(month: u32, year: i32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::MonthOutOfRange(month));
        }
        Ok(Period { month, year })
    }

    /// The real-world month and year right now
    pub fn current() -> Self {
        let now = chrono::Local::now();
        Period {
            month: now.month(),
            year: now.year(),
        }
    }

    /// The period a record belongs to, if its date parses
    pub fn of_record(record: &Record) -> Option<Period> {
        record.parsed_date().map(|date| Period {
            month: date.month(),
            year: date.year(),
        })
    }

    /// Whether a date falls inside this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }

    /// English name of this period's month
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// English month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
