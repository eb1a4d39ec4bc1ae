//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the Fare Ledger app.
//!
//! ## Key Types:
//! - `FareLedgerApp` - Main application state struct
//!
//! ## Purpose:
//! All mutable state lives in one place: the backend connection, the active
//! period filter, the dashboard caches derived from it, the two entry forms
//! and the modal flags. UI components read and mutate this struct; nothing
//! reaches around it to global state.
//!
//! ## State Management:
//! The dashboard fields (visible records, totals, breakdown, year options,
//! chart model) are caches. They are rebuilt by `refresh_dashboard()` on
//! startup and after every filter apply, create and delete, never patched
//! incrementally.

use log::info;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use shared::{Period, Record};

use crate::backend::Backend;
use crate::backend::domain::summary::Totals;
use crate::ui::components::category_chart::ChartModel;
use crate::ui::components::styling::CATEGORY_OPTIONS;

/// How long success and error messages stay on screen
const MESSAGE_LIFETIME: Duration = Duration::from_secs(5);

/// Main application struct for the egui fare ledger
pub struct FareLedgerApp {
    pub backend: Backend,

    /// Active period filter; the dashboard shows this month only
    pub period: Period,

    // Staged filter selections, applied with the Apply button
    pub filter_month: u32,
    pub filter_year: i32,

    // Dashboard caches rebuilt by refresh_dashboard()
    pub visible_records: Vec<Record>,
    pub totals: Totals,
    pub breakdown: Vec<(String, f64)>,
    pub year_options: Vec<i32>,
    pub chart: ChartModel,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub message_set_at: Option<Instant>,

    // Modal states
    pub detail_record: Option<Record>,
    pub pending_delete: Option<Record>,

    // Income form state
    pub income_client: String,
    pub income_destination: String,
    pub income_date: NaiveDate,
    pub income_amount: String,

    // Expense form state
    pub expense_category: String,
    pub expense_description: String,
    pub expense_date: NaiveDate,
    pub expense_amount: String,
}

impl FareLedgerApp {
    /// Create a new FareLedgerApp over the default data directory
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚗 Initializing Fare Ledger app");

        let backend = Backend::new()?;

        let mut app = Self::from_backend(backend);
        app.refresh_dashboard();
        Ok(app)
    }

    /// Build the state struct around an already constructed backend
    fn from_backend(backend: Backend) -> Self {
        let period = Period::current();
        let today = chrono::Local::now().date_naive();

        Self {
            backend,

            period,
            filter_month: period.month,
            filter_year: period.year,

            // Dashboard caches
            visible_records: Vec::new(),
            totals: Totals::default(),
            breakdown: Vec::new(),
            year_options: Vec::new(),
            chart: ChartModel::new(),

            // UI state
            error_message: None,
            success_message: None,
            message_set_at: None,

            // Modal states
            detail_record: None,
            pending_delete: None,

            // Income form state
            income_client: String::new(),
            income_destination: String::new(),
            income_date: today,
            income_amount: String::new(),

            // Expense form state
            expense_category: CATEGORY_OPTIONS[0].to_string(),
            expense_description: String::new(),
            expense_date: today,
            expense_amount: String::new(),
        }
    }

    /// Show a success message and drop any error
    pub fn set_success_message(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
        self.message_set_at = Some(Instant::now());
    }

    /// Show an error message and drop any success
    pub fn set_error_message(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
        self.message_set_at = Some(Instant::now());
    }

    /// Clear messages once they have been on screen long enough
    pub fn expire_messages(&mut self) {
        if let Some(set_at) = self.message_set_at {
            if set_at.elapsed() >= MESSAGE_LIFETIME {
                self.error_message = None;
                self.success_message = None;
                self.message_set_at = None;
            }
        }
    }

    #[cfg(test)]
    pub fn new_for_tests(backend: Backend) -> Self {
        let mut app = Self::from_backend(backend);
        app.refresh_dashboard();
        app
    }
}
