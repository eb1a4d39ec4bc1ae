//! # Data Refresh Module
//!
//! This module rebuilds the dashboard caches from the backend whenever the
//! visible data may have changed.
//!
//! ## Key Functions:
//! - `refresh_dashboard()` - Recompute everything the dashboard renders from
//!
//! ## Data Flow:
//! 1. A handler mutates the ledger or the period
//! 2. It calls `refresh_dashboard()`
//! 3. The period filter selects the visible records
//! 4. Totals, breakdown, sorted rows and year options are recomputed
//! 5. The chart model is cleared and rebuilt from the new breakdown
//!
//! Rendering then draws from the caches each frame; nothing is patched
//! incrementally.

use chrono::Datelike;
use log::info;

use crate::backend::domain::{period_filter, summary};
use crate::ui::app_state::FareLedgerApp;

impl FareLedgerApp {
    /// Rebuild every per-period cache from the ledger
    pub fn refresh_dashboard(&mut self) {
        info!("📊 Refreshing dashboard for {}", self.period);

        let (in_period, year_options) = {
            let records = self.backend.ledger.records();
            (
                period_filter::records_in_period(records, self.period),
                period_filter::available_years(records, chrono::Local::now().year()),
            )
        };

        self.visible_records = summary::sort_for_display(&in_period);
        self.totals = summary::compute_totals(&in_period);
        // Breakdown runs over the unsorted slice so categories keep ledger
        // entry order, not table display order
        self.breakdown = summary::category_breakdown(&in_period);
        self.year_options = year_options;

        // Drop the previous chart before building its replacement
        self.chart.clear();
        self.chart.rebuild(
            format!("Expenses for {}", self.period.month_name()),
            &self.breakdown,
        );

        info!(
            "📊 Dashboard ready: {} records, income {:.2}, expense {:.2}",
            self.visible_records.len(),
            self.totals.income,
            self.totals.expense
        );
    }
}
