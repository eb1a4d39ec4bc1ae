//! # Record Forms Module
//!
//! The two entry forms rendered side by side: income (client, destination,
//! date, amount) and expense (category, description, date, amount).
//!
//! ## Submission Behavior:
//! - Amounts are coerced with `parse::<f64>().unwrap_or(f64::NAN)`; there
//!   is no validation, so bad input flows into the totals as a visible NaN
//! - Dates come from a picker seeded with today
//! - After a successful save the dashboard jumps to the new record's
//!   month/year and the form resets

use chrono::Local;
use eframe::egui;

use shared::{Period, Record};

use crate::ui::app_state::FareLedgerApp;
use crate::ui::components::styling::{colors, CATEGORY_OPTIONS};

impl FareLedgerApp {
    /// Render both entry forms side by side
    pub fn render_forms_section(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            let (left, right) = columns.split_at_mut(1);
            self.render_income_form(&mut left[0]);
            self.render_expense_form(&mut right[0]);
        });
    }

    fn render_income_form(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.label(
                    egui::RichText::new("➕ Add Income")
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .color(colors::INCOME_GREEN)
                        .strong(),
                );
                ui.add_space(8.0);

                ui.label("Client:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.income_client)
                        .hint_text("Who took the ride")
                        .desired_width(f32::INFINITY),
                );

                ui.label("Destination:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.income_destination)
                        .hint_text("Where the ride went")
                        .desired_width(f32::INFINITY),
                );

                ui.label("Date:");
                ui.add(egui_extras::DatePickerButton::new(&mut self.income_date).id_source("income_date"));

                ui.label("Amount:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.income_amount)
                        .hint_text("0.00")
                        .desired_width(120.0),
                );

                ui.add_space(10.0);
                let button = egui::Button::new(
                    egui::RichText::new("Add Income").color(egui::Color32::WHITE),
                )
                .fill(colors::INCOME_GREEN)
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2(130.0, 32.0));

                if ui.add(button).clicked() {
                    self.submit_income();
                }
            });
    }

    fn render_expense_form(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.label(
                    egui::RichText::new("➖ Add Expense")
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .color(colors::EXPENSE_RED)
                        .strong(),
                );
                ui.add_space(8.0);

                ui.label("Category:");
                egui::ComboBox::from_id_source("expense_category")
                    .selected_text(self.expense_category.clone())
                    .show_ui(ui, |ui| {
                        for category in CATEGORY_OPTIONS {
                            ui.selectable_value(
                                &mut self.expense_category,
                                category.to_string(),
                                category,
                            );
                        }
                    });

                ui.label("Description:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.expense_description)
                        .hint_text("What was paid for")
                        .desired_width(f32::INFINITY),
                );

                ui.label("Date:");
                ui.add(egui_extras::DatePickerButton::new(&mut self.expense_date).id_source("expense_date"));

                ui.label("Amount:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.expense_amount)
                        .hint_text("0.00")
                        .desired_width(120.0),
                );

                ui.add_space(10.0);
                let button = egui::Button::new(
                    egui::RichText::new("Add Expense").color(egui::Color32::WHITE),
                )
                .fill(colors::EXPENSE_RED)
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2(130.0, 32.0));

                if ui.add(button).clicked() {
                    self.submit_expense();
                }
            });
    }

    /// Save a new income record from the form fields
    pub fn submit_income(&mut self) {
        let date = self.income_date.format("%Y-%m-%d").to_string();
        let amount = self.income_amount.trim().parse::<f64>().unwrap_or(f64::NAN);

        let record = Record::income(
            self.income_client.clone(),
            self.income_destination.clone(),
            date,
            amount,
        );

        self.finish_submit(record);
    }

    /// Save a new expense record from the form fields
    pub fn submit_expense(&mut self) {
        let date = self.expense_date.format("%Y-%m-%d").to_string();
        let amount = self.expense_amount.trim().parse::<f64>().unwrap_or(f64::NAN);

        let record = Record::expense(
            self.expense_category.clone(),
            self.expense_description.clone(),
            date,
            amount,
        );

        self.finish_submit(record);
    }

    /// Persist a freshly built record, jump the dashboard to its period
    /// and reset the forms
    fn finish_submit(&mut self, record: Record) {
        let kind = record.kind();

        match self.backend.ledger.add(record.clone()) {
            Ok(()) => {
                if let Some(period) = Period::of_record(&record) {
                    self.period = period;
                    self.filter_month = period.month;
                    self.filter_year = period.year;
                }

                self.set_success_message(format!("{} recorded", kind.label()));
                self.reset_forms();
                self.refresh_dashboard();
            }
            Err(e) => self.set_error_message(format!("Failed to save record: {}", e)),
        }
    }

    /// Clear the text fields and reseed both date pickers with today
    fn reset_forms(&mut self) {
        let today = Local::now().date_naive();

        self.income_client.clear();
        self.income_destination.clear();
        self.income_amount.clear();
        self.income_date = today;

        self.expense_category = CATEGORY_OPTIONS[0].to_string();
        self.expense_description.clear();
        self.expense_amount.clear();
        self.expense_date = today;
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::storage::connection::StoreConnection;
    use crate::backend::Backend;
    use crate::ui::app_state::FareLedgerApp;
    use chrono::NaiveDate;
    use shared::{Period, RecordKind};
    use tempfile::TempDir;

    fn app_in(temp_dir: &TempDir) -> FareLedgerApp {
        let connection = StoreConnection::new(temp_dir.path()).unwrap();
        FareLedgerApp::new_for_tests(Backend::with_connection(connection))
    }

    #[test]
    fn test_submit_income_saves_and_jumps_to_the_record_period() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        app.period = Period::new(3, 2024).unwrap();
        app.filter_month = 3;
        app.filter_year = 2024;

        app.income_client = "Maria".to_string();
        app.income_destination = "Airport".to_string();
        app.income_date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        app.income_amount = "99.90".to_string();

        app.submit_income();

        // The dashboard follows the new record
        assert_eq!(app.period, Period::new(1, 2025).unwrap());
        assert_eq!(app.filter_month, 1);
        assert_eq!(app.filter_year, 2025);

        assert_eq!(app.backend.ledger.records().len(), 1);
        assert_eq!(app.visible_records.len(), 1);
        assert_eq!(app.visible_records[0].kind(), RecordKind::Income);
        assert_eq!(app.totals.income, 99.90);
        assert!(app.success_message.is_some());
    }

    #[test]
    fn test_submit_expense_feeds_the_breakdown() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        app.expense_category = "Fuel".to_string();
        app.expense_description = "Tank refill".to_string();
        app.expense_date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        app.expense_amount = "40".to_string();

        app.submit_expense();

        assert_eq!(app.period, Period::new(3, 2024).unwrap());
        assert_eq!(app.breakdown, vec![("Fuel".to_string(), 40.0)]);
        assert_eq!(app.chart.segments.len(), 1);
    }

    #[test]
    fn test_non_numeric_amount_becomes_a_visible_nan() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        app.income_date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        app.income_amount = "abc".to_string();

        app.submit_income();

        assert_eq!(app.backend.ledger.records().len(), 1);
        assert!(app.backend.ledger.records()[0].amount().is_nan());
        assert!(app.totals.income.is_nan());
        assert!(app.totals.balance.is_nan());
    }

    #[test]
    fn test_forms_reset_after_a_successful_submit() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        app.income_client = "Maria".to_string();
        app.income_destination = "Airport".to_string();
        app.income_date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        app.income_amount = "10".to_string();
        app.expense_category = "Meals".to_string();

        app.submit_income();

        assert!(app.income_client.is_empty());
        assert!(app.income_destination.is_empty());
        assert!(app.income_amount.is_empty());
        assert_eq!(app.income_date, chrono::Local::now().date_naive());
        assert_eq!(app.expense_category, "Fuel");
    }
}
