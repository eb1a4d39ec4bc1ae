//! # Filter Bar Module
//!
//! The month and year selectors with the Apply button. Selections are
//! staged in app state and only become the active period when Apply is
//! clicked; the year options come from the dashboard cache so fresh data
//! extends them immediately.

use eframe::egui;
use log::warn;

use shared::{month_name, Period};

use crate::ui::app_state::FareLedgerApp;
use crate::ui::components::styling::colors;

impl FareLedgerApp {
    /// Render the period selectors and the Apply button
    pub fn render_filter_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Period:")
                    .color(colors::TEXT_PRIMARY)
                    .strong(),
            );

            egui::ComboBox::from_id_source("filter_month")
                .selected_text(month_name(self.filter_month))
                .show_ui(ui, |ui| {
                    for month in 1..=12 {
                        ui.selectable_value(&mut self.filter_month, month, month_name(month));
                    }
                });

            egui::ComboBox::from_id_source("filter_year")
                .selected_text(self.filter_year.to_string())
                .show_ui(ui, |ui| {
                    for year in self.year_options.clone() {
                        ui.selectable_value(&mut self.filter_year, year, year.to_string());
                    }
                });

            let apply = egui::Button::new(
                egui::RichText::new("Apply").color(egui::Color32::WHITE),
            )
            .fill(colors::HEADER_TEAL)
            .rounding(egui::Rounding::same(6.0));

            if ui.add(apply).clicked() {
                self.apply_filter();
            }
        });
    }

    /// Make the staged month/year selection the active period
    pub fn apply_filter(&mut self) {
        match Period::new(self.filter_month, self.filter_year) {
            Ok(period) => {
                self.period = period;
                self.refresh_dashboard();
            }
            Err(e) => {
                warn!("❌ Rejected period selection: {}", e);
                self.set_error_message(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::storage::connection::StoreConnection;
    use crate::backend::Backend;
    use crate::ui::app_state::FareLedgerApp;
    use shared::{Period, Record};
    use tempfile::TempDir;

    fn app_in(temp_dir: &TempDir) -> FareLedgerApp {
        let connection = StoreConnection::new(temp_dir.path()).unwrap();
        FareLedgerApp::new_for_tests(Backend::with_connection(connection))
    }

    #[test]
    fn test_apply_sets_the_period_and_rebuilds_the_dashboard() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        app.backend
            .ledger
            .add(Record::income(
                String::new(),
                String::new(),
                "2024-03-05".to_string(),
                150.0,
            ))
            .unwrap();

        app.filter_month = 3;
        app.filter_year = 2024;
        app.apply_filter();

        assert_eq!(app.period, Period::new(3, 2024).unwrap());
        assert_eq!(app.visible_records.len(), 1);
        assert_eq!(app.totals.income, 150.0);
    }

    #[test]
    fn test_apply_rejects_an_out_of_range_month() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        let before = app.period;
        app.filter_month = 13;
        app.apply_filter();

        assert_eq!(app.period, before);
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_staged_selection_does_not_change_the_period_until_applied() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        let before = app.period;
        app.filter_month = if before.month == 1 { 2 } else { 1 };
        app.filter_year = before.year - 1;

        // No apply: the active period is untouched
        assert_eq!(app.period, before);
    }
}
