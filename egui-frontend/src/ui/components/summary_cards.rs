//! # Summary Cards Module
//!
//! The three month-labeled cards at the top of the dashboard: income,
//! expenses and balance for the selected period. The balance card is green
//! while the month is non-negative and red once it dips below zero.

use eframe::egui;

use crate::ui::app_state::FareLedgerApp;
use crate::ui::components::styling::{colors, draw_card_container, format_brl};

impl FareLedgerApp {
    /// Render the income / expenses / balance cards
    pub fn render_summary_cards(&self, ui: &mut egui::Ui) {
        let month = self.period.month_name();

        // A NaN balance fails the >= test and renders red
        let balance_color = if self.totals.balance >= 0.0 {
            colors::INCOME_GREEN
        } else {
            colors::EXPENSE_RED
        };

        let cards = [
            (
                format!("Income ({})", month),
                format_brl(self.totals.income),
                colors::INCOME_GREEN,
            ),
            (
                format!("Expenses ({})", month),
                format_brl(self.totals.expense),
                colors::EXPENSE_RED,
            ),
            (
                format!("Balance ({})", month),
                format_brl(self.totals.balance),
                balance_color,
            ),
        ];

        ui.columns(3, |columns| {
            for (i, (title, value, value_color)) in cards.iter().enumerate() {
                let ui = &mut columns[i];

                let desired = egui::vec2(ui.available_width(), 84.0);
                let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());

                draw_card_container(ui, rect, 12.0);

                let painter = ui.painter();
                painter.text(
                    egui::pos2(rect.center().x, rect.top() + 26.0),
                    egui::Align2::CENTER_CENTER,
                    title,
                    egui::FontId::new(14.0, egui::FontFamily::Proportional),
                    colors::TEXT_MUTED,
                );
                painter.text(
                    egui::pos2(rect.center().x, rect.top() + 56.0),
                    egui::Align2::CENTER_CENTER,
                    value,
                    egui::FontId::new(20.0, egui::FontFamily::Proportional),
                    *value_color,
                );
            }
        });
    }
}
