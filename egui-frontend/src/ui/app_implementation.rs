use eframe::egui;

use crate::ui::app_state::FareLedgerApp;
use crate::ui::components::styling::{self, colors, format_brl};

impl eframe::App for FareLedgerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        styling::setup_app_style(ctx);

        self.expire_messages();

        // Keep repainting while a message is on screen so it expires on time
        if self.error_message.is_some() || self.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            styling::draw_app_background(ui, ctx.screen_rect());

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.render_header(ui);

                    ui.separator();

                    self.render_messages(ui);

                    self.render_filter_bar(ui);
                    ui.add_space(12.0);

                    self.render_summary_cards(ui);
                    ui.add_space(16.0);

                    self.render_forms_section(ui);
                    ui.add_space(16.0);

                    self.render_chart_section(ui);
                    ui.add_space(16.0);

                    self.render_record_table(ui);
                    ui.add_space(24.0);
                });
        });

        // Modals sit on top of everything
        self.render_modals(ctx);
    }
}

impl FareLedgerApp {
    /// Render the header
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Use Proportional font for emoji-containing text
            ui.label(
                egui::RichText::new("🚗 Fare Ledger")
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .color(colors::HEADER_TEAL)
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let balance_color = if self.totals.balance >= 0.0 {
                    colors::INCOME_GREEN
                } else {
                    colors::EXPENSE_RED
                };
                ui.label(
                    egui::RichText::new(format_brl(self.totals.balance))
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                        .color(balance_color)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(format!("📅 {}", self.period))
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_PRIMARY),
                );
            });
        });
    }

    /// Render error and success messages
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(colors::EXPENSE_RED, format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(colors::INCOME_GREEN, format!("✅ {}", success));
        }
    }
}
