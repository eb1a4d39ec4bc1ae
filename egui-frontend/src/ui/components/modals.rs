//! # Modals Module
//!
//! Overlays that sit on top of the dashboard: the full record view opened
//! from a table row, and the confirmation step in front of every delete.
//! Each overlay dims the screen behind a centered panel and closes by
//! clearing the app state that opened it.

use eframe::egui;

use shared::Record;

use crate::ui::app_state::FareLedgerApp;
use crate::ui::components::styling::{colors, format_brl};

impl FareLedgerApp {
    /// Render every overlay that can cover the dashboard
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_detail_overlay(ctx);
        self.render_delete_confirm_overlay(ctx);
    }

    /// Full record view, opened by clicking a table row
    fn render_detail_overlay(&mut self, ctx: &egui::Context) {
        let Some(record) = self.detail_record.clone() else {
            return;
        };
        let mut close = false;

        egui::Area::new(egui::Id::new("record_detail_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    // Dim the dashboard behind the panel
                    ui.painter().rect_filled(
                        screen_rect,
                        egui::Rounding::ZERO,
                        egui::Color32::from_rgba_unmultiplied(0, 0, 0, 80),
                    );

                    ui.centered_and_justified(|ui| {
                        overlay_frame(ctx, colors::HEADER_TEAL).show(ui, |ui| {
                            ui.set_min_size(egui::vec2(420.0, 320.0));
                            ui.set_max_size(egui::vec2(420.0, 360.0));

                            ui.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new("📋 Record Details")
                                        .font(egui::FontId::new(
                                            20.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .color(colors::HEADER_TEAL)
                                        .strong(),
                                );
                            });
                            ui.add_space(14.0);

                            detail_row(ui, "Type", record.kind().label());
                            detail_row(ui, "Date", record.date());
                            detail_row(ui, "Amount", &format_brl(record.amount()));
                            match &record {
                                Record::Income {
                                    client,
                                    destination,
                                    ..
                                } => {
                                    detail_row(ui, "Client", client);
                                    detail_row(ui, "Destination", destination);
                                }
                                Record::Expense {
                                    category,
                                    description,
                                    ..
                                } => {
                                    detail_row(ui, "Category", category);
                                    detail_row(ui, "Description", description);
                                }
                            }
                            detail_row(ui, "Id", record.id());

                            ui.add_space(18.0);
                            ui.vertical_centered(|ui| {
                                let ok_button = egui::Button::new(
                                    egui::RichText::new("OK")
                                        .color(egui::Color32::WHITE)
                                        .strong(),
                                )
                                .fill(colors::HEADER_TEAL)
                                .rounding(egui::Rounding::same(8.0))
                                .min_size(egui::vec2(110.0, 32.0));
                                if ui.add(ok_button).clicked() {
                                    close = true;
                                }
                            });
                        });
                    });
                });
            });

        if close {
            self.detail_record = None;
        }
    }

    /// Confirmation panel shown before a record is removed
    fn render_delete_confirm_overlay(&mut self, ctx: &egui::Context) {
        let Some(record) = self.pending_delete.clone() else {
            return;
        };
        let mut cancel = false;
        let mut confirm = false;

        egui::Area::new(egui::Id::new("delete_confirm_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.painter().rect_filled(
                        screen_rect,
                        egui::Rounding::ZERO,
                        egui::Color32::from_rgba_unmultiplied(0, 0, 0, 80),
                    );

                    ui.centered_and_justified(|ui| {
                        overlay_frame(ctx, colors::EXPENSE_RED).show(ui, |ui| {
                            ui.set_min_size(egui::vec2(420.0, 190.0));
                            ui.set_max_size(egui::vec2(420.0, 230.0));

                            ui.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new("🗑 Delete Record")
                                        .font(egui::FontId::new(
                                            20.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .color(colors::EXPENSE_RED)
                                        .strong(),
                                );
                                ui.add_space(12.0);
                                ui.label(
                                    egui::RichText::new(
                                        "Are you sure you want to delete this record?",
                                    )
                                    .color(colors::TEXT_PRIMARY),
                                );
                                ui.add_space(4.0);
                                ui.label(
                                    egui::RichText::new(format!(
                                        "{} of {} on {}",
                                        record.kind().label(),
                                        format_brl(record.amount()),
                                        record.date(),
                                    ))
                                    .color(colors::TEXT_MUTED),
                                );

                                ui.add_space(18.0);
                                ui.horizontal(|ui| {
                                    ui.add_space(70.0);
                                    let cancel_button = egui::Button::new(
                                        egui::RichText::new("Cancel")
                                            .color(colors::TEXT_PRIMARY),
                                    )
                                    .fill(egui::Color32::from_rgb(230, 230, 230))
                                    .rounding(egui::Rounding::same(8.0))
                                    .min_size(egui::vec2(110.0, 32.0));
                                    if ui.add(cancel_button).clicked() {
                                        cancel = true;
                                    }

                                    ui.add_space(16.0);
                                    let delete_button = egui::Button::new(
                                        egui::RichText::new("Delete")
                                            .color(egui::Color32::WHITE)
                                            .strong(),
                                    )
                                    .fill(colors::EXPENSE_RED)
                                    .rounding(egui::Rounding::same(8.0))
                                    .min_size(egui::vec2(110.0, 32.0));
                                    if ui.add(delete_button).clicked() {
                                        confirm = true;
                                    }
                                });
                            });
                        });
                    });
                });
            });

        if cancel {
            self.pending_delete = None;
        }
        if confirm {
            self.delete_pending_record();
        }
    }

    /// Remove the record waiting for confirmation, then refresh
    pub fn delete_pending_record(&mut self) {
        let Some(record) = self.pending_delete.take() else {
            return;
        };

        match self.backend.ledger.delete(record.id()) {
            Ok(true) => {
                self.set_success_message("Record deleted".to_string());
                self.refresh_dashboard();
            }
            Ok(false) => {
                // Already gone, refresh so the table catches up
                self.set_error_message("Record no longer exists".to_string());
                self.refresh_dashboard();
            }
            Err(e) => {
                log::error!("❌ Failed to delete record: {}", e);
                self.set_error_message(format!("Failed to delete record: {}", e));
            }
        }
    }
}

/// Shared panel styling for the centered overlays
fn overlay_frame(ctx: &egui::Context, border: egui::Color32) -> egui::Frame {
    egui::Frame::window(&ctx.style())
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(3.0, border))
        .rounding(egui::Rounding::same(16.0))
        .inner_margin(egui::Margin::same(25.0))
        .shadow(egui::Shadow {
            offset: egui::vec2(6.0, 6.0),
            blur: 20.0,
            spread: 0.0,
            color: egui::Color32::from_rgba_unmultiplied(0, 0, 0, 100),
        })
}

/// Label/value line inside the detail panel
fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{}:", label))
                .color(colors::TEXT_MUTED)
                .strong(),
        );
        ui.label(egui::RichText::new(value).color(colors::TEXT_PRIMARY));
    });
}
