//! # Record Table Module
//!
//! The per-period transaction table: one row per visible record, most
//! recent first, with a kind arrow, the record's details, the colored
//! amount, the date and a delete button. Clicking a row's details opens
//! the record detail overlay; the delete button asks for confirmation
//! before anything is removed.

use chrono::NaiveDate;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use shared::{Record, RecordKind};

use crate::ui::app_state::FareLedgerApp;
use crate::ui::components::styling::{colors, draw_table_header_background, format_brl};

impl FareLedgerApp {
    /// Render the transaction table for the selected period
    pub fn render_record_table(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("📋 Records")
                .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                .color(colors::TEXT_PRIMARY)
                .strong(),
        );
        ui.add_space(6.0);

        if self.visible_records.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("No records found for the selected period.")
                        .color(colors::TEXT_MUTED)
                        .italics(),
                );
                ui.add_space(12.0);
            });
            return;
        }

        let records = self.visible_records.clone();
        let mut open_detail: Option<Record> = None;
        let mut request_delete: Option<Record> = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(60.0)) // TYPE
            .column(Column::remainder()) // DETAILS
            .column(Column::exact(110.0)) // AMOUNT
            .column(Column::exact(100.0)) // DATE
            .column(Column::exact(60.0)) // delete
            .header(32.0, |mut header| {
                for title in ["TYPE", "DETAILS", "AMOUNT", "DATE", ""] {
                    header.col(|ui| {
                        let rect = ui.max_rect();
                        draw_table_header_background(ui, rect);

                        ui.with_layout(
                            egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                            |ui| {
                                ui.colored_label(
                                    egui::Color32::WHITE,
                                    egui::RichText::new(title)
                                        .font(egui::FontId::new(
                                            14.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .strong(),
                                );
                            },
                        );
                    });
                }
            })
            .body(|mut body| {
                for record in &records {
                    let kind_color = match record.kind() {
                        RecordKind::Income => colors::INCOME_GREEN,
                        RecordKind::Expense => colors::EXPENSE_RED,
                    };

                    body.row(36.0, |mut row| {
                        // Kind arrow
                        row.col(|ui| {
                            let arrow = match record.kind() {
                                RecordKind::Income => "⬆",
                                RecordKind::Expense => "⬇",
                            };
                            ui.with_layout(
                                egui::Layout::centered_and_justified(
                                    egui::Direction::LeftToRight,
                                ),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(arrow)
                                            .font(egui::FontId::new(
                                                16.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .color(kind_color),
                                    );
                                },
                            );
                        });

                        // Details, clickable for the full record view
                        row.col(|ui| {
                            ui.add_space(8.0);
                            let response = ui
                                .add(
                                    egui::Label::new(
                                        egui::RichText::new(detail_text(record))
                                            .color(colors::TEXT_PRIMARY),
                                    )
                                    .sense(egui::Sense::click())
                                    .truncate(),
                                )
                                .on_hover_cursor(egui::CursorIcon::PointingHand)
                                .on_hover_text("Click for details");
                            if response.clicked() {
                                open_detail = Some(record.clone());
                            }
                        });

                        // Amount in the kind color
                        row.col(|ui| {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.add_space(8.0);
                                    ui.label(
                                        egui::RichText::new(format_brl(record.amount()))
                                            .color(kind_color)
                                            .strong(),
                                    );
                                },
                            );
                        });

                        // Date
                        row.col(|ui| {
                            ui.add_space(8.0);
                            ui.label(
                                egui::RichText::new(display_date(record))
                                    .color(colors::TEXT_PRIMARY),
                            );
                        });

                        // Delete
                        row.col(|ui| {
                            ui.with_layout(
                                egui::Layout::centered_and_justified(
                                    egui::Direction::LeftToRight,
                                ),
                                |ui| {
                                    let delete = egui::Button::new(
                                        egui::RichText::new("🗑").color(colors::EXPENSE_RED),
                                    )
                                    .frame(false);
                                    if ui
                                        .add(delete)
                                        .on_hover_text("Delete this record")
                                        .clicked()
                                    {
                                        request_delete = Some(record.clone());
                                    }
                                },
                            );
                        });
                    });
                }
            });

        if let Some(record) = open_detail {
            self.detail_record = Some(record);
        }
        if let Some(record) = request_delete {
            self.pending_delete = Some(record);
        }
    }
}

/// One-line description shown in the details column
fn detail_text(record: &Record) -> String {
    match record {
        Record::Income {
            client,
            destination,
            ..
        } => format!("{} - {}", client, destination),
        Record::Expense {
            category,
            description,
            ..
        } => format!("{}: {}", category, description),
    }
}

/// Table date rendering, day first. Falls back to the raw string for a
/// date that does not parse.
fn display_date(record: &Record) -> String {
    match NaiveDate::parse_from_str(record.date(), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => record.date().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_text_by_kind() {
        let income = Record::income(
            "Maria".to_string(),
            "Airport".to_string(),
            "2024-03-05".to_string(),
            150.0,
        );
        assert_eq!(detail_text(&income), "Maria - Airport");

        let expense = Record::expense(
            "Fuel".to_string(),
            "Tank refill".to_string(),
            "2024-03-06".to_string(),
            40.0,
        );
        assert_eq!(detail_text(&expense), "Fuel: Tank refill");
    }

    #[test]
    fn test_display_date_is_day_first() {
        let record = Record::income(
            String::new(),
            String::new(),
            "2024-03-05".to_string(),
            1.0,
        );
        assert_eq!(display_date(&record), "05/03/2024");
    }

    #[test]
    fn test_display_date_falls_back_to_the_raw_string() {
        let record = Record::income(String::new(), String::new(), "not-a-date".to_string(), 1.0);
        assert_eq!(display_date(&record), "not-a-date");
    }
}
