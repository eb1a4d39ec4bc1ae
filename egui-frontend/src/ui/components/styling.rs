//! # Styling Module
//!
//! This module contains all styling functions and color constants for the
//! Fare Ledger app, plus the one currency formatting routine everything
//! else uses.
//!
//! ## Key Functions:
//! - `setup_app_style()` - Configure global egui styling
//! - `draw_app_background()` - Paint the flat window background
//! - `draw_card_container()` - Draw card-style containers with shadows
//! - `draw_table_header_background()` - Teal header strip behind table headers
//! - `category_color()` - Doughnut slice color for an expense category
//! - `format_brl()` - "R$ 1234,56" currency rendering
//!
//! ## Color Palette:
//! A neutral light background with a teal accent for the header and table,
//! green for income, red for expenses, and a fixed five-color palette for
//! the expense categories with a neutral fallback for anything unexpected.

use eframe::egui;
use egui::Color32;

/// Setup UI styling for the entire application
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        // The flat background is painted by us, so panels stay transparent
        style.visuals.panel_fill = egui::Color32::TRANSPARENT;
        style.visuals.window_fill = egui::Color32::TRANSPARENT;
        style.visuals.button_frame = true;

        // In egui 0.28, text edits use extreme_bg_color
        style.visuals.extreme_bg_color = egui::Color32::WHITE;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);

        style
    });
}

/// Color constants used throughout the app
pub mod colors {
    use egui::Color32;

    /// Flat window background
    pub const APP_BACKGROUND: Color32 = Color32::from_rgb(244, 244, 244);

    /// Header title and table header accent
    pub const HEADER_TEAL: Color32 = Color32::from_rgb(0, 137, 123);

    /// Card styling
    pub const CARD_BACKGROUND: Color32 = Color32::WHITE;
    pub const CARD_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 20);

    /// Record kinds
    pub const INCOME_GREEN: Color32 = Color32::from_rgb(46, 125, 50);
    pub const EXPENSE_RED: Color32 = Color32::from_rgb(198, 40, 40);

    /// Text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(40, 40, 40);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);

    /// Doughnut slice colors, keyed by expense category
    pub const FUEL: Color32 = Color32::from_rgb(255, 205, 86);
    pub const TOLLS: Color32 = Color32::from_rgb(75, 192, 192);
    pub const MAINTENANCE: Color32 = Color32::from_rgb(255, 99, 132);
    pub const MEALS: Color32 = Color32::from_rgb(54, 162, 235);
    pub const OTHER: Color32 = Color32::from_rgb(153, 102, 255);

    /// Slice color for categories outside the fixed palette
    pub const CATEGORY_FALLBACK: Color32 = Color32::from_rgb(204, 204, 204);

    /// Ring shown when the period has no expenses to chart
    pub const CHART_EMPTY_RING: Color32 = Color32::from_rgb(230, 230, 230);
}

/// The five categories offered by the expense form
pub const CATEGORY_OPTIONS: [&str; 5] = ["Fuel", "Tolls", "Maintenance", "Meals", "Other"];

/// Slice color for an expense category. Unknown labels get the neutral
/// fallback rather than being dropped from the chart.
pub fn category_color(category: &str) -> Color32 {
    match category {
        "Fuel" => colors::FUEL,
        "Tolls" => colors::TOLLS,
        "Maintenance" => colors::MAINTENANCE,
        "Meals" => colors::MEALS,
        "Other" => colors::OTHER,
        _ => colors::CATEGORY_FALLBACK,
    }
}

/// Currency rendering used everywhere an amount is shown: two decimals with
/// a comma separator, "R$ 1234,56". A NaN amount renders as "R$ NaN" so
/// broken input stays visible instead of being swallowed.
pub fn format_brl(value: f64) -> String {
    format!("R$ {:.2}", value).replace('.', ",")
}

/// Paint the flat window background
pub fn draw_app_background(ui: &mut egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, egui::Rounding::ZERO, colors::APP_BACKGROUND);
}

/// Draw a card-style container with a subtle drop shadow
pub fn draw_card_container(ui: &mut egui::Ui, rect: egui::Rect, rounding: f32) {
    let painter = ui.painter();

    // Shadow first, offset slightly
    let shadow_rect = egui::Rect::from_min_size(rect.min + egui::vec2(2.0, 2.0), rect.size());
    painter.rect_filled(
        shadow_rect,
        egui::Rounding::same(rounding),
        colors::CARD_SHADOW,
    );

    painter.rect_filled(
        rect,
        egui::Rounding::same(rounding),
        colors::CARD_BACKGROUND,
    );
}

/// Teal strip behind a table header cell
pub fn draw_table_header_background(ui: &mut egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, egui::Rounding::ZERO, colors::HEADER_TEAL);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl_uses_comma_decimals() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(1234.5), "R$ 1234,50");
        assert_eq!(format_brl(110.0), "R$ 110,00");
    }

    #[test]
    fn test_format_brl_rounds_to_two_decimals() {
        assert_eq!(format_brl(0.005), "R$ 0,01");
        assert_eq!(format_brl(12.349), "R$ 12,35");
    }

    #[test]
    fn test_format_brl_keeps_the_sign() {
        assert_eq!(format_brl(-40.0), "R$ -40,00");
    }

    #[test]
    fn test_format_brl_shows_nan_visibly() {
        assert_eq!(format_brl(f64::NAN), "R$ NaN");
    }

    #[test]
    fn test_category_colors_cover_the_fixed_palette() {
        assert_eq!(category_color("Fuel"), colors::FUEL);
        assert_eq!(category_color("Tolls"), colors::TOLLS);
        assert_eq!(category_color("Maintenance"), colors::MAINTENANCE);
        assert_eq!(category_color("Meals"), colors::MEALS);
        assert_eq!(category_color("Other"), colors::OTHER);
    }

    #[test]
    fn test_unknown_categories_get_the_neutral_fallback() {
        assert_eq!(category_color("Parking fine"), colors::CATEGORY_FALLBACK);
        assert_eq!(category_color("fuel"), colors::CATEGORY_FALLBACK);
        assert_eq!(category_color(""), colors::CATEGORY_FALLBACK);
    }

    #[test]
    fn test_every_form_category_has_a_palette_color() {
        for category in CATEGORY_OPTIONS {
            assert_ne!(category_color(category), colors::CATEGORY_FALLBACK);
        }
    }
}
