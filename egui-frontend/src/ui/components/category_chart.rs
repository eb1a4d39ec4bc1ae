//! # Category Chart Module
//!
//! This module renders the expense category doughnut using egui's painting
//! primitives, with a color legend on the right and a hover tooltip naming
//! the slice under the pointer.
//!
//! ## Chart Lifecycle:
//! The slice layout lives in a `ChartModel` owned by the app state. The
//! model is a disposable artifact: every dashboard refresh clears the
//! previous model and rebuilds it from the current category breakdown, so
//! a stale chart can never outlive the data it was derived from.

use eframe::egui;
use std::f32::consts::TAU;

use crate::ui::app_state::FareLedgerApp;
use crate::ui::components::styling::{self, colors, format_brl};

/// One doughnut slice
#[derive(Debug, Clone)]
pub struct ChartSegment {
    pub label: String,
    pub value: f64,
    /// Share of the whole, 0..=1
    pub fraction: f32,
    /// Where the slice starts, as a fraction of the full turn from 12 o'clock
    pub start: f32,
    /// Where the slice ends, as a fraction of the full turn
    pub end: f32,
    pub color: egui::Color32,
}

/// The disposable slice layout the doughnut is painted from
#[derive(Debug, Default)]
pub struct ChartModel {
    pub title: String,
    pub segments: Vec<ChartSegment>,
    pub total: f64,
}

impl ChartModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous chart contents
    pub fn clear(&mut self) {
        self.title.clear();
        self.segments.clear();
        self.total = 0.0;
    }

    /// Build the slice layout from a category breakdown. Slices keep the
    /// breakdown's order, clockwise from 12 o'clock.
    pub fn rebuild(&mut self, title: String, breakdown: &[(String, f64)]) {
        self.title = title;
        self.total = breakdown.iter().map(|(_, value)| value).sum();

        // A zero or NaN total has no meaningful slices
        if !(self.total > 0.0) {
            return;
        }

        let mut cursor = 0.0_f32;
        for (label, value) in breakdown {
            let fraction = (value / self.total) as f32;
            let start = cursor;
            let end = cursor + fraction;

            self.segments.push(ChartSegment {
                label: label.clone(),
                value: *value,
                fraction,
                start,
                end,
                color: styling::category_color(label),
            });

            cursor = end;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Slice under a point given as a fraction of the turn from 12 o'clock
    pub fn segment_at(&self, turn_fraction: f32) -> Option<&ChartSegment> {
        self.segments
            .iter()
            .find(|segment| turn_fraction >= segment.start && turn_fraction < segment.end)
    }
}

impl FareLedgerApp {
    /// Render the doughnut card: title, slices, legend and hover tooltip
    pub fn render_chart_section(&self, ui: &mut egui::Ui) {
        let desired = egui::vec2(ui.available_width(), 280.0);
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::hover());

        styling::draw_card_container(ui, rect, 12.0);

        let painter = ui.painter();

        painter.text(
            egui::pos2(rect.center().x, rect.top() + 28.0),
            egui::Align2::CENTER_CENTER,
            &self.chart.title,
            egui::FontId::new(18.0, egui::FontFamily::Proportional),
            colors::TEXT_PRIMARY,
        );

        let outer_radius = 86.0;
        let inner_radius = 52.0;
        let stroke_width = outer_radius - inner_radius;
        let arc_radius = (outer_radius + inner_radius) / 2.0;
        let center = egui::pos2(
            rect.left() + rect.width() * 0.30,
            rect.top() + 48.0 + (rect.height() - 48.0) / 2.0,
        );

        if self.chart.is_empty() {
            painter.circle_stroke(
                center,
                arc_radius,
                egui::Stroke::new(stroke_width, colors::CHART_EMPTY_RING),
            );
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                "No expenses",
                egui::FontId::new(13.0, egui::FontFamily::Proportional),
                colors::TEXT_MUTED,
            );
        } else {
            for segment in &self.chart.segments {
                draw_doughnut_arc(painter, center, arc_radius, stroke_width, segment);
            }

            // Inner circle cleans up the hole edge
            painter.circle_filled(center, inner_radius, colors::CARD_BACKGROUND);

            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                format_brl(self.chart.total),
                egui::FontId::new(14.0, egui::FontFamily::Proportional),
                colors::TEXT_PRIMARY,
            );
        }

        // Legend on the right, one row per slice
        let legend_left = rect.left() + rect.width() * 0.55;
        let mut legend_y = rect.top() + 64.0;
        for segment in &self.chart.segments {
            let swatch = egui::Rect::from_min_size(
                egui::pos2(legend_left, legend_y),
                egui::vec2(14.0, 14.0),
            );
            painter.rect_filled(swatch, egui::Rounding::same(3.0), segment.color);

            painter.text(
                egui::pos2(legend_left + 22.0, legend_y + 7.0),
                egui::Align2::LEFT_CENTER,
                format!("{}: {}", segment.label, format_brl(segment.value)),
                egui::FontId::new(14.0, egui::FontFamily::Proportional),
                colors::TEXT_PRIMARY,
            );

            legend_y += 24.0;
        }

        // Tooltip for the slice under the pointer
        if let Some(pointer) = response.hover_pos() {
            let offset = pointer - center;
            let distance = offset.length();
            if distance >= inner_radius && distance <= outer_radius {
                if let Some(segment) = self.chart.segment_at(turn_fraction(offset)) {
                    let share = segment.fraction * 100.0;
                    response.on_hover_text(format!(
                        "{}: {} ({:.1}%)",
                        segment.label,
                        format_brl(segment.value),
                        share
                    ));
                }
            }
        }
    }
}

/// Fraction of the full turn from 12 o'clock, clockwise, for a vector out
/// of the chart center
fn turn_fraction(offset: egui::Vec2) -> f32 {
    // atan2 measures from 3 o'clock; slices start at 12 o'clock
    let mut turn = offset.y.atan2(offset.x) / TAU + 0.25;
    if turn < 0.0 {
        turn += 1.0;
    }
    turn
}

/// Draw one slice as a series of short line segments, since egui has no
/// native arc primitive
fn draw_doughnut_arc(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    stroke_width: f32,
    segment: &ChartSegment,
) {
    // Angles in painter space: 12 o'clock is -TAU/4
    let start_angle = segment.start * TAU - TAU / 4.0;
    let end_angle = segment.end * TAU - TAU / 4.0;

    // Roughly 3 pixels per line segment for a smooth curve
    let arc_length = (end_angle - start_angle).abs();
    let num_segments = (arc_length * radius / 3.0).ceil() as i32;
    let num_segments = num_segments.max(8).min(100);

    let angle_step = (end_angle - start_angle) / num_segments as f32;

    for i in 0..num_segments {
        let angle1 = start_angle + angle_step * i as f32;
        let angle2 = start_angle + angle_step * (i + 1) as f32;

        let point1 = egui::pos2(
            center.x + radius * angle1.cos(),
            center.y + radius * angle1.sin(),
        );
        let point2 = egui::pos2(
            center.x + radius * angle2.cos(),
            center.y + radius * angle2.sin(),
        );

        painter.line_segment([point1, point2], egui::Stroke::new(stroke_width, segment.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown() -> Vec<(String, f64)> {
        vec![
            ("Fuel".to_string(), 40.0),
            ("Meals".to_string(), 25.0),
            ("Tolls".to_string(), 35.0),
        ]
    }

    #[test]
    fn test_rebuild_lays_out_slices_in_breakdown_order() {
        let mut model = ChartModel::new();
        model.rebuild("Expenses for March".to_string(), &breakdown());

        assert_eq!(model.segments.len(), 3);
        assert_eq!(model.segments[0].label, "Fuel");
        assert_eq!(model.segments[1].label, "Meals");
        assert_eq!(model.segments[2].label, "Tolls");
        assert_eq!(model.total, 100.0);

        // Slices tile the circle without gaps
        assert_eq!(model.segments[0].start, 0.0);
        assert_eq!(model.segments[0].end, model.segments[1].start);
        assert_eq!(model.segments[1].end, model.segments[2].start);
        assert!((model.segments[2].end - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rebuild_fractions_sum_to_one() {
        let mut model = ChartModel::new();
        model.rebuild(String::new(), &breakdown());

        let sum: f32 = model.segments.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_clear_empties_the_model() {
        let mut model = ChartModel::new();
        model.rebuild("Expenses for March".to_string(), &breakdown());
        assert!(!model.is_empty());

        model.clear();
        assert!(model.is_empty());
        assert!(model.title.is_empty());
        assert_eq!(model.total, 0.0);
    }

    #[test]
    fn test_clear_then_rebuild_replaces_the_layout() {
        let mut model = ChartModel::new();
        model.rebuild("Expenses for March".to_string(), &breakdown());

        model.clear();
        model.rebuild(
            "Expenses for April".to_string(),
            &[("Other".to_string(), 10.0)],
        );

        assert_eq!(model.segments.len(), 1);
        assert_eq!(model.segments[0].label, "Other");
        assert_eq!(model.title, "Expenses for April");
        assert_eq!(model.total, 10.0);
    }

    #[test]
    fn test_empty_breakdown_builds_no_slices() {
        let mut model = ChartModel::new();
        model.rebuild("Expenses for April".to_string(), &[]);
        assert!(model.is_empty());
        assert_eq!(model.total, 0.0);
    }

    #[test]
    fn test_nan_total_builds_no_slices() {
        let mut model = ChartModel::new();
        model.rebuild(
            "Expenses for March".to_string(),
            &[("Fuel".to_string(), f64::NAN)],
        );
        assert!(model.is_empty());
    }

    #[test]
    fn test_segment_at_maps_turn_fractions_to_slices() {
        let mut model = ChartModel::new();
        model.rebuild(String::new(), &breakdown());

        assert_eq!(model.segment_at(0.0).unwrap().label, "Fuel");
        assert_eq!(model.segment_at(0.39).unwrap().label, "Fuel");
        assert_eq!(model.segment_at(0.41).unwrap().label, "Meals");
        assert_eq!(model.segment_at(0.99).unwrap().label, "Tolls");
        assert!(model.segment_at(1.5).is_none());
    }

    #[test]
    fn test_slice_colors_follow_the_category_palette() {
        let mut model = ChartModel::new();
        model.rebuild(
            String::new(),
            &[
                ("Fuel".to_string(), 1.0),
                ("Parking fine".to_string(), 1.0),
            ],
        );

        assert_eq!(model.segments[0].color, colors::FUEL);
        assert_eq!(model.segments[1].color, colors::CATEGORY_FALLBACK);
    }

    #[test]
    fn test_turn_fraction_starts_at_twelve_oclock() {
        // Straight up
        assert!(turn_fraction(egui::vec2(0.0, -1.0)).abs() < 1e-5);
        // Right
        assert!((turn_fraction(egui::vec2(1.0, 0.0)) - 0.25).abs() < 1e-5);
        // Straight down
        assert!((turn_fraction(egui::vec2(0.0, 1.0)) - 0.5).abs() < 1e-5);
        // Left
        assert!((turn_fraction(egui::vec2(-1.0, 0.0)) - 0.75).abs() < 1e-5);
    }
}
