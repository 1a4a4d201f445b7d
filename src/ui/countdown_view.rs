//! Countdown display: four zero-padded units with labels.

use eframe::egui;
use egui::RichText;
use eduhack::countdown::format_unit;
use eduhack::{Countdown, ThemeColors};

/// Renders the latest countdown reading.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `countdown` - Countdown to display; never ticked here
/// * `labels` - Labels for days, hours, minutes and seconds
/// * `colors` - Palette of the active theme
pub fn render_countdown(ui: &mut egui::Ui, countdown: &Countdown, labels: &[String; 4], colors: &ThemeColors) {
    let values = countdown.reading().time_left.fields();

    ui.horizontal(|ui| {
        for (value, label) in values.iter().zip(labels.iter()) {
            egui::Frame::default()
                .fill(colors.card_background)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(16, 10))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(format_unit(*value)).size(32.0).strong().color(colors.accent));
                        ui.label(RichText::new(label.as_str()).small().color(colors.text_muted));
                    });
                });
        }
    });
}
