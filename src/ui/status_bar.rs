//! Status bar UI rendering
//!
//! Handles the bottom status bar describing the loaded page.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::io::AsyncLoader;

/// Text describing where the page came from
pub fn source_label(state: &AppState) -> String {
    match state.page.file_path() {
        Some(path) => path.display().to_string(),
        None => "Built-in page".to_string(),
    }
}

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loader` - Page loader, for the loading indicator
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) {
    ui.horizontal(|ui| {
        if loader.is_loading() {
            ui.spinner();
            let source = loader
                .loading_source()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            ui.label(RichText::new(format!("Loading {}", source)).strong());
            ui.label(RichText::new("|").strong());
        }

        if state.page.document().is_none() {
            ui.label(RichText::new("No page loaded").strong());
            return;
        }

        let countdown = if state.countdown.is_running() { "running" } else { "stopped" };
        let active = state.navigation.active_section().unwrap_or("-");

        ui.label(RichText::new(format!(
            "Page: {} | Source: {} | Indexed fragments: {} | Section: {} | Countdown: {} | Theme: {}",
            state.page.title(),
            source_label(state),
            state.page.index().len(),
            active,
            countdown,
            state.theme.current(),
        )).strong());
    });
}
