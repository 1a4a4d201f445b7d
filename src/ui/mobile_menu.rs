//! Collapsible navigation for narrow windows.

use eframe::egui;
use egui::RichText;
use eduhack::palette;
use crate::app::AppState;

/// Renders the vertical link list while the mobile menu is open.
///
/// Returns the target id of a clicked link.
pub fn render_mobile_menu(ui: &mut egui::Ui, state: &AppState) -> Option<String> {
    let document = state.page.document()?;
    let active_color = palette(state.theme.current()).nav_active;
    let mut clicked = None;

    ui.vertical(|ui| {
        for link in &document.nav {
            let Some(target) = link.target_id() else {
                continue;
            };
            let active = state.navigation.active_section() == Some(target);
            let mut label = RichText::new(link.label.as_str());
            if active {
                label = label.color(active_color);
            }
            let response = ui.add_sized(
                [ui.available_width(), 28.0],
                egui::Button::selectable(active, label),
            );
            if response.clicked() {
                clicked = Some(target.to_string());
            }
        }
    });

    clicked
}
