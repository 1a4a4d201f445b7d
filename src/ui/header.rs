//! Header panel UI rendering
//!
//! Handles the top navigation bar: site title, section links with the
//! scroll-spy highlight, search and theme toggles, the mobile menu button,
//! and the page file controls.

use eframe::egui;
use egui::RichText;
use eduhack::{palette, MenuIcon, ThemeMode, ThemePolicy};
use std::path::PathBuf;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a page file
    OpenPageRequested(PathBuf),
    /// User clicked "Demo Page"
    OpenDemoRequested,
    /// User clicked a navigation link
    NavigateTo(String),
    ToggleTheme,
    ToggleSearch,
    ToggleMenu,
}

/// Renders the header bar
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let narrow = state.layout.is_narrow(state.navigation.config());

    ui.horizontal(|ui| {
        let title = if state.page.title().is_empty() { "EduHack" } else { state.page.title() };
        ui.label(RichText::new(title).heading().strong().color(ui.visuals().hyperlink_color));

        ui.separator();

        if !narrow {
            if let Some(target) = render_nav_links(ui, state) {
                interaction = Some(HeaderInteraction::NavigateTo(target));
            }
        }

        // Controls on the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if narrow {
                let icon = match state.navigation.menu().icon() {
                    MenuIcon::Menu => "☰",
                    MenuIcon::Close => "✕",
                };
                if ui.button(icon).on_hover_text("Menu").clicked() {
                    interaction = Some(HeaderInteraction::ToggleMenu);
                }
            }

            // Sun in dark mode, moon in light mode
            let theme_icon = match state.theme.current() {
                ThemeMode::Dark => "☀",
                ThemeMode::Light => "🌙",
            };
            let toggleable = state.theme.policy() == ThemePolicy::UserToggleable;
            let theme_button = ui
                .add_enabled(toggleable, egui::Button::new(theme_icon))
                .on_hover_text("Toggle theme")
                .on_disabled_hover_text("Theme is fixed for this page");
            if theme_button.clicked() {
                interaction = Some(HeaderInteraction::ToggleTheme);
            }

            let search_button = ui.button("🔍").on_hover_text("Search");
            state.search.set_container(search_button.rect);
            if search_button.clicked() {
                interaction = Some(HeaderInteraction::ToggleSearch);
            }

            ui.separator();

            ui.checkbox(state.layout.show_particles_mut(), "✨");

            if ui.button("🏠 Demo Page").clicked() {
                interaction = Some(HeaderInteraction::OpenDemoRequested);
            }

            if ui.button("📂 Open Page").clicked() {
                let mut dialog = rfd::FileDialog::new().add_filter("Page Files", &["json"]);

                if let Ok(cwd) = std::env::current_dir() {
                    dialog = dialog.set_directory(cwd);
                }

                if let Some(path) = dialog.pick_file() {
                    interaction = Some(HeaderInteraction::OpenPageRequested(path));
                }
            }
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }

    interaction
}

/// Renders one selectable label per navigation link.
///
/// Returns the target id of a clicked link.
pub fn render_nav_links(ui: &mut egui::Ui, state: &AppState) -> Option<String> {
    let document = state.page.document()?;
    let active_color = palette(state.theme.current()).nav_active;
    let mut clicked = None;

    for link in &document.nav {
        let Some(target) = link.target_id() else {
            continue;
        };
        let active = state.navigation.active_section() == Some(target);
        let mut label = RichText::new(link.label.as_str());
        if active {
            label = label.color(active_color).strong();
        }
        if ui.selectable_label(active, label).clicked() {
            clicked = Some(target.to_string());
        }
    }

    clicked
}
