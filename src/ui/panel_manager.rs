//! Panel orchestration and layout management.
//!
//! Lays out the header, mobile menu, status bar, page and search panels,
//! and funnels their interactions into one enum for the coordinator.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{header, mobile_menu, page_panel, search_panel, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    /// User requested to open a page file
    OpenPageRequested(std::path::PathBuf),
    /// User requested the built-in page
    OpenDemoRequested,
    /// A navigation link was clicked (header or mobile menu)
    NavigateTo(String),
    ToggleTheme,
    ToggleSearch,
    ToggleMenu,
    /// The search query was edited
    SearchQueryChanged,
    /// A search result was clicked; carries its region id
    SearchResultClicked(String),
}

impl From<header::HeaderInteraction> for PanelInteraction {
    fn from(interaction: header::HeaderInteraction) -> Self {
        match interaction {
            header::HeaderInteraction::OpenPageRequested(path) => PanelInteraction::OpenPageRequested(path),
            header::HeaderInteraction::OpenDemoRequested => PanelInteraction::OpenDemoRequested,
            header::HeaderInteraction::NavigateTo(id) => PanelInteraction::NavigateTo(id),
            header::HeaderInteraction::ToggleTheme => PanelInteraction::ToggleTheme,
            header::HeaderInteraction::ToggleSearch => PanelInteraction::ToggleSearch,
            header::HeaderInteraction::ToggleMenu => PanelInteraction::ToggleMenu,
        }
    }
}

impl From<search_panel::SearchPanelInteraction> for PanelInteraction {
    fn from(interaction: search_panel::SearchPanelInteraction) -> Self {
        match interaction {
            search_panel::SearchPanelInteraction::QueryChanged => PanelInteraction::SearchQueryChanged,
            search_panel::SearchPanelInteraction::ResultClicked(id) => PanelInteraction::SearchResultClicked(id),
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        state.layout.set_viewport_width(ctx.content_rect().width());

        // Header panel at the top
        let header_response = egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(header_interaction.into());
            }

            if state.layout.is_narrow(state.navigation.config()) && state.navigation.menu().is_open() {
                ui.separator();
                if let Some(target) = mobile_menu::render_mobile_menu(ui, state) {
                    interaction = Some(PanelInteraction::NavigateTo(target));
                }
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loader);
        });

        // Page content fills the rest
        egui::CentralPanel::default().show(ctx, |ui| {
            page_panel::render_page_panel(ui, state);
        });

        // Search dropdown floats over the page, below the header
        let search_top = header_response.response.rect.bottom();
        if let Some(search_interaction) = search_panel::render_search_panel(ctx, state, search_top) {
            interaction = Some(search_interaction.into());
        }

        // Clicks outside the search widget close it
        let pressed_at = ctx.input(|i| if i.pointer.any_pressed() { i.pointer.interact_pos() } else { None });
        if let Some(pos) = pressed_at {
            state.search.handle_click(pos);
        }

        interaction
    }
}
