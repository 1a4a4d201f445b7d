//! Search dropdown rendering
//!
//! A floating panel under the header with the query field and up to eight
//! results, each showing its region label and an excerpt.

use eframe::egui;
use egui::RichText;
use eduhack::search::excerpt;
use crate::app::AppState;

const PANEL_WIDTH: f32 = 360.0;
const NO_RESULTS_TEXT: &str = "No results found";

/// Result of user interaction with the search panel
pub enum SearchPanelInteraction {
    /// The query text was edited
    QueryChanged,
    /// A result was clicked; carries its region id (possibly empty)
    ResultClicked(String),
}

/// Renders the search panel while it is open
///
/// # Arguments
/// * `ctx` - The egui context
/// * `state` - Mutable reference to application state
/// * `top` - Screen y coordinate of the panel's top edge
pub fn render_search_panel(ctx: &egui::Context, state: &mut AppState, top: f32) -> Option<SearchPanelInteraction> {
    if !state.search.is_open() {
        return None;
    }

    let mut interaction = None;
    let excerpt_chars = state.page.config().excerpt_chars;
    let focus = state.search.take_focus_request();

    let area = egui::Area::new(egui::Id::new("search_panel"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, top + 4.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(PANEL_WIDTH);

                let edit = ui.add(
                    egui::TextEdit::singleline(state.search.query_mut())
                        .hint_text("Search...")
                        .desired_width(f32::INFINITY),
                );
                if focus {
                    edit.request_focus();
                }
                if edit.changed() {
                    interaction = Some(SearchPanelInteraction::QueryChanged);
                }

                let outcome = state.search.outcome();
                if !outcome.is_active() {
                    return;
                }

                ui.separator();

                if outcome.results().is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(NO_RESULTS_TEXT).weak());
                    });
                    return;
                }

                for result in outcome.results() {
                    let text = format!("{}\n{}", result.region_label, excerpt(&result.text, excerpt_chars));
                    let button = egui::Button::new(RichText::new(text)).frame(false).wrap();
                    if ui.add(button).clicked() {
                        interaction = Some(SearchPanelInteraction::ResultClicked(result.region_id.clone()));
                    }
                }
            });
        });

    state.search.extend_container(area.response.rect);
    interaction
}
