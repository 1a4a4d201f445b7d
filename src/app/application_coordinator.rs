//! Application-level coordination and workflow management.
//!
//! Handles page loading, error reporting, and routing of user interactions
//! to the page controllers.

use crate::app::{AppState, ThemeCoordinator};
use crate::io::{AsyncLoader, LoadResult};
use eduhack::countdown;
use eduhack::PageDocument;
use std::path::PathBuf;
use std::time::Duration;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing page loading workflows
/// - Installing a loaded page into the controllers
/// - Navigation, search and theme interactions
/// - Driving the countdown cadence
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts loading a page file in the background.
    ///
    /// The current page stays visible until the new one is ready.
    pub fn open_file(loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        loader.start_file_load(path, ctx);
    }

    /// Loads the built-in page.
    pub fn open_demo_page(state: &mut AppState, loader: &mut AsyncLoader, ctx: &egui::Context) {
        match loader.load_demo_page() {
            Ok(document) => Self::install_page(state, document, None, ctx),
            Err(e) => {
                tracing::error!("Failed to build demo page: {}", e);
                state.error_message = Some(format!("Error loading demo page: {}", e));
            }
        }
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader, ctx: &egui::Context) -> bool {
        match loader.check_completion() {
            LoadResult::Success { document, path } => {
                Self::install_page(state, document, path, ctx);
                true
            }
            LoadResult::Error(error_msg) => {
                // Keep the previous page on screen
                tracing::error!("{}", error_msg);
                state.error_message = Some(format!("Error loading page: {}", error_msg));
                true
            }
            LoadResult::None => false,
        }
    }

    /// Makes `document` the current page and rebuilds every controller.
    pub fn install_page(state: &mut AppState, mut document: PageDocument, path: Option<PathBuf>, ctx: &egui::Context) {
        state.overrides.apply(&mut document.config);
        state.page.load_page(document, path);
        state.reset_page_controllers();
        ThemeCoordinator::configure(state, ctx);
    }

    // ===== Interactions =====

    /// Smooth-scrolls to the region with `id` and closes the mobile menu.
    ///
    /// # Arguments
    /// * `state` - Application state
    /// * `id` - Target element id; unknown ids are ignored
    /// * `now` - Current frame time in seconds
    pub fn navigate_to(state: &mut AppState, id: &str, now: f64) {
        let started = state.navigation.scroll_to_section(
            id,
            state.layout.scroll_offset(),
            state.layout.viewport_width(),
            now,
        );
        if started {
            tracing::debug!("Navigating to '{}'", id);
        }
        state.navigation.close_menu();
    }

    /// Handles a click on a search result.
    ///
    /// Scrolls to the result's region when it has one, then closes the
    /// panel and clears the query.
    pub fn go_to_result(state: &mut AppState, region_id: &str, now: f64) {
        if !region_id.is_empty() {
            Self::navigate_to(state, region_id, now);
        }
        state.search.close();
        state.search.clear();
    }

    /// Re-runs the search for the current query.
    pub fn update_search(state: &mut AppState) {
        state.search.refresh(state.page.index());
    }

    pub fn toggle_search(state: &mut AppState) {
        state.search.toggle(None);
    }

    pub fn toggle_theme(state: &mut AppState) {
        state.theme.toggle();
    }

    pub fn toggle_menu(state: &mut AppState) {
        state.navigation.toggle_menu();
    }

    // ===== Timers =====

    /// Recomputes the countdown when due and schedules the next repaint.
    pub fn tick_countdown(state: &mut AppState, now_ms: i64, ctx: &egui::Context) {
        state.countdown.tick(now_ms);
        if let Some(wait_ms) = state.countdown.millis_until_next_tick(now_ms) {
            ctx.request_repaint_after(Duration::from_millis(wait_ms));
        }
    }

    /// [`Self::tick_countdown`] at the current wall-clock time.
    pub fn tick_countdown_now(state: &mut AppState, ctx: &egui::Context) {
        Self::tick_countdown(state, countdown::now_millis(), ctx);
    }
}
