//! Centralized application state for the EduHack page viewer.
//!
//! `AppState` is the composition root: it owns every page controller, and
//! the coordinators route host events into them. Nothing is looked up
//! globally.

use eduhack::{Countdown, NavConfig, NavigationController, Particle, ParticleField, SiteConfig, ThemeController, ThemeMode};

use crate::app::{SharedPreferences, SiteOverrides, ThemeCoordinator};
use crate::state::{LayoutState, PageState, SearchState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Loaded page and its content index
    pub page: PageState,

    /// Search panel visibility, query and results
    pub search: SearchState,

    /// Measured viewport and display toggles
    pub layout: LayoutState,

    // ===== Page Controllers =====
    /// Light/dark mode and the stored preference
    pub theme: ThemeController,

    /// Scroll spy, anchor navigation and mobile menu
    pub navigation: NavigationController,

    pub countdown: Countdown,

    /// Decoration, regenerated per page load
    pub particles: Vec<Particle>,

    // ===== Top-Level State =====
    /// Preference values backing the theme controller
    pub preferences: SharedPreferences,

    /// Command-line settings applied to every loaded page
    pub overrides: SiteOverrides,

    /// Last OS theme seen, to detect changes
    pub system_theme: Option<ThemeMode>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates the state for an empty page with the default configuration.
    ///
    /// # Arguments
    /// * `preferences` - Stored preferences loaded at startup
    /// * `overrides` - Command-line settings
    /// * `layout` - Layout restored from storage
    /// * `ctx` - egui context acting as the theme surface
    pub fn new(
        preferences: SharedPreferences,
        overrides: SiteOverrides,
        layout: LayoutState,
        ctx: &egui::Context,
    ) -> Self {
        let config = overrides.applied(SiteConfig::default());
        let theme = ThemeCoordinator::create_controller(&preferences, &config, ctx);

        Self {
            page: PageState::new(),
            search: SearchState::new(),
            layout,
            theme,
            navigation: NavigationController::new(NavConfig::from(&config)),
            countdown: Countdown::from_config(&config.countdown_target),
            particles: ParticleField::with_config(config.particle_count, config.particle_seed).generate(),
            preferences,
            overrides,
            system_theme: ThemeCoordinator::ambient_theme(ctx),
            error_message: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Rebuilds the page controllers from the loaded page's configuration.
    ///
    /// The theme controller is handled by [`ThemeCoordinator::configure`].
    pub fn reset_page_controllers(&mut self) {
        let config = self.page.config();
        self.navigation = NavigationController::new(NavConfig::from(&config));
        self.countdown = Countdown::from_config(&config.countdown_target);
        self.particles = ParticleField::with_config(config.particle_count, config.particle_seed).generate();
        self.search.reset();
        self.layout.reset_scroll();
        self.error_message = None;
    }
}
