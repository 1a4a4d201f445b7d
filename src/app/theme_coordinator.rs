//! Theme management and persistence coordination.
//!
//! Bridges the theme controller to egui: the egui context is the theme
//! surface, eframe storage backs the preference store, and the OS theme
//! reported by egui is the ambient signal.

use eduhack::theme::{apply_palette, palette};
use eduhack::{PreferenceStore, SiteConfig, ThemeController, ThemeMode, ThemeSurface};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::app::{AppState, SettingsCoordinator};

/// eframe storage key holding every site preference as one JSON map
const PREFERENCES_KEY: &str = "site_preferences";

#[derive(Debug, Default)]
struct PreferenceData {
    values: BTreeMap<String, String>,
    dirty: bool,
}

/// Preference store shared between the theme controller and the app.
///
/// The controller writes through one handle; the app copies the values into
/// eframe storage through another.
#[derive(Debug, Clone, Default)]
pub struct SharedPreferences {
    inner: Rc<RefCell<PreferenceData>>,
}

impl SharedPreferences {
    pub fn from_values(values: BTreeMap<String, String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PreferenceData { values, dirty: false })),
        }
    }

    /// Copy of all stored values
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.inner.borrow().values.clone()
    }

    /// Returns true once after any write
    pub fn take_dirty(&self) -> bool {
        std::mem::take(&mut self.inner.borrow_mut().dirty)
    }
}

impl PreferenceStore for SharedPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        let mut data = self.inner.borrow_mut();
        data.values.insert(key.to_string(), value);
        data.dirty = true;
    }
}

/// The egui context as the theme surface
pub struct EguiThemeSurface {
    ctx: egui::Context,
}

impl EguiThemeSurface {
    pub fn new(ctx: &egui::Context) -> Self {
        Self { ctx: ctx.clone() }
    }
}

impl ThemeSurface for EguiThemeSurface {
    fn is_dark(&self) -> bool {
        self.ctx.theme() == egui::Theme::Dark
    }

    fn set_dark(&mut self, dark: bool) {
        let theme = if dark { egui::Theme::Dark } else { egui::Theme::Light };
        self.ctx.set_theme(theme);
    }
}

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads stored preferences during application startup.
    pub fn load_preferences(storage: Option<&dyn eframe::Storage>) -> SharedPreferences {
        SharedPreferences::from_values(SettingsCoordinator::load_setting(storage, PREFERENCES_KEY))
    }

    /// Writes preferences to persistent storage.
    pub fn save_preferences(storage: &mut dyn eframe::Storage, preferences: &SharedPreferences) {
        SettingsCoordinator::save_setting(storage, PREFERENCES_KEY, &preferences.snapshot());
    }

    /// Writes preferences only if they changed since the last call.
    ///
    /// Called every frame so a crash does not lose a theme choice.
    pub fn persist_if_changed(storage: &mut dyn eframe::Storage, preferences: &SharedPreferences) {
        if preferences.take_dirty() {
            Self::save_preferences(storage, preferences);
        }
    }

    /// Installs the light and dark palettes into the egui style.
    ///
    /// Switching themes afterwards only flips the active egui theme.
    pub fn install_palettes(ctx: &egui::Context) {
        for (theme, mode) in [(egui::Theme::Light, ThemeMode::Light), (egui::Theme::Dark, ThemeMode::Dark)] {
            let mut visuals = theme.default_visuals();
            apply_palette(&palette(mode), &mut visuals);
            ctx.set_visuals_of(theme, visuals);
        }
    }

    /// OS theme preference as reported by the windowing backend
    pub fn ambient_theme(ctx: &egui::Context) -> Option<ThemeMode> {
        ctx.system_theme()
            .map(|theme| ThemeMode::from_dark_flag(theme == egui::Theme::Dark))
    }

    /// Builds and initializes a theme controller for `config`.
    pub fn create_controller(
        preferences: &SharedPreferences,
        config: &SiteConfig,
        ctx: &egui::Context,
    ) -> ThemeController {
        let mut controller = ThemeController::new(
            Box::new(preferences.clone()),
            Box::new(EguiThemeSurface::new(ctx)),
            config.preference_key.clone(),
            config.theme_policy,
        );

        let repaint_ctx = ctx.clone();
        controller.subscribe(move |_| repaint_ctx.request_repaint());
        controller.initialize(Self::ambient_theme(ctx));
        controller
    }

    /// Rebuilds the theme controller for the loaded page's configuration.
    pub fn configure(state: &mut AppState, ctx: &egui::Context) {
        let config = state.page.config();
        state.theme = Self::create_controller(&state.preferences, &config, ctx);
        state.system_theme = Self::ambient_theme(ctx);
    }

    /// Forwards OS theme changes to the controller.
    ///
    /// Called once per frame; only transitions are forwarded.
    pub fn track_system_theme(state: &mut AppState, ctx: &egui::Context) {
        let ambient = Self::ambient_theme(ctx);
        if ambient == state.system_theme {
            return;
        }
        state.system_theme = ambient;
        if let Some(mode) = ambient {
            if state.theme.on_ambient_change(mode) {
                tracing::info!("Following system theme: {}", mode);
            }
        }
    }
}
