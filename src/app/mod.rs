//! Application-level modules for the EduHack page viewer.
//!
//! This module contains the composition root and the coordinators that wire
//! egui and eframe to the page controllers.

mod app_state;
mod application_coordinator;
mod theme_coordinator;
mod settings_coordinator;
mod site_overrides;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::{SharedPreferences, ThemeCoordinator};
pub use settings_coordinator::SettingsCoordinator;
pub use site_overrides::SiteOverrides;
