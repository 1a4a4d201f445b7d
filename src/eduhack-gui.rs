//! EduHack landing page viewer
//!
//! Renders an event landing page with egui. The viewer features:
//! - Light/dark theme toggle with a persisted preference that follows the
//!   OS theme until the user picks one
//! - Navigation bar with scroll-spy highlighting and smooth scrolling
//! - Countdown to the event start, refreshed once per second
//! - In-page search over headings, paragraphs and list items
//! - Floating particle decoration
//!
//! The application is built with a modular architecture:
//! - `app/` - Composition root and coordinators
//! - `io/` - Asynchronous page file loading
//! - `ui/` - Panel rendering and interaction
//! - `state/` - Page, search and layout state
//!
//! Usage:
//!   eduhack-gui [page.json] [--theme dark] [--countdown 2025-11-01T09:00:00] [--seed 42]

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;
use eduhack::ThemeMode;
use std::path::PathBuf;

mod io;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, SiteOverrides, ThemeCoordinator};
use io::AsyncLoader;
use state::LayoutState;
use ui::panel_manager::{PanelInteraction, PanelManager};

const SHOW_PARTICLES_KEY: &str = "show_particles";

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "eduhack-gui")]
#[command(about = "View the EduHack landing page or a page file")]
struct Args {
    /// JSON page file to open; the built-in page is shown otherwise
    page: Option<PathBuf>,

    /// Force a theme (light or dark) and disable the toggle
    #[arg(short, long)]
    theme: Option<ThemeMode>,

    /// Countdown target, e.g. 2025-11-01T09:00:00 (local time)
    #[arg(short, long)]
    countdown: Option<String>,

    /// Seed for reproducible particle placement
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Main application entry point that initializes and launches the viewer.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();
    let overrides = SiteOverrides {
        theme: args.theme,
        countdown: args.countdown,
        seed: args.seed,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("EduHack"),
        ..Default::default()
    };

    eframe::run_native(
        "EduHack",
        options,
        Box::new(move |cc| Ok(Box::new(EduHackApp::new(cc, args.page, overrides)))),
    )
}

/// The main application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles page loading and interactions
/// - `ThemeCoordinator` handles the theme surface and preference persistence
/// - `PanelManager` handles UI panel layout and rendering
struct EduHackApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous page loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl EduHackApp {
    /// Creates the viewer with preferences restored from persistent storage.
    /// Shows the built-in page until the optional page file has loaded.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>, overrides: SiteOverrides) -> Self {
        let ctx = &cc.egui_ctx;
        ThemeCoordinator::install_palettes(ctx);

        let preferences = ThemeCoordinator::load_preferences(cc.storage);
        let show_particles: bool = SettingsCoordinator::load_setting_or(cc.storage, SHOW_PARTICLES_KEY, true);

        let mut state = AppState::new(preferences, overrides, LayoutState::with_particles(show_particles), ctx);
        let mut loader = AsyncLoader::new();
        ApplicationCoordinator::open_demo_page(&mut state, &mut loader, ctx);

        Self {
            state,
            loader,
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        match interaction {
            PanelInteraction::OpenPageRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.loader, path, ctx);
            }
            PanelInteraction::OpenDemoRequested => {
                ApplicationCoordinator::open_demo_page(&mut self.state, &mut self.loader, ctx);
            }
            PanelInteraction::NavigateTo(id) => {
                ApplicationCoordinator::navigate_to(&mut self.state, &id, now);
            }
            PanelInteraction::ToggleTheme => ApplicationCoordinator::toggle_theme(&mut self.state),
            PanelInteraction::ToggleSearch => ApplicationCoordinator::toggle_search(&mut self.state),
            PanelInteraction::ToggleMenu => ApplicationCoordinator::toggle_menu(&mut self.state),
            PanelInteraction::SearchQueryChanged => ApplicationCoordinator::update_search(&mut self.state),
            PanelInteraction::SearchResultClicked(region_id) => {
                ApplicationCoordinator::go_to_result(&mut self.state, &region_id, now);
            }
        }
        ctx.request_repaint();
    }
}

impl eframe::App for EduHackApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_preferences(storage, &self.state.preferences);
        SettingsCoordinator::save_setting(storage, SHOW_PARTICLES_KEY, &self.state.layout.show_particles());
    }

    /// Main update loop:
    /// 1. Check for async loading completion
    /// 2. Follow OS theme changes and advance the countdown
    /// 3. Load initial file if specified via command line
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader, ctx);

        ThemeCoordinator::track_system_theme(&mut self.state, ctx);
        ApplicationCoordinator::tick_countdown_now(&mut self.state, ctx);

        // Persist a new theme choice right away (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            ThemeCoordinator::persist_if_changed(storage, &self.state.preferences);
        }

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.loader, path, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
