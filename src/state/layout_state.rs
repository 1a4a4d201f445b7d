//! UI layout state management.
//!
//! This module tracks the measured viewport of the page panel and the
//! user-adjustable display options.

use eduhack::NavConfig;

/// State related to UI layout and sizing.
///
/// Responsibilities:
/// - Tracking the current scroll offset and viewport width
/// - Holding display toggles persisted across sessions
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Vertical scroll offset of the page panel, in points
    scroll_offset: f32,
    /// Width of the window content area, in points.
    ///
    /// The single width behind both the header layout and the navigation
    /// offset.
    viewport_width: f32,
    /// Whether the floating particles are drawn
    show_particles: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            scroll_offset: 0.0,
            viewport_width: 1200.0,
            show_particles: true,
        }
    }

    pub fn with_particles(show_particles: bool) -> Self {
        Self {
            show_particles,
            ..Self::new()
        }
    }

    // ===== Layout Queries =====

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn show_particles(&self) -> bool {
        self.show_particles
    }

    /// True when the viewport is below the navigation breakpoint
    pub fn is_narrow(&self, config: &NavConfig) -> bool {
        config.is_narrow(self.viewport_width)
    }

    // ===== Layout Mutations =====

    /// Records the page panel scroll offset of the current frame
    pub fn set_scroll_offset(&mut self, scroll_offset: f32) {
        self.scroll_offset = scroll_offset;
    }

    /// Records the window width at the start of the frame
    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width;
    }

    /// Returns a mutable reference to the particles toggle (for UI handlers).
    pub(crate) fn show_particles_mut(&mut self) -> &mut bool {
        &mut self.show_particles
    }

    /// Scroll back to the top, for a freshly loaded page
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0.0;
    }
}
