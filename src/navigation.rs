//! Scroll-linked navigation.
//!
//! Provides:
//! - Scroll spy: which region the viewport is in
//! - Anchor navigation with a viewport-dependent offset
//! - Smooth scroll animation sampled once per frame
//! - Mobile menu visibility
//!
//! Offsets and extents are in the host's vertical units (egui points).

use std::collections::HashMap;

use crate::config::SiteConfig;

/// Duration of a smooth scroll in seconds
pub const SMOOTH_SCROLL_SECONDS: f64 = 0.45;

/// Vertical extent of a labeled region
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl Region {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Navigation tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    pub spy_epsilon: f32,
    pub narrow_breakpoint: f32,
    pub narrow_offset: f32,
    pub wide_offset: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

impl From<&SiteConfig> for NavConfig {
    fn from(config: &SiteConfig) -> Self {
        Self {
            spy_epsilon: config.scroll_spy_epsilon,
            narrow_breakpoint: config.narrow_breakpoint,
            narrow_offset: config.narrow_nav_offset,
            wide_offset: config.wide_nav_offset,
        }
    }
}

impl NavConfig {
    /// Distance kept between the viewport top and a navigation target
    pub fn nav_offset(&self, viewport_width: f32) -> f32 {
        if viewport_width < self.narrow_breakpoint {
            self.narrow_offset
        } else {
            self.wide_offset
        }
    }

    pub fn is_narrow(&self, viewport_width: f32) -> bool {
        viewport_width < self.narrow_breakpoint
    }
}

/// Tracks the active region for the current scroll offset.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    regions: Vec<Region>,
    epsilon: f32,
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new(epsilon: f32) -> Self {
        Self {
            regions: Vec::new(),
            epsilon,
            active: None,
        }
    }

    /// Replaces the captured region extents
    pub fn set_regions(&mut self, regions: Vec<Region>) {
        self.regions = regions;
    }

    /// Updates the active region for `offset`.
    ///
    /// A region matches when `offset` lies in `(top - epsilon, top - epsilon
    /// + height]`. Regions are checked in order and the last match wins.
    /// Without a match the previous active region is kept.
    pub fn on_scroll(&mut self, offset: f32) -> Option<&str> {
        for region in &self.regions {
            let top = region.top - self.epsilon;
            if offset > top && offset <= top + region.height {
                self.active = Some(region.id.clone());
            }
        }
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }
}

/// Icon shown on the mobile menu button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Menu,
    Close,
}

/// Visibility of the collapsible navigation on narrow viewports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Close
        } else {
            MenuIcon::Menu
        }
    }
}

/// Ease-out animation between two scroll offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started_at: f64,
    duration: f64,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, started_at: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at time `now` (seconds) and whether the animation is done
    pub fn sample(&self, now: f64) -> (f32, bool) {
        if self.duration <= 0.0 {
            return (self.to, true);
        }
        let t = ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32;
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, t >= 1.0)
    }
}

/// Scroll spy, anchors, smooth scrolling and the mobile menu.
#[derive(Debug, Clone)]
pub struct NavigationController {
    config: NavConfig,
    spy: ScrollSpy,
    anchors: HashMap<String, f32>,
    menu: MobileMenu,
    animation: Option<SmoothScroll>,
}

impl NavigationController {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            spy: ScrollSpy::new(config.spy_epsilon),
            anchors: HashMap::new(),
            menu: MobileMenu::default(),
            animation: None,
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Captures the layout: spy regions plus the top of every element with
    /// an id (the navigable anchors).
    pub fn set_layout(&mut self, regions: Vec<Region>, anchors: impl IntoIterator<Item = (String, f32)>) {
        self.spy.set_regions(regions);
        self.anchors = anchors.into_iter().collect();
    }

    pub fn on_scroll(&mut self, offset: f32) -> Option<&str> {
        self.spy.on_scroll(offset)
    }

    pub fn active_section(&self) -> Option<&str> {
        self.spy.active()
    }

    /// Starts a smooth scroll to the element with `id`.
    ///
    /// Unknown ids are ignored. Returns true if navigation started, in
    /// which case the mobile menu is closed.
    pub fn scroll_to_section(&mut self, id: &str, current_offset: f32, viewport_width: f32, now: f64) -> bool {
        let Some(&top) = self.anchors.get(id) else {
            tracing::debug!("No element with id '{}', ignoring navigation", id);
            return false;
        };

        let target = (top - self.config.nav_offset(viewport_width)).max(0.0);
        let from = self.animation.map(|a| a.sample(now).0).unwrap_or(current_offset);
        self.animation = Some(SmoothScroll::new(from, target, now, SMOOTH_SCROLL_SECONDS));
        self.menu.close();
        true
    }

    /// Offset the host should scroll to this frame, if animating
    pub fn animate(&mut self, now: f64) -> Option<f32> {
        let animation = self.animation?;
        let (offset, done) = animation.sample(now);
        if done {
            self.animation = None;
        }
        Some(offset)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        let mut spy = ScrollSpy::new(100.0);
        spy.set_regions(vec![
            Region::new("hero", 0.0, 600.0),
            Region::new("about", 600.0, 400.0),
            Region::new("schedule", 1000.0, 800.0),
        ]);
        spy
    }

    #[test]
    fn test_spy_activates_before_region_arrives() {
        let mut spy = spy();
        // about's window is (500, 900]
        assert_eq!(spy.on_scroll(500.5), Some("about"));
        assert_eq!(spy.on_scroll(900.0), Some("about"));
        assert_eq!(spy.on_scroll(901.0), Some("schedule"));
    }

    #[test]
    fn test_spy_adjacent_windows_do_not_share_boundary() {
        let mut spy = spy();
        // hero's window is (-100, 500], about's (500, 900]; 500 only in hero
        assert_eq!(spy.on_scroll(500.0), Some("hero"));
    }

    #[test]
    fn test_spy_nested_regions_last_match_wins() {
        let mut spy = ScrollSpy::new(100.0);
        // outer's window is (-100, 1900], inner's (400, 700]
        spy.set_regions(vec![
            Region::new("outer", 0.0, 2000.0),
            Region::new("inner", 500.0, 300.0),
        ]);

        assert_eq!(spy.on_scroll(600.0), Some("inner"));
        assert_eq!(spy.on_scroll(700.0), Some("inner"));
        assert_eq!(spy.on_scroll(1500.0), Some("outer"));
        assert_eq!(spy.on_scroll(300.0), Some("outer"));
        assert!(!spy.is_active("inner"));
    }

    #[test]
    fn test_spy_order_decides_overlap() {
        let mut spy = ScrollSpy::new(100.0);
        // Same extents, reversed order: the outer region now comes last
        spy.set_regions(vec![
            Region::new("inner", 500.0, 300.0),
            Region::new("outer", 0.0, 2000.0),
        ]);

        assert_eq!(spy.on_scroll(600.0), Some("outer"));
    }

    #[test]
    fn test_spy_is_sticky_without_match() {
        let mut spy = spy();
        assert_eq!(spy.on_scroll(1200.0), Some("schedule"));
        assert_eq!(spy.on_scroll(5000.0), Some("schedule"));
        assert!(spy.is_active("schedule"));
    }

    #[test]
    fn test_spy_starts_with_nothing_active() {
        let mut spy = spy();
        assert_eq!(spy.active(), None);
        // Offset must be strictly greater than the window start
        assert_eq!(spy.on_scroll(-100.0), None);
        assert_eq!(spy.on_scroll(-99.0), Some("hero"));
    }

    #[test]
    fn test_nav_offset_by_width() {
        let config = NavConfig::default();
        assert_eq!(config.nav_offset(767.9), 80.0);
        assert_eq!(config.nav_offset(768.0), 100.0);
        assert_eq!(config.nav_offset(1440.0), 100.0);
    }

    #[test]
    fn test_scroll_to_unknown_section_is_noop() {
        let mut nav = NavigationController::new(NavConfig::default());
        nav.toggle_menu();
        assert!(!nav.scroll_to_section("missing", 0.0, 1024.0, 0.0));
        assert!(nav.menu().is_open());
        assert!(!nav.is_animating());
    }

    #[test]
    fn test_scroll_to_section_animates_to_offset_target() {
        let mut nav = NavigationController::new(NavConfig::default());
        nav.set_layout(vec![Region::new("faq", 2000.0, 500.0)], [("faq".to_string(), 2000.0)]);
        nav.toggle_menu();

        assert!(nav.scroll_to_section("faq", 0.0, 500.0, 10.0));
        assert!(!nav.menu().is_open());

        assert_eq!(nav.animate(10.0), Some(0.0));
        let mid = nav.animate(10.0 + SMOOTH_SCROLL_SECONDS / 2.0).unwrap();
        assert!(mid > 0.0 && mid < 1920.0);
        assert_eq!(nav.animate(10.0 + SMOOTH_SCROLL_SECONDS), Some(1920.0));
        assert!(!nav.is_animating());
        assert_eq!(nav.animate(20.0), None);
    }

    #[test]
    fn test_scroll_target_clamped_at_top() {
        let mut nav = NavigationController::new(NavConfig::default());
        nav.set_layout(Vec::new(), [("hero".to_string(), 40.0)]);
        assert!(nav.scroll_to_section("hero", 300.0, 1200.0, 0.0));
        assert_eq!(nav.animate(100.0), Some(0.0));
    }

    #[test]
    fn test_mobile_menu_icons() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.icon(), MenuIcon::Menu);
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Close);
        menu.close();
        menu.close();
        assert_eq!(menu.icon(), MenuIcon::Menu);
    }
}
