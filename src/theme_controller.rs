//! Theme state machine.
//!
//! The controller owns the preference store and the host surface. It never
//! caches the active mode; [`ThemeController::current`] always reads the
//! surface flag.

use serde::{Deserialize, Serialize};

use crate::events::{Subscribers, SubscriptionId, ThemeChanged};
use crate::preferences::{StoredTheme, ThemeMode};
use crate::traits::{PreferenceStore, ThemeSurface};

/// Whether the user may change the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePolicy {
    #[default]
    UserToggleable,
    /// Every request resolves to this mode
    Forced(ThemeMode),
}

impl ThemePolicy {
    fn resolve(&self, requested: ThemeMode) -> ThemeMode {
        match self {
            ThemePolicy::UserToggleable => requested,
            ThemePolicy::Forced(mode) => *mode,
        }
    }
}

pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    surface: Box<dyn ThemeSurface>,
    key: String,
    policy: ThemePolicy,
    stored: StoredTheme,
    subscribers: Subscribers<ThemeChanged>,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("key", &self.key)
            .field("policy", &self.policy)
            .field("stored", &self.stored)
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Creates a controller. Nothing is applied until [`Self::initialize`].
    pub fn new(
        store: Box<dyn PreferenceStore>,
        surface: Box<dyn ThemeSurface>,
        key: impl Into<String>,
        policy: ThemePolicy,
    ) -> Self {
        let key = key.into();
        let stored = StoredTheme::load(store.as_ref(), &key);
        Self {
            store,
            surface,
            key,
            policy,
            stored,
            subscribers: Subscribers::new(),
        }
    }

    /// Applies the stored preference, or the ambient one when nothing was
    /// ever stored. Without an ambient signal the page starts light.
    pub fn initialize(&mut self, ambient: Option<ThemeMode>) {
        if let ThemePolicy::Forced(mode) = self.policy {
            self.apply(mode);
            return;
        }

        match self.stored {
            StoredTheme::Explicit(mode) => self.apply(mode),
            StoredTheme::Unset => {
                let mode = ambient.unwrap_or(ThemeMode::Light);
                tracing::debug!("No stored theme, following ambient preference: {}", mode);
                self.show(mode);
            }
        }
    }

    /// Sets the visual mode, persists it and notifies subscribers.
    pub fn apply(&mut self, theme: ThemeMode) {
        let theme = self.policy.resolve(theme);
        self.store.set_string(&self.key, theme.as_str().to_string());
        self.store.flush();
        self.stored = StoredTheme::Explicit(theme);
        self.show(theme);
    }

    /// Applies the opposite of the displayed mode.
    pub fn toggle(&mut self) {
        let next = self.current().opposite();
        self.apply(next);
    }

    /// Host callback for OS-level preference changes.
    ///
    /// Returns true if the change was followed. Ignored once the user has
    /// made an explicit choice, and under a forced policy.
    pub fn on_ambient_change(&mut self, ambient: ThemeMode) -> bool {
        if matches!(self.policy, ThemePolicy::Forced(_)) || self.stored.is_set() {
            return false;
        }
        if ambient != self.current() {
            self.show(ambient);
        }
        true
    }

    /// The mode the surface is displaying right now.
    pub fn current(&self) -> ThemeMode {
        ThemeMode::from_dark_flag(self.surface.is_dark())
    }

    pub fn stored(&self) -> StoredTheme {
        self.stored
    }

    pub fn policy(&self) -> ThemePolicy {
        self.policy
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&ThemeChanged) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn show(&mut self, theme: ThemeMode) {
        self.surface.set_dark(theme.is_dark());
        self.surface.set_indicator(theme);
        tracing::info!("Theme applied: {}", theme);
        self.subscribers.emit(&ThemeChanged { theme });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryPreferenceStore;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Surface whose flag can also be flipped from outside the controller
    #[derive(Clone, Default)]
    struct SharedSurface {
        dark: Rc<Cell<bool>>,
        indicator: Rc<Cell<Option<ThemeMode>>>,
    }

    impl ThemeSurface for SharedSurface {
        fn is_dark(&self) -> bool {
            self.dark.get()
        }

        fn set_dark(&mut self, dark: bool) {
            self.dark.set(dark);
        }

        fn set_indicator(&mut self, mode: ThemeMode) {
            self.indicator.set(Some(mode));
        }
    }

    fn controller(store: MemoryPreferenceStore, policy: ThemePolicy) -> (ThemeController, SharedSurface) {
        let surface = SharedSurface::default();
        let ctrl = ThemeController::new(Box::new(store), Box::new(surface.clone()), "theme", policy);
        (ctrl, surface)
    }

    #[test]
    fn test_initialize_uses_stored_preference() {
        let (mut ctrl, surface) = controller(
            MemoryPreferenceStore::with_entry("theme", "dark"),
            ThemePolicy::UserToggleable,
        );
        ctrl.initialize(Some(ThemeMode::Light));

        assert_eq!(ctrl.current(), ThemeMode::Dark);
        assert!(surface.dark.get());
        assert_eq!(surface.indicator.get(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_initialize_falls_back_to_ambient() {
        let (mut ctrl, _surface) = controller(MemoryPreferenceStore::new(), ThemePolicy::UserToggleable);
        ctrl.initialize(Some(ThemeMode::Dark));

        assert_eq!(ctrl.current(), ThemeMode::Dark);
        // Following the ambient preference is not an explicit choice
        assert_eq!(ctrl.stored(), StoredTheme::Unset);
        assert_eq!(ctrl.store().get_string("theme"), None);
    }

    #[test]
    fn test_initialize_without_any_signal_is_light() {
        let (mut ctrl, _surface) = controller(MemoryPreferenceStore::new(), ThemePolicy::UserToggleable);
        ctrl.initialize(None);
        assert_eq!(ctrl.current(), ThemeMode::Light);
    }

    #[test]
    fn test_apply_persists_and_notifies() {
        let (mut ctrl, _surface) = controller(MemoryPreferenceStore::new(), ThemePolicy::UserToggleable);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        ctrl.subscribe(move |e| sink.borrow_mut().push(e.theme));

        ctrl.apply(ThemeMode::Dark);

        assert_eq!(ctrl.store().get_string("theme").as_deref(), Some("dark"));
        assert_eq!(ctrl.stored(), StoredTheme::Explicit(ThemeMode::Dark));
        assert_eq!(*events.borrow(), vec![ThemeMode::Dark]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let (mut ctrl, surface) = controller(MemoryPreferenceStore::new(), ThemePolicy::UserToggleable);
        ctrl.apply(ThemeMode::Dark);
        let once = (ctrl.current(), ctrl.stored(), ctrl.store().get_string("theme"), surface.dark.get());
        ctrl.apply(ThemeMode::Dark);
        let twice = (ctrl.current(), ctrl.stored(), ctrl.store().get_string("theme"), surface.dark.get());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_double_toggle_returns_to_original() {
        let (mut ctrl, _surface) = controller(
            MemoryPreferenceStore::with_entry("theme", "light"),
            ThemePolicy::UserToggleable,
        );
        ctrl.initialize(None);
        ctrl.toggle();
        assert_eq!(ctrl.current(), ThemeMode::Dark);
        ctrl.toggle();
        assert_eq!(ctrl.current(), ThemeMode::Light);
        assert_eq!(ctrl.store().get_string("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_current_reflects_external_mutation() {
        let (mut ctrl, surface) = controller(MemoryPreferenceStore::new(), ThemePolicy::UserToggleable);
        ctrl.apply(ThemeMode::Light);
        surface.dark.set(true);
        assert_eq!(ctrl.current(), ThemeMode::Dark);

        // Toggle works off the displayed mode, not the last applied one
        ctrl.toggle();
        assert_eq!(ctrl.current(), ThemeMode::Light);
    }

    #[test]
    fn test_ambient_change_followed_until_explicit_choice() {
        let (mut ctrl, _surface) = controller(MemoryPreferenceStore::new(), ThemePolicy::UserToggleable);
        ctrl.initialize(Some(ThemeMode::Light));

        assert!(ctrl.on_ambient_change(ThemeMode::Dark));
        assert_eq!(ctrl.current(), ThemeMode::Dark);

        ctrl.toggle();
        assert_eq!(ctrl.current(), ThemeMode::Light);
        assert!(!ctrl.on_ambient_change(ThemeMode::Dark));
        assert_eq!(ctrl.current(), ThemeMode::Light);
    }

    #[test]
    fn test_ambient_change_ignored_when_stored_at_startup() {
        let (mut ctrl, _surface) = controller(
            MemoryPreferenceStore::with_entry("theme", "light"),
            ThemePolicy::UserToggleable,
        );
        ctrl.initialize(Some(ThemeMode::Dark));
        assert!(!ctrl.on_ambient_change(ThemeMode::Dark));
        assert_eq!(ctrl.current(), ThemeMode::Light);
    }

    #[test]
    fn test_forced_policy_ignores_requests() {
        let (mut ctrl, _surface) = controller(
            MemoryPreferenceStore::with_entry("theme", "light"),
            ThemePolicy::Forced(ThemeMode::Dark),
        );
        ctrl.initialize(Some(ThemeMode::Light));
        assert_eq!(ctrl.current(), ThemeMode::Dark);

        ctrl.toggle();
        assert_eq!(ctrl.current(), ThemeMode::Dark);
        ctrl.apply(ThemeMode::Light);
        assert_eq!(ctrl.current(), ThemeMode::Dark);
        assert!(!ctrl.on_ambient_change(ThemeMode::Light));
        assert_eq!(ctrl.store().get_string("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let (mut ctrl, _surface) = controller(MemoryPreferenceStore::new(), ThemePolicy::UserToggleable);
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let id = ctrl.subscribe(move |_| c.set(c.get() + 1));

        ctrl.toggle();
        assert!(ctrl.unsubscribe(id));
        ctrl.toggle();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_policy_serde() {
        let policy: ThemePolicy = serde_json::from_str("\"user_toggleable\"").unwrap();
        assert_eq!(policy, ThemePolicy::UserToggleable);
        let policy: ThemePolicy = serde_json::from_str(r#"{"forced":"dark"}"#).unwrap();
        assert_eq!(policy, ThemePolicy::Forced(ThemeMode::Dark));
    }
}
