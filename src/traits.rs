use crate::page::PageDocument;
use crate::preferences::ThemeMode;

/// Trait for reading page documents
pub trait PageReader {
    /// Opens and parses a page source, returning the document tree
    fn read(&self, path: &str) -> anyhow::Result<PageDocument>;
}

/// Key-value storage for user preferences.
///
/// Mirrors the shape of `eframe::Storage` so the GUI can bridge the two,
/// while tests and headless callers can use [`crate::MemoryPreferenceStore`].
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    fn set_string(&mut self, key: &str, value: String);

    /// Writes pending values to the backing medium
    fn flush(&mut self) {}
}

/// The host's live visual-mode flag.
///
/// The theme controller never caches the active mode: it always asks the
/// surface, so external changes to the displayed mode are observed.
pub trait ThemeSurface {
    /// Returns true if the surface currently displays dark mode
    fn is_dark(&self) -> bool;

    /// Switches the displayed mode
    fn set_dark(&mut self, dark: bool);

    /// Updates the theme indicator attribute (toggle icon, color scheme hint)
    fn set_indicator(&mut self, _mode: ThemeMode) {}
}
