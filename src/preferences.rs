//! Persisted theme preference.
//!
//! A single string entry under a fixed key holds `"light"` or `"dark"`.
//! [`StoredTheme`] makes the "never chosen" case explicit instead of relying
//! on the absence of a string.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::traits::PreferenceStore;

/// Default storage key for the theme preference
pub const DEFAULT_PREFERENCE_KEY: &str = "theme";

/// Visual mode of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the other mode
    pub fn opposite(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("Unknown theme '{}'", other)),
        }
    }
}

/// What the user has explicitly chosen, if anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoredTheme {
    /// No explicit choice was ever stored
    #[default]
    Unset,
    Explicit(ThemeMode),
}

impl StoredTheme {
    /// Reads the preference under `key`.
    ///
    /// Values other than `"light"` / `"dark"` are treated as unset.
    pub fn load(store: &dyn PreferenceStore, key: &str) -> Self {
        match store.get_string(key).map(|s| s.parse::<ThemeMode>()) {
            Some(Ok(mode)) => StoredTheme::Explicit(mode),
            Some(Err(err)) => {
                tracing::warn!("Ignoring stored theme preference: {}", err);
                StoredTheme::Unset
            }
            None => StoredTheme::Unset,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, StoredTheme::Explicit(_))
    }
}

/// In-memory preference store for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    data: HashMap<String, String>,
    flushes: usize,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.data.insert(key.to_string(), value.to_string());
        store
    }

    /// Returns how many times the store was flushed
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
