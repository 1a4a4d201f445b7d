//! Settings persistence through eframe storage.
//!
//! Any serde type can be stored; values are kept as JSON strings under a
//! caller-chosen key.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, returning None if it is missing or unreadable.
    ///
    /// An unreadable value is logged and treated as missing.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring unreadable setting '{}': {}", key, e);
                None
            }
        }
    }

    /// Loads a setting with a custom default.
    ///
    /// # Returns
    /// The stored value if present and valid, otherwise `default`
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Loads a setting, falling back to `T::default()`.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::load_setting_or(storage, key, T::default())
    }

    /// Serializes `value` and stores it under `key`.
    ///
    /// # Examples
    /// ```ignore
    /// SettingsCoordinator::save_setting(storage, "show_particles", &true);
    /// ```
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => tracing::warn!("Failed to serialize setting '{}': {}", key, e),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    /// Simple mock storage for testing
    #[derive(Default)]
    pub(crate) struct MockStorage {
        pub(crate) data: HashMap<String, String>,
        pub(crate) flushes: usize,
    }

    impl eframe::Storage for MockStorage {
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

    #[test]
    fn test_save_and_load_flag() {
        let mut storage = MockStorage::default();

        SettingsCoordinator::save_setting(&mut storage, "show_particles", &false);
        assert_eq!(storage.flushes, 1);

        let loaded: bool = SettingsCoordinator::load_setting_or(Some(&storage), "show_particles", true);
        assert!(!loaded);
    }

    #[test]
    fn test_missing_and_absent_storage_use_default() {
        let storage = MockStorage::default();

        let loaded: bool = SettingsCoordinator::load_setting_or(Some(&storage), "show_particles", true);
        assert!(loaded);

        let loaded: u32 = SettingsCoordinator::load_setting(None, "anything");
        assert_eq!(loaded, 0);
    }

    #[test]
    fn test_save_and_load_map() {
        let mut storage = MockStorage::default();
        let mut prefs = BTreeMap::new();
        prefs.insert("theme".to_string(), "dark".to_string());

        SettingsCoordinator::save_setting(&mut storage, "site_preferences", &prefs);
        let loaded: BTreeMap<String, String> = SettingsCoordinator::load_setting(Some(&storage), "site_preferences");
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_unreadable_value_is_ignored() {
        let mut storage = MockStorage::default();
        eframe::Storage::set_string(&mut storage, "show_particles", "not json".to_string());

        let result: Option<bool> = SettingsCoordinator::try_load_setting(Some(&storage), "show_particles");
        assert_eq!(result, None);
    }
}
