//! Command-line overrides applied on top of a page's own configuration.

use eduhack::{SiteConfig, ThemeMode, ThemePolicy};

/// Settings given on the command line; they win over the page file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteOverrides {
    /// Force this theme and ignore user toggles
    pub theme: Option<ThemeMode>,
    /// Countdown target date-time
    pub countdown: Option<String>,
    /// Seed for particle placement
    pub seed: Option<u64>,
}

impl SiteOverrides {
    pub fn apply(&self, config: &mut SiteConfig) {
        if let Some(mode) = self.theme {
            config.theme_policy = ThemePolicy::Forced(mode);
        }
        if let Some(target) = &self.countdown {
            config.countdown_target = target.clone();
        }
        if let Some(seed) = self.seed {
            config.particle_seed = Some(seed);
        }
    }

    /// `config` with the overrides applied
    pub fn applied(&self, mut config: SiteConfig) -> SiteConfig {
        self.apply(&mut config);
        config
    }
}
