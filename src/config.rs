//! Site configuration carried inside the page document.
//!
//! Every field has a default so a page file may omit the `config` object
//! entirely or only override a few entries.

use serde::{Deserialize, Serialize};

use crate::preferences::DEFAULT_PREFERENCE_KEY;
use crate::theme_controller::ThemePolicy;

/// Tunables for the interactive page behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Storage key of the theme preference
    pub preference_key: String,
    pub theme_policy: ThemePolicy,
    /// Local date-time, `YYYY-MM-DDTHH:MM:SS`
    pub countdown_target: String,
    /// Labels for days, hours, minutes, seconds
    pub countdown_labels: [String; 4],
    /// Region label used when a fragment has no enclosing region
    pub default_region_label: String,
    pub particle_count: usize,
    /// Fixed seed for reproducible particle placement
    pub particle_seed: Option<u64>,
    /// Viewports narrower than this use the narrow navigation offset
    pub narrow_breakpoint: f32,
    pub narrow_nav_offset: f32,
    pub wide_nav_offset: f32,
    /// Regions activate this far before their top reaches the viewport top
    pub scroll_spy_epsilon: f32,
    /// Characters of fragment text shown per search result
    pub excerpt_chars: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            preference_key: DEFAULT_PREFERENCE_KEY.to_string(),
            theme_policy: ThemePolicy::UserToggleable,
            countdown_target: "2025-11-01T09:00:00".to_string(),
            countdown_labels: [
                "Days".to_string(),
                "Hours".to_string(),
                "Min".to_string(),
                "Sec".to_string(),
            ],
            default_region_label: "General content".to_string(),
            particle_count: 20,
            particle_seed: None,
            narrow_breakpoint: 768.0,
            narrow_nav_offset: 80.0,
            wide_nav_offset: 100.0,
            scroll_spy_epsilon: 100.0,
            excerpt_chars: 100,
        }
    }
}
