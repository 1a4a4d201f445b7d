pub mod traits;
pub mod config;
pub mod page;
pub mod demo_page;
pub mod preferences;
pub mod events;
pub mod theme_controller;
pub mod search;
pub mod countdown;
pub mod navigation;
pub mod particles;
pub mod theme;

// Export host traits
pub use traits::{PageReader, PreferenceStore, ThemeSurface};

// Export page model
pub use config::SiteConfig;
pub use page::{parse_page, ContentNode, JsonPageReader, NavLink, NodeKind, NodeRef, PageDocument};
pub use demo_page::{demo_page, DemoPageReader};

// Export theme preference handling
pub use preferences::{MemoryPreferenceStore, StoredTheme, ThemeMode, DEFAULT_PREFERENCE_KEY};
pub use events::{Subscribers, SubscriptionId, ThemeChanged};
pub use theme_controller::{ThemeController, ThemePolicy};

// Export page behavior
pub use search::{ContentIndex, IndexedFragment, SearchOutcome, SearchResult};
pub use countdown::{Countdown, CountdownReading, TimeLeft};
pub use navigation::{MenuIcon, MobileMenu, NavConfig, NavigationController, Region, ScrollSpy};
pub use particles::{Particle, ParticleField, ParticleGradient};

// Export palettes
pub use theme::{apply_palette, hex_to_color32, palette, with_alpha, ThemeColors};
