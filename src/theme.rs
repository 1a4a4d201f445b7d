//! Color palettes for the landing page
//!
//! Each [`ThemeMode`] has a fixed palette. [`apply_palette`] pushes a palette
//! into egui visuals; the particle gradients are shared by both modes.
//!
//! # Examples
//!
//! ```
//! use eduhack::preferences::ThemeMode;
//! use eduhack::theme::palette;
//!
//! let dark = palette(ThemeMode::Dark);
//! println!("Dark background: {:?}", dark.background);
//! ```

use egui::Color32;

use crate::particles::ParticleGradient;
use crate::preferences::ThemeMode;

/// Color palette covering the page elements
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub card_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_muted: Color32,
    pub heading: Color32,

    // Interactive colors
    pub accent: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub nav_active: Color32,

    pub error: Color32,
    pub warning: Color32,
}

const PURPLE_400: &str = "#c084fc";
const BLUE_400: &str = "#60a5fa";
const CYAN_400: &str = "#22d3ee";

/// Opacity of the particle dots (0.6)
pub const PARTICLE_ALPHA: u8 = 153;

/// Palette for a theme mode
pub fn palette(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Light => light_palette(),
        ThemeMode::Dark => dark_palette(),
    }
}

fn light_palette() -> ThemeColors {
    ThemeColors {
        background: hex_to_color32("#f9fafb"),
        panel_background: hex_to_color32("#ffffff"),
        card_background: hex_to_color32("#f3f4f6"),

        text: hex_to_color32("#1f2937"),
        text_muted: hex_to_color32("#6b7280"),
        heading: hex_to_color32("#111827"),

        accent: hex_to_color32("#7c3aed"),
        selection: hex_to_color32("#ede9fe"),
        hover: hex_to_color32("#f3e8ff"),
        border: hex_to_color32("#e5e7eb"),
        nav_active: hex_to_color32("#9333ea"),

        error: hex_to_color32("#dc2626"),
        warning: hex_to_color32("#d97706"),
    }
}

fn dark_palette() -> ThemeColors {
    ThemeColors {
        background: hex_to_color32("#030712"),
        panel_background: hex_to_color32("#111827"),
        card_background: hex_to_color32("#1f2937"),

        text: hex_to_color32("#e5e7eb"),
        text_muted: hex_to_color32("#9ca3af"),
        heading: hex_to_color32("#f9fafb"),

        accent: hex_to_color32("#a78bfa"),
        selection: hex_to_color32("#4c1d95"),
        hover: hex_to_color32("#2e1065"),
        border: hex_to_color32("#374151"),
        nav_active: hex_to_color32(PURPLE_400),

        error: hex_to_color32("#f87171"),
        warning: hex_to_color32("#fbbf24"),
    }
}

/// Start and end colors of a particle gradient
pub fn gradient_colors(gradient: ParticleGradient) -> (Color32, Color32) {
    let (from, to) = match gradient {
        ParticleGradient::PurpleToBlue => (PURPLE_400, BLUE_400),
        ParticleGradient::BlueToCyan => (BLUE_400, CYAN_400),
        ParticleGradient::CyanToPurple => (CYAN_400, PURPLE_400),
    };
    (hex_to_color32(from), hex_to_color32(to))
}

/// Applies a palette to egui visuals
pub fn apply_palette(colors: &ThemeColors, visuals: &mut egui::Visuals) {
    visuals.panel_fill = colors.panel_background;
    visuals.window_fill = colors.panel_background;
    visuals.extreme_bg_color = colors.background;
    visuals.faint_bg_color = colors.card_background;

    visuals.override_text_color = Some(colors.text);

    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke.color = colors.accent;

    visuals.widgets.noninteractive.bg_fill = colors.panel_background;
    visuals.widgets.noninteractive.bg_stroke.color = colors.border;
    visuals.widgets.inactive.bg_fill = colors.card_background;
    visuals.widgets.hovered.bg_fill = colors.hover;
    visuals.widgets.active.bg_fill = colors.selection;

    visuals.hyperlink_color = colors.accent;

    visuals.error_fg_color = colors.error;
    visuals.warn_fg_color = colors.warning;
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Linear blend between two colors, `t` in [0, 1]
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
