// --- GUI UTILITIES ---
// Theme detection and application.

use eframe::egui;

use crate::config::ThemeMode;

/// Ask the OS whether it prefers a dark theme. Detection failures and
/// "no preference" both fall back to dark.
pub fn is_system_in_dark_mode() -> bool {
    !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
}

/// Resolve a configured theme mode to a concrete dark/light choice.
pub fn effective_dark(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Dark => true,
        ThemeMode::Light => false,
        ThemeMode::System => is_system_in_dark_mode(),
    }
}

pub fn apply_theme(ctx: &egui::Context, mode: ThemeMode) {
    if effective_dark(mode) {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}
