//! Config struct definition.

use serde::{Deserialize, Serialize};

use super::types::ThemeMode;
use crate::spy::{BAND_LOWER_PX, BAND_UPPER_PX};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme_mode: ThemeMode,

    /// Lower edge of the activation band, pixels from the viewport top
    /// (inclusive, usually negative).
    pub band_lower_px: i32,
    /// Upper edge of the activation band (exclusive).
    pub band_upper_px: i32,

    /// Animate scrolling when a nav entry is clicked. When false the
    /// viewport jumps to the target in a single step.
    pub smooth_scroll: bool,
    /// Duration of the smooth-scroll animation in seconds.
    pub scroll_duration_s: f32,

    /// Show the navigation side panel.
    pub show_nav: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            band_lower_px: BAND_LOWER_PX,
            band_upper_px: BAND_UPPER_PX,
            smooth_scroll: true,
            scroll_duration_s: 0.45,
            show_nav: true,
        }
    }
}
