//! Config I/O operations: load, save, and post-load repair.

use std::path::PathBuf;

use super::config_struct::Config;
use crate::spy::{BAND_LOWER_PX, BAND_UPPER_PX};

pub fn get_config_path() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_default().join("scrollspy");
    let _ = std::fs::create_dir_all(&config_dir);
    config_dir.join("config_v1.json")
}

pub fn load_config() -> Config {
    let path = get_config_path();
    let mut config = if path.exists() {
        let data = std::fs::read_to_string(path).unwrap_or_default();
        serde_json::from_str(&data).unwrap_or_default()
    } else {
        Config::default()
    };
    repair_config(&mut config);
    config
}

/// Bring hand-edited or stale config values back into a usable range.
/// The band must be a non-empty half-open interval and the animation
/// duration a finite non-negative number; anything else falls back to
/// the defaults so a broken file can never wedge the viewer.
fn repair_config(config: &mut Config) {
    if config.band_lower_px >= config.band_upper_px {
        crate::log_warn!(
            "config: activation band {}..{} is empty, restoring defaults",
            config.band_lower_px,
            config.band_upper_px
        );
        config.band_lower_px = BAND_LOWER_PX;
        config.band_upper_px = BAND_UPPER_PX;
    }
    if !config.scroll_duration_s.is_finite() || config.scroll_duration_s < 0.0 {
        crate::log_warn!(
            "config: scroll duration {} is invalid, restoring default",
            config.scroll_duration_s
        );
        config.scroll_duration_s = Config::default().scroll_duration_s;
    }
}

pub fn save_config(config: &Config) {
    let path = get_config_path();
    let data = serde_json::to_string_pretty(config).unwrap();
    let _ = std::fs::write(path, data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;

    #[test]
    fn default_band_matches_constants() {
        let config = Config::default();
        assert_eq!(config.band_lower_px, -150);
        assert_eq!(config.band_upper_px, 150);
        assert!(config.smooth_scroll);
        assert!(config.show_nav);
    }

    #[test]
    fn corrupt_json_falls_back_to_defaults() {
        let config: Config = serde_json::from_str("{\"theme_mode\": 42}").unwrap_or_default();
        assert_eq!(config.theme_mode, ThemeMode::System);
    }

    #[test]
    fn missing_fields_are_defaulted() {
        let config: Config = serde_json::from_str("{\"show_nav\": false}").unwrap();
        assert!(!config.show_nav);
        assert_eq!(config.band_lower_px, -150);
        assert_eq!(config.band_upper_px, 150);
    }

    #[test]
    fn inverted_band_is_repaired() {
        let mut config = Config {
            band_lower_px: 200,
            band_upper_px: -200,
            ..Config::default()
        };
        repair_config(&mut config);
        assert_eq!(config.band_lower_px, -150);
        assert_eq!(config.band_upper_px, 150);
    }

    #[test]
    fn bad_duration_is_repaired() {
        let mut config = Config {
            scroll_duration_s: f32::NAN,
            ..Config::default()
        };
        repair_config(&mut config);
        assert_eq!(config.scroll_duration_s, Config::default().scroll_duration_s);
    }

    #[test]
    fn config_roundtrips_through_json() {
        let mut config = Config::default();
        config.theme_mode = ThemeMode::Dark;
        config.band_lower_px = -80;
        config.band_upper_px = 80;
        let data = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&data).unwrap();
        assert_eq!(back.theme_mode, ThemeMode::Dark);
        assert_eq!(back.band_lower_px, -80);
        assert_eq!(back.band_upper_px, 80);
    }
}
