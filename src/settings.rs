//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web; read from a JSON file named by
//! `VECTOROIDS_SETTINGS` on native.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed asteroid placement seed (None = time-based)
    pub seed: Option<u64>,
    /// Asteroids kept alive at once
    pub asteroid_population: usize,
    /// Frame rate cap requested from the platform (0 = uncapped)
    pub frame_rate_cap: u32,

    // === Visuals ===
    /// Line thickness in pixels
    pub line_thickness: f32,
    /// Ship/asteroid outline scale
    pub render_scale: f32,
    /// White-on-black palette
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            asteroid_population: ASTEROID_TARGET_POPULATION,
            frame_rate_cap: TARGET_FPS,
            line_thickness: LINE_THICKNESS,
            render_scale: RENDER_SCALE,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// Largest population the spawner will maintain
    pub const MAX_ASTEROIDS: usize = 64;

    /// Environment variable naming a native settings file
    pub const ENV_PATH: &'static str = "VECTOROIDS_SETTINGS";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "vectoroids_settings";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp values that would break rendering or pacing
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.asteroid_population = self.asteroid_population.min(Self::MAX_ASTEROIDS);
        if !(self.line_thickness.is_finite() && self.line_thickness > 0.0) {
            self.line_thickness = defaults.line_thickness;
        }
        if !(self.render_scale.is_finite() && self.render_scale > 0.0) {
            self.render_scale = defaults.render_scale;
        }
        self
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from the file named by `VECTOROIDS_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_PATH) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.to_string_lossy());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.to_string_lossy(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.to_string_lossy(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(77),
            asteroid_population: 3,
            high_contrast: true,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{ "asteroid_population": 2 }"#).unwrap();
        assert_eq!(settings.asteroid_population, 2);
        assert_eq!(settings.frame_rate_cap, TARGET_FPS);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_sanitize_clamps_bad_values() {
        let settings = Settings::from_json(
            r#"{ "asteroid_population": 100000, "line_thickness": -3.0, "render_scale": 0.0 }"#,
        )
        .unwrap();
        assert_eq!(settings.asteroid_population, Settings::MAX_ASTEROIDS);
        assert_eq!(settings.line_thickness, LINE_THICKNESS);
        assert_eq!(settings.render_scale, RENDER_SCALE);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }
}
