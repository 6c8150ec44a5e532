// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Persisted overlay preferences with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

/// Global configuration for the application.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Outline width of committed and in-progress regions, in screen pixels.
    pub region_stroke: f32,
    /// Width of the pointer guide lines, in screen pixels.
    pub crosshair_stroke: f32,
    /// Whether the pointer guide lines are drawn.
    pub show_crosshair: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            region_stroke: 3.0,
            crosshair_stroke: 1.0,
            show_crosshair: true,
        }
    }
}

impl AppConfig {
    /// Load the stored config for `app_id`, falling back to defaults.
    pub fn load(app_id: &str) -> Self {
        match cosmic_config::Config::new(app_id, Self::VERSION) {
            Ok(handler) => Self::get_entry(&handler).unwrap_or_else(|(errors, config)| {
                for err in errors {
                    log::warn!("Ignoring invalid config entry: {err}");
                }
                config
            }),
            Err(err) => {
                log::warn!("Config store unavailable, using defaults: {err}");
                Self::default()
            }
        }
    }
}
