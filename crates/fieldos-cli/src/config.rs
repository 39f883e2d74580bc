//! Robot configuration – reads `fieldos.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use fieldos_types::{Alliance, FieldGeometry};
use serde::{Deserialize, Serialize};
use tracing::warn;

fn default_field_width_m() -> f64 {
    FieldGeometry::default().width_m
}

fn default_field_length_m() -> f64 {
    FieldGeometry::default().length_m
}

fn default_loop_period_ms() -> u64 {
    20
}

/// Persisted robot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Distance between the alliance walls, in meters.
    #[serde(default = "default_field_width_m")]
    pub field_width_m: f64,

    /// Field length, in meters.
    #[serde(default = "default_field_length_m")]
    pub field_length_m: f64,

    /// Fixed alliance override for sim runs. Leave unset to exercise the
    /// absent-alliance fallback (defaults to red with a warning).
    #[serde(default)]
    pub alliance: Option<Alliance>,

    /// Control loop period in milliseconds.
    #[serde(default = "default_loop_period_ms")]
    pub loop_period_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width_m: default_field_width_m(),
            field_length_m: default_field_length_m(),
            alliance: None,
            loop_period_ms: default_loop_period_ms(),
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults silently; an unparseable file
    /// yields the defaults with a warning rather than refusing to start.
    pub fn load(path: &Path) -> Config {
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "bad config file; using defaults");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }

    /// The configured field geometry.
    pub fn field(&self) -> FieldGeometry {
        FieldGeometry::new(self.field_width_m, self.field_length_m)
    }

    /// The configured control loop period.
    pub fn loop_period(&self) -> Duration {
        Duration::from_millis(self.loop_period_ms)
    }
}
