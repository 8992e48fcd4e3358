//! Behavioral parameters
//!
//! The three numbers that define the game feel, named and overridable from
//! `assets/tuning.json`. The defaults are the shipped values; deviating from
//! them changes how the dot plays, not whether it works.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Physics and input parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Per-frame velocity decay factor, applied once per axis per frame
    /// regardless of the time step - frame rate does not change the decay
    pub damping: f32,
    /// Both axis speeds strictly below this snap to zero on the same frame
    pub rest_threshold: f32,
    /// Drag-distance-to-velocity multiplier for the launch impulse
    pub launch_gain: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            damping: 0.99,
            rest_threshold: 20.0,
            launch_gain: 2.0,
        }
    }
}

impl Tuning {
    /// Read overrides from a JSON file, falling back to defaults
    ///
    /// A missing or malformed file is not fatal: the defaults are always
    /// playable, so this logs and moves on.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!(
                        "ignoring malformed tuning file {}: {err}",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_shipped_feel() {
        let tuning = Tuning::default();
        assert_eq!(tuning.damping, 0.99);
        assert_eq!(tuning.rest_threshold, 20.0);
        assert_eq!(tuning.launch_gain, 2.0);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning {
            damping: 0.95,
            rest_threshold: 10.0,
            launch_gain: 3.0,
        };
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.damping, 0.95);
        assert_eq!(back.rest_threshold, 10.0);
        assert_eq!(back.launch_gain, 3.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults_for_the_rest() {
        let partial: Tuning = serde_json::from_str(r#"{"damping": 0.5}"#).unwrap();
        assert_eq!(partial.damping, 0.5);
        assert_eq!(partial.rest_threshold, 20.0);
        assert_eq!(partial.launch_gain, 2.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let tuning = Tuning::load_or_default(Path::new("does/not/exist.json"));
        assert_eq!(tuning.damping, 0.99);
    }
}
