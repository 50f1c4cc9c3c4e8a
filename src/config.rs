//! Classifier tuning and its persisted form.

use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "swipe_detector_config";
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.2;
pub const DEFAULT_IDLE_RESET_MS: f64 = 200.0;

/// Which velocity estimate the swipe decision of a sample reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocitySampling {
    /// Velocity measured up to the previous sample (one sample behind).
    #[default]
    PreviousSample,
    /// Velocity measured up to and including the current sample.
    CurrentSample,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Horizontal speed (px/ms) a sample must exceed to count as a swipe.
    pub velocity_threshold: f64,
    /// Gap between samples (ms) after which the velocity is forced to zero.
    pub idle_reset_ms: f64,
    pub velocity_sampling: VelocitySampling,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            idle_reset_ms: DEFAULT_IDLE_RESET_MS,
            velocity_sampling: VelocitySampling::PreviousSample,
        }
    }
}

impl SwipeConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Replaces negative or non-finite values with their defaults.
    pub fn sanitized(self) -> Self {
        let fix = |v: f64, d: f64| if v.is_finite() && v >= 0.0 { v } else { d };
        Self {
            velocity_threshold: fix(self.velocity_threshold, DEFAULT_VELOCITY_THRESHOLD),
            idle_reset_ms: fix(self.idle_reset_ms, DEFAULT_IDLE_RESET_MS),
            velocity_sampling: self.velocity_sampling,
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Reads the stored config, falling back to defaults on any failure.
pub fn load() -> SwipeConfig {
    let Some(store) = storage() else {
        return SwipeConfig::default();
    };
    match store.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => match SwipeConfig::from_json(&raw) {
            Ok(cfg) => cfg.sanitized(),
            Err(e) => {
                log::warn!("ignoring stored swipe config: {e}");
                SwipeConfig::default()
            }
        },
        _ => SwipeConfig::default(),
    }
}

pub fn save(cfg: &SwipeConfig) {
    let Some(store) = storage() else { return };
    match cfg.to_json() {
        Ok(s) => {
            if store.set_item(STORAGE_KEY, &s).is_err() {
                log::warn!("could not persist swipe config");
            }
        }
        Err(e) => log::warn!("could not encode swipe config: {e}"),
    }
}

pub fn clear() {
    if let Some(store) = storage() {
        let _ = store.remove_item(STORAGE_KEY);
    }
}
