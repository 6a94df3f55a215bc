//! Playback configuration.
//!
//! A single tunable: the inter-step delay used by the scheduler.
//! Settings are serde-serializable and can be persisted as JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

/// Smallest accepted inter-step delay.
pub const MIN_STEP_DELAY_MS: u64 = 100;
/// Largest accepted inter-step delay.
pub const MAX_STEP_DELAY_MS: u64 = 1000;
/// Default inter-step delay.
pub const DEFAULT_STEP_DELAY_MS: u64 = 300;

/// Playback settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// Delay between scheduled steps, in milliseconds.
    pub step_delay_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
        }
    }
}

impl PlaybackSettings {
    /// Create settings with an explicit delay, rejecting out-of-range values.
    pub fn with_delay(step_delay_ms: u64) -> Result<Self> {
        let settings = Self { step_delay_ms };
        settings.validate()?;
        Ok(settings)
    }

    /// Create settings with the delay saturated into the valid range.
    pub fn clamped(step_delay_ms: u64) -> Self {
        Self {
            step_delay_ms: step_delay_ms.clamp(MIN_STEP_DELAY_MS, MAX_STEP_DELAY_MS),
        }
    }

    /// Check that the delay is within the supported range.
    pub fn validate(&self) -> Result<()> {
        if self.step_delay_ms < MIN_STEP_DELAY_MS || self.step_delay_ms > MAX_STEP_DELAY_MS {
            return Err(Error::InvalidDelay {
                delay_ms: self.step_delay_ms,
                min: MIN_STEP_DELAY_MS,
                max: MAX_STEP_DELAY_MS,
            });
        }
        Ok(())
    }

    /// The inter-step delay as a [`Duration`].
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Load settings from a JSON file, validating the result.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents).map_err(|e| Error::Settings {
            reason: format!("failed to parse {}: {}", path.display(), e),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a JSON file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| Error::Settings {
            reason: format!("failed to serialize settings: {}", e),
        })?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(PlaybackSettings::default().step_delay_ms, 300);
    }

    #[test]
    fn test_with_delay_accepts_range_bounds() {
        assert!(PlaybackSettings::with_delay(100).is_ok());
        assert!(PlaybackSettings::with_delay(1000).is_ok());
    }

    #[test]
    fn test_with_delay_rejects_out_of_range() {
        assert!(matches!(
            PlaybackSettings::with_delay(99),
            Err(Error::InvalidDelay { delay_ms: 99, .. })
        ));
        assert!(PlaybackSettings::with_delay(1001).is_err());
    }

    #[test]
    fn test_clamped_saturates_to_bounds() {
        assert_eq!(PlaybackSettings::clamped(10).step_delay_ms, 100);
        assert_eq!(PlaybackSettings::clamped(5000).step_delay_ms, 1000);
        assert_eq!(PlaybackSettings::clamped(250).step_delay_ms, 250);
    }

    #[test]
    fn test_settings_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playback.json");

        let settings = PlaybackSettings::with_delay(450).unwrap();
        settings.save_to(&path).unwrap();

        assert_eq!(PlaybackSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_load_rejects_out_of_range_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playback.json");
        std::fs::write(&path, r#"{"step_delay_ms": 5}"#).unwrap();

        assert!(PlaybackSettings::load_from(&path).is_err());
    }
}
