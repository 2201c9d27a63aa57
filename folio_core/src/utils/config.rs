use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{CounterTiming, CyclerTiming, Spring};
use crate::constants::*;
use crate::content::PortfolioContent;
use crate::utils::error::{FolioError, FolioResult, ResultExt};

/// Timing and tuning knobs for every animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub type_tick_ms: u64,
    pub delete_tick_ms: u64,
    pub hold_ms: u64,
    pub counter_duration_ms: u64,
    pub counter_tick_ms: u64,
    pub frame_interval_ms: u64,
    pub tilt_max_angle_deg: f32,
    pub spring_stiffness: f32,
    pub spring_damping: f32,
    pub spring_mass: f32,
    pub visibility_threshold: f32,
    pub contact_delay_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            type_tick_ms: TYPE_TICK_MS,
            delete_tick_ms: DELETE_TICK_MS,
            hold_ms: HOLD_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            counter_tick_ms: COUNTER_TICK_MS,
            frame_interval_ms: FRAME_INTERVAL_MS,
            tilt_max_angle_deg: TILT_MAX_ANGLE_DEG,
            spring_stiffness: SPRING_STIFFNESS,
            spring_damping: SPRING_DAMPING,
            spring_mass: SPRING_MASS,
            visibility_threshold: VISIBILITY_THRESHOLD,
            contact_delay_ms: CONTACT_SUBMIT_DELAY_MS,
        }
    }
}

impl MotionConfig {
    pub fn cycler_timing(&self) -> CyclerTiming {
        CyclerTiming {
            type_tick: Duration::from_millis(self.type_tick_ms),
            delete_tick: Duration::from_millis(self.delete_tick_ms),
            hold: Duration::from_millis(self.hold_ms),
        }
    }

    pub fn counter_timing(&self) -> CounterTiming {
        CounterTiming {
            duration: Duration::from_millis(self.counter_duration_ms),
            tick: Duration::from_millis(self.counter_tick_ms),
        }
    }

    pub fn spring(&self) -> Spring {
        Spring::new(self.spring_stiffness, self.spring_damping, self.spring_mass)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        let ticks = [
            ("type_tick_ms", self.type_tick_ms),
            ("delete_tick_ms", self.delete_tick_ms),
            ("counter_tick_ms", self.counter_tick_ms),
            ("frame_interval_ms", self.frame_interval_ms),
        ];
        for (name, value) in ticks {
            if value == 0 {
                return Err(FolioError::Config(format!("{} must be greater than zero", name)));
            }
        }

        if self.delete_tick_ms >= self.type_tick_ms {
            return Err(FolioError::Config(
                "delete_tick_ms must be shorter than type_tick_ms".to_string(),
            ));
        }
        if self.tilt_max_angle_deg <= 0.0 {
            return Err(FolioError::Config(
                "tilt_max_angle_deg must be positive".to_string(),
            ));
        }
        if self.spring_stiffness <= 0.0 || self.spring_damping < 0.0 || self.spring_mass <= 0.0 {
            return Err(FolioError::Config(
                "spring constants must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(FolioError::Config(
                "visibility_threshold must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub motion: MotionConfig,
    /// Replaces the built-in portfolio content when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<PortfolioContent>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FolioResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).with_file_context(&display)?;
        let config: Config = serde_json::from_str(&raw).with_config_context(&display)?;
        config.motion.validate().with_config_context(&display)?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> FolioResult<()> {
        let path = path.as_ref();
        let display = path.display().to_string();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_file_context(&display)?;
        }

        let raw = serde_json::to_string_pretty(self).with_config_context(&display)?;
        fs::write(path, raw).with_file_context(&display)?;
        Ok(())
    }

    /// `~/.folio/config.json`, when a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".folio").join("config.json"))
    }

    /// Loads an explicit path (which must exist), or the default path if
    /// present, or falls back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> FolioResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load_from_file(default),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Content to display: the override if configured, else the built-in set.
    pub fn content(&self) -> PortfolioContent {
        self.content.clone().unwrap_or_else(PortfolioContent::builtin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let motion = MotionConfig::default();
        assert!(motion.validate().is_ok());
        assert_eq!(motion.cycler_timing(), CyclerTiming::default());
        assert_eq!(motion.counter_timing(), CounterTiming::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "motion": { "hold_ms": 500 } }"#).unwrap();
        assert_eq!(config.motion.hold_ms, 500);
        assert_eq!(config.motion.type_tick_ms, TYPE_TICK_MS);
        assert!(config.content.is_none());
        assert_eq!(config.content().profile.roles.len(), 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut motion = MotionConfig::default();
        motion.counter_tick_ms = 0;
        assert!(motion.validate().is_err());

        let mut motion = MotionConfig::default();
        motion.delete_tick_ms = motion.type_tick_ms;
        assert!(motion.validate().is_err());

        let mut motion = MotionConfig::default();
        motion.visibility_threshold = 1.5;
        assert!(motion.validate().is_err());

        let mut motion = MotionConfig::default();
        motion.tilt_max_angle_deg = 0.0;
        assert!(motion.validate().is_err());
    }
}
