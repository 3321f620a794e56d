//! Runtime configuration for tracker front ends.
//!
//! # Responsibility
//! - Hold storage location, logging settings and timer presets.
//! - Parse user-supplied timer preset lists.
//!
//! # Invariants
//! - Presets keep the order they were given in.
//! - Preset seconds are always in `0..60` when written as `M:SS`.

use crate::logging::default_log_level;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Default database file name, relative to the working directory.
pub const DEFAULT_DB_FILE_NAME: &str = "pawtrainer.sqlite3";

/// Timer durations offered by default: 0:30, 1:00 and 1:30.
pub const DEFAULT_TIMER_PRESET_SECS: [u32; 3] = [30, 60, 90];

static PRESET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?P<min>\d{1,3}):(?P<sec>[0-5]\d)|(?P<plain>\d{1,5}))$")
        .expect("valid timer preset regex")
});

/// One configured countdown duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerPreset {
    total_secs: u32,
}

impl TimerPreset {
    pub fn from_secs(total_secs: u32) -> Self {
        Self { total_secs }
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    /// Display label in `M:SS` form, e.g. `1:30`.
    pub fn label(&self) -> String {
        format!("{}:{:02}", self.total_secs / 60, self.total_secs % 60)
    }
}

/// Configuration parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidTimerPreset(String),
    EmptyTimerPresets,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimerPreset(value) => write!(
                f,
                "invalid timer preset `{value}`; expected M:SS or whole seconds"
            ),
            Self::EmptyTimerPresets => write!(f, "at least one timer preset is required"),
        }
    }
}

impl Error for ConfigError {}

/// Settings consumed by the CLI and other front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Absolute directory for rolling log files; logging is off when unset.
    pub log_dir: Option<PathBuf>,
    pub timer_presets: Vec<TimerPreset>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
            timer_presets: default_timer_presets(),
        }
    }
}

pub fn default_timer_presets() -> Vec<TimerPreset> {
    DEFAULT_TIMER_PRESET_SECS
        .iter()
        .copied()
        .map(TimerPreset::from_secs)
        .collect()
}

/// Parses a comma-separated preset list such as `0:30,1:00,90`.
pub fn parse_timer_presets(value: &str) -> Result<Vec<TimerPreset>, ConfigError> {
    let presets = value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_timer_preset)
        .collect::<Result<Vec<_>, _>>()?;
    if presets.is_empty() {
        return Err(ConfigError::EmptyTimerPresets);
    }
    Ok(presets)
}

/// Parses one preset written as `M:SS` or whole seconds.
pub fn parse_timer_preset(value: &str) -> Result<TimerPreset, ConfigError> {
    let invalid = || ConfigError::InvalidTimerPreset(value.to_string());
    let caps = PRESET_RE.captures(value.trim()).ok_or_else(invalid)?;

    if let Some(plain) = caps.name("plain") {
        let secs = plain.as_str().parse::<u32>().map_err(|_| invalid())?;
        return Ok(TimerPreset::from_secs(secs));
    }

    let minutes = caps
        .name("min")
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let seconds = caps
        .name("sec")
        .and_then(|s| s.as_str().parse::<u32>().ok())
        .ok_or_else(invalid)?;
    Ok(TimerPreset::from_secs(minutes * 60 + seconds))
}

#[cfg(test)]
mod tests {
    use super::{
        default_timer_presets, parse_timer_preset, parse_timer_presets, ConfigError,
        TimerPreset, TrainerConfig,
    };

    #[test]
    fn default_presets_match_training_durations() {
        let labels: Vec<String> = default_timer_presets().iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["0:30", "1:00", "1:30"]);
        assert_eq!(TrainerConfig::default().timer_presets.len(), 3);
    }

    #[test]
    fn parses_minute_and_plain_forms() {
        assert_eq!(parse_timer_preset("1:30"), Ok(TimerPreset::from_secs(90)));
        assert_eq!(parse_timer_preset(" 45 "), Ok(TimerPreset::from_secs(45)));
        assert_eq!(
            parse_timer_presets("0:30, 2:00,10").unwrap(),
            vec![
                TimerPreset::from_secs(30),
                TimerPreset::from_secs(120),
                TimerPreset::from_secs(10)
            ]
        );
    }

    #[test]
    fn rejects_malformed_presets() {
        assert_eq!(
            parse_timer_preset("1:75"),
            Err(ConfigError::InvalidTimerPreset("1:75".to_string()))
        );
        assert!(parse_timer_preset("abc").is_err());
        assert_eq!(parse_timer_presets(" , "), Err(ConfigError::EmptyTimerPresets));
    }
}
