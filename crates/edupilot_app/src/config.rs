//! Application configuration
//!
//! EduPilot reads an optional `edupilot.toml`. Every section and field has a
//! default matching the shipped site, so an empty file (or no file) is a
//! valid configuration:
//!
//! ```toml
//! [catalog]
//! page_size = 6
//! page_buttons = 5
//!
//! [[marquee.rows]]
//! period_seconds = 30.0
//! direction = "forward"
//!
//! [typing]
//! text = "Hi! I am Rishika!"
//! tick_interval_ms = 100
//!
//! [dashboard]
//! user_name = "Rishika"
//! pulse_interval_ms = 5000
//! pulse_ms = 500
//!
//! [navigation]
//! scroll_threshold_px = 50.0
//! ```

use anyhow::{Context, Result};
use edupilot_core::{CyclerError, Direction};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "edupilot.toml";

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Course grid settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Courses per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Page number buttons shown before collapsing into ellipses
    #[serde(default = "default_page_buttons")]
    pub page_buttons: usize,
}

fn default_page_size() -> usize {
    6
}

fn default_page_buttons() -> usize {
    5
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_buttons: default_page_buttons(),
        }
    }
}

/// Testimonial marquee settings, one entry per row
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MarqueeConfig {
    #[serde(default = "default_marquee_rows")]
    pub rows: Vec<MarqueeRowConfig>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MarqueeRowConfig {
    /// Seconds for one full pass of the row
    pub period_seconds: f64,
    #[serde(default)]
    pub direction: Direction,
}

fn default_marquee_rows() -> Vec<MarqueeRowConfig> {
    vec![
        MarqueeRowConfig {
            period_seconds: 30.0,
            direction: Direction::Forward,
        },
        MarqueeRowConfig {
            period_seconds: 25.0,
            direction: Direction::Reverse,
        },
        MarqueeRowConfig {
            period_seconds: 30.0,
            direction: Direction::Forward,
        },
    ]
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            rows: default_marquee_rows(),
        }
    }
}

/// Hero heading typing animation
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TypingConfig {
    #[serde(default = "default_typing_text")]
    pub text: String,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u32,
}

fn default_typing_text() -> String {
    "Hi! I am Rishika!".to_string()
}

fn default_tick_interval_ms() -> u32 {
    100
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            text: default_typing_text(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Home dashboard settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_pulse_interval_ms")]
    pub pulse_interval_ms: u32,
    #[serde(default = "default_pulse_ms")]
    pub pulse_ms: u32,
}

fn default_user_name() -> String {
    "Rishika".to_string()
}

fn default_pulse_interval_ms() -> u32 {
    edupilot_animation::pulse::DEFAULT_INTERVAL_MS
}

fn default_pulse_ms() -> u32 {
    edupilot_animation::pulse::DEFAULT_PULSE_MS
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            pulse_interval_ms: default_pulse_interval_ms(),
            pulse_ms: default_pulse_ms(),
        }
    }
}

/// Navigation bar settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NavigationConfig {
    #[serde(default = "default_scroll_threshold_px")]
    pub scroll_threshold_px: f32,
}

fn default_scroll_threshold_px() -> f32 {
    edupilot_widgets::DEFAULT_SCROLL_THRESHOLD_PX
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: default_scroll_threshold_px(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Load `edupilot.toml` from `dir` if present, otherwise use defaults
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Reject values no primitive could be built from
    pub fn validate(&self) -> edupilot_core::Result<()> {
        if self.catalog.page_size == 0 {
            return Err(CyclerError::config("catalog.page_size", "must be greater than zero"));
        }
        if self.catalog.page_buttons == 0 {
            return Err(CyclerError::config(
                "catalog.page_buttons",
                "must be greater than zero",
            ));
        }
        for row in &self.marquee.rows {
            if !row.period_seconds.is_finite() || row.period_seconds <= 0.0 {
                return Err(CyclerError::config(
                    "marquee.rows.period_seconds",
                    format!("must be a positive finite number, got {}", row.period_seconds),
                ));
            }
        }
        if self.typing.tick_interval_ms == 0 {
            return Err(CyclerError::config(
                "typing.tick_interval_ms",
                "must be greater than zero",
            ));
        }
        if self.dashboard.pulse_interval_ms == 0
            || self.dashboard.pulse_ms == 0
            || self.dashboard.pulse_ms >= self.dashboard.pulse_interval_ms
        {
            return Err(CyclerError::config(
                "dashboard.pulse_ms",
                "must be non-zero and shorter than dashboard.pulse_interval_ms",
            ));
        }
        let threshold = self.navigation.scroll_threshold_px;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CyclerError::config(
                "navigation.scroll_threshold_px",
                "must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_match_site() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.page_size, 6);
        assert_eq!(config.typing.text, "Hi! I am Rishika!");
        assert_eq!(config.typing.tick_interval_ms, 100);
        assert_eq!(config.marquee.rows.len(), 3);
        assert_eq!(config.marquee.rows[1].direction, Direction::Reverse);
        assert_eq!(config.marquee.rows[1].period_seconds, 25.0);
        assert_eq!(config.dashboard.pulse_interval_ms, 5_000);
        assert_eq!(config.navigation.scroll_threshold_px, 50.0);
    }

    #[test]
    fn test_partial_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [catalog]
            page_size = 4

            [[marquee.rows]]
            period_seconds = 12.5
            direction = "reverse"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.page_size, 4);
        assert_eq!(config.catalog.page_buttons, 5);
        assert_eq!(config.marquee.rows.len(), 1);
        assert_eq!(config.marquee.rows[0].direction, Direction::Reverse);
        assert_eq!(config.typing, TypingConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = AppConfig::default();
        config.catalog.page_size = 0;
        assert!(config.validate().unwrap_err().is_configuration());

        let mut config = AppConfig::default();
        config.marquee.rows[0].period_seconds = -3.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.typing.tick_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.dashboard.pulse_ms = 6_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = config.to_toml_string().unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
