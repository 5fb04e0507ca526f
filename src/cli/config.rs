//! Configuration loading
//!
//! Embedded defaults, then optional files, then `CANTEEN_` environment
//! variables (highest priority).

use anyhow::{Context, Result};
use canteen_core::{detect_locale, Locale, Theme};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Embedded default configuration (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Effective configuration rendered as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Locale code, or "auto" to follow the environment
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_toast_ticks")]
    pub toast_ticks: u16,
}

fn default_locale() -> String {
    "auto".to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_tick_rate_ms() -> u64 {
    200
}

fn default_toast_ticks() -> u16 {
    15
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            theme: default_theme(),
            tick_rate_ms: default_tick_rate_ms(),
            toast_ticks: default_toast_ticks(),
        }
    }
}

impl UiConfig {
    /// Configured locale; unknown codes fall back to English.
    pub fn locale(&self) -> Locale {
        let code = self.locale.trim();
        if code.is_empty() || code.eq_ignore_ascii_case("auto") {
            return detect_locale();
        }
        code.parse().unwrap_or_else(|err| {
            warn!(error = %err, "invalid ui.locale, using default");
            Locale::default()
        })
    }

    /// Configured theme; unknown names fall back to dark.
    pub fn theme(&self) -> Theme {
        self.theme.parse().unwrap_or_else(|err| {
            warn!(error = %err, "invalid ui.theme, using default");
            Theme::default()
        })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Directory of the TUI log file; empty means the platform data dir
    #[serde(default)]
    pub directory: String,
}

fn default_filter() -> String {
    "canteen=info,canteen_core=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            directory: String::new(),
        }
    }
}

impl LoggingConfig {
    pub fn log_dir(&self) -> PathBuf {
        if self.directory.trim().is_empty() {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("canteen")
                .join("logs")
        } else {
            PathBuf::from(self.directory.trim())
        }
    }
}

/// Load configuration from files and environment
pub fn load_config() -> Result<AppConfig> {
    let config = Config::builder()
        // 1. Embedded defaults (always available)
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        // 2. External overrides (optional)
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            File::with_name(&format!(
                "config/{}",
                std::env::var("CANTEEN_ENV").unwrap_or_else(|_| "development".to_string())
            ))
            .required(false),
        )
        .add_source(File::with_name("config/local").required(false))
        // 3. Environment variables, e.g. CANTEEN_UI__LOCALE=fr
        .add_source(
            Environment::with_prefix("CANTEEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    config
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> AppConfig {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_embedded_defaults() {
        let config = embedded();
        assert_eq!(config.ui.locale, "auto");
        assert_eq!(config.ui.theme(), Theme::Dark);
        assert_eq!(config.ui.tick_rate(), Duration::from_millis(200));
        assert_eq!(config.ui.toast_ticks, 15);
        assert!(config.logging.filter.starts_with("canteen="));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let ui = UiConfig {
            locale: "klingon".into(),
            theme: "sepia".into(),
            tick_rate_ms: 0,
            ..UiConfig::default()
        };
        assert_eq!(ui.locale(), Locale::En);
        assert_eq!(ui.theme(), Theme::Dark);
        assert_eq!(ui.tick_rate(), Duration::from_millis(10));
    }

    #[test]
    fn test_explicit_locale() {
        let ui = UiConfig {
            locale: "ar".into(),
            theme: "Light".into(),
            ..UiConfig::default()
        };
        assert_eq!(ui.locale(), Locale::Ar);
        assert_eq!(ui.theme(), Theme::Light);
    }

    #[test]
    fn test_log_dir() {
        let logging = LoggingConfig {
            directory: "/tmp/canteen-logs".into(),
            ..LoggingConfig::default()
        };
        assert_eq!(logging.log_dir(), PathBuf::from("/tmp/canteen-logs"));
        assert!(LoggingConfig::default().log_dir().ends_with("canteen/logs"));
    }

    #[test]
    fn test_to_toml_roundtrips_sections() {
        let text = AppConfig::default().to_toml().unwrap();
        assert!(text.contains("[ui]"));
        assert!(text.contains("[logging]"));
        assert!(text.contains("locale = \"auto\""));
    }
}
