//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! default so the application works without a config file.

use crate::navigation::AppletTab;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// strftime format used by the example applets' update buttons.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_status_timeout")]
    pub status_timeout_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            tick_rate_ms: default_tick_rate(),
            status_timeout_ms: default_status_timeout(),
        }
    }
}

/// Start-up navigation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Tab selected at start-up. Unknown names are logged and ignored.
    #[serde(default)]
    pub initial_tab: Option<String>,
}

impl NavigationConfig {
    pub fn initial_tab(&self) -> Option<AppletTab> {
        let name = self.initial_tab.as_deref()?;
        match name.parse() {
            Ok(tab) => Some(tab),
            Err(err) => {
                warn!(%err, "ignoring navigation.initial_tab");
                None
            }
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%-I:%M:%S %p".to_string()
}
fn default_tick_rate() -> u64 {
    250
}
fn default_status_timeout() -> u64 {
    3000
}
fn default_log_dir() -> String {
    "~/.local/share/appletkit/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.timestamp_format, "%-I:%M:%S %p");
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.ui.status_timeout_ms, 3000);
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.navigation.initial_tab(), None);
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            timestamp_format = "%H:%M"

            [navigation]
            initial_tab = "settings"

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.timestamp_format, "%H:%M");
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.navigation.initial_tab(), Some(AppletTab::Settings));
        assert!(config.logging.enabled);
        assert_eq!(config.logging.log_dir, "~/.local/share/appletkit/logs");
    }

    #[test]
    fn test_unknown_initial_tab_is_ignored() {
        let config = NavigationConfig {
            initial_tab: Some("profile".into()),
        };
        assert_eq!(config.initial_tab(), None);
    }
}
