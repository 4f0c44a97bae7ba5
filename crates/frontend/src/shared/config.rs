use serde::Deserialize;
use std::time::Duration;

use crate::shared::notify::{HorizontalPosition, NoticeLevel, NotifyOptions, VerticalPosition};

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AdminConfig {
    pub service: ServiceConfig,
    pub toast: ToastConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Absolute origin of the fortune service; empty means same origin as the page
    pub base_url: String,
    pub path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            path: "/_v/fortune-cookie-service/fortune".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_ms: u64,
    pub horizontal_position: HorizontalPosition,
    pub vertical_position: VerticalPosition,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            horizontal_position: HorizontalPosition::Right,
            vertical_position: VerticalPosition::Top,
        }
    }
}

impl ToastConfig {
    /// Notification options for a toast of the given level
    pub fn options(&self, level: NoticeLevel) -> NotifyOptions {
        NotifyOptions {
            duration: Some(Duration::from_millis(self.duration_ms)),
            horizontal_position: Some(self.horizontal_position),
            vertical_position: Some(self.vertical_position),
            level,
        }
    }
}

/// Configuration embedded in the bundle
const EMBEDDED_CONFIG: &str = include_str!("../../config/admin.toml");

/// Parse a TOML document; missing keys take their defaults
pub fn parse_config(contents: &str) -> Result<AdminConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the embedded configuration, falling back to defaults if it does not parse
pub fn load_config() -> AdminConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid embedded admin.toml, using defaults: {}", e);
            AdminConfig::default()
        }
    }
}
