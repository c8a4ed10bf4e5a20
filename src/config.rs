//! Configuration handling for the TUI

use crate::services::Coordinates;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default reverse geocoding endpoint
pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org/reverse";
/// Default lead tracking endpoint (spreadsheet web app)
pub const DEFAULT_TRACKING_URL: &str =
    "https://script.google.com/macros/s/AKfycbzSeuCodigoAqui/exec";
/// Default specialist phone number for the deep link
pub const DEFAULT_WHATSAPP_NUMBER: &str = "55991661357";
/// Default pre-filled text of the deep link
pub const DEFAULT_WHATSAPP_TEXT: &str =
    "Hi, I ran a free simulation and would like to ask a few questions";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Reverse geocoding endpoint
    pub geocoding_url: Option<String>,
    /// Lead tracking endpoint
    pub tracking_url: Option<String>,
    /// Timeout applied to outbound requests and location lookups
    pub request_timeout_secs: Option<u64>,
    /// Device latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Device longitude in decimal degrees
    pub longitude: Option<f64>,
    /// Whether the position may be shared (defaults to true)
    pub share_location: Option<bool>,
    /// Specialist phone number for the deep link
    pub whatsapp_number: Option<String>,
    /// Pre-filled deep link text
    pub whatsapp_text: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "solarsim", "solar-sim-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn geocoding_url(&self) -> &str {
        self.geocoding_url.as_deref().unwrap_or(DEFAULT_GEOCODING_URL)
    }

    pub fn tracking_url(&self) -> &str {
        self.tracking_url.as_deref().unwrap_or(DEFAULT_TRACKING_URL)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Configured device position; both coordinates are needed
    pub fn position(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn share_location(&self) -> bool {
        self.share_location.unwrap_or(true)
    }

    /// Deep link to the specialist chat with the pre-filled text
    pub fn specialist_link(&self) -> Result<Url, url::ParseError> {
        let number = self
            .whatsapp_number
            .as_deref()
            .unwrap_or(DEFAULT_WHATSAPP_NUMBER);
        let text = self.whatsapp_text.as_deref().unwrap_or(DEFAULT_WHATSAPP_TEXT);
        Url::parse_with_params(&format!("https://wa.me/{number}"), &[("text", text)])
    }
}
