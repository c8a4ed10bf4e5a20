//! Service error taxonomy

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("geolocation is not available on this device")]
    Unavailable,

    #[error("geolocation permission denied")]
    PermissionDenied,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("response carried no usable place name")]
    NoPlaceName,
}

impl ServiceError {
    /// Alert shown when a location lookup fails
    pub fn location_message(&self) -> &'static str {
        match self {
            ServiceError::Unavailable => "Geolocation is not available on this device.",
            _ => "Could not get your location. Please type it manually.",
        }
    }
}
