//! Device position and the location resolver

use super::error::ServiceError;
use super::traits::{Geolocator, ReverseGeocoder};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Geolocator reporting a position taken from configuration.
///
/// A terminal has no positioning hardware of its own: without a configured
/// position the capability is unavailable, and with location sharing turned
/// off the request is denied.
pub struct ConfiguredGeolocator {
    position: Option<Coordinates>,
    allowed: bool,
}

impl ConfiguredGeolocator {
    pub fn new(position: Option<Coordinates>, allowed: bool) -> Self {
        Self { position, allowed }
    }
}

#[async_trait]
impl Geolocator for ConfiguredGeolocator {
    async fn current_position(&self) -> Result<Coordinates, ServiceError> {
        let position = self.position.ok_or(ServiceError::Unavailable)?;
        if !self.allowed {
            return Err(ServiceError::PermissionDenied);
        }
        Ok(position)
    }
}

/// Resolves the current device position to a place name
pub struct LocationResolver {
    geolocator: Arc<dyn Geolocator>,
    geocoder: Arc<dyn ReverseGeocoder>,
    timeout: Option<Duration>,
}

impl LocationResolver {
    pub fn new(geolocator: Arc<dyn Geolocator>, geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self {
            geolocator,
            geocoder,
            timeout: None,
        }
    }

    /// Bound the whole lookup (position + geocoding)
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Single-shot lookup. No retry.
    pub async fn resolve(&self) -> Result<String, ServiceError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.lookup())
                .await
                .map_err(|_| ServiceError::Timeout(limit))?,
            None => self.lookup().await,
        }
    }

    async fn lookup(&self) -> Result<String, ServiceError> {
        let position = self.geolocator.current_position().await?;
        debug!(?position, "device position acquired");

        let reply = self.geocoder.reverse(position).await?;
        let place = reply
            .place_name()
            .map(str::to_string)
            .ok_or(ServiceError::NoPlaceName)?;

        info!(place = %place, "location resolved");
        Ok(place)
    }
}
