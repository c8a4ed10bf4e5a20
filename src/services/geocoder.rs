//! Reverse geocoding over HTTP

use super::error::ServiceError;
use super::location::Coordinates;
use super::traits::ReverseGeocoder;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// `address` object of a reverse geocoding reply
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeocodeAddress {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
}

/// Subset of the reverse geocoding reply we use
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeocodeReply {
    #[serde(default)]
    pub address: GeocodeAddress,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl GeocodeReply {
    /// City, then town, then the full display name; first non-empty wins
    pub fn place_name(&self) -> Option<&str> {
        [
            self.address.city.as_deref(),
            self.address.town.as_deref(),
            self.display_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|name| !name.trim().is_empty())
    }
}

/// Reverse geocoder backed by a Nominatim-compatible endpoint
pub struct HttpGeocoder {
    client: Client,
    endpoint: String,
}

impl HttpGeocoder {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ReverseGeocoder for HttpGeocoder {
    async fn reverse(&self, at: Coordinates) -> Result<GeocodeReply, ServiceError> {
        debug!(lat = at.latitude, lon = at.longitude, "reverse geocoding");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("format", "json".to_string()),
                ("lat", at.latitude.to_string()),
                ("lon", at.longitude.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        response
            .json::<GeocodeReply>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }
}
