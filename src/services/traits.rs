//! Trait abstractions for outbound services to enable mocking in tests

use super::error::ServiceError;
use super::geocoder::GeocodeReply;
use super::location::Coordinates;
use crate::submission::SubmissionRecord;
use async_trait::async_trait;

/// Source of the device position
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Suspends until a position is granted, denied or known to be unavailable
    async fn current_position(&self) -> Result<Coordinates, ServiceError>;
}

/// Coordinates to place name lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, at: Coordinates) -> Result<GeocodeReply, ServiceError>;
}

/// Endpoint that records submitted leads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadTracker: Send + Sync {
    /// Deliver one record. Success only means the request went out.
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), ServiceError>;
}
