//! Outbound services: device position, reverse geocoding and lead tracking
//!
//! Each service sits behind an async trait so the app can be driven by mocks
//! in tests.

mod error;
mod geocoder;
mod http;
mod location;
mod tracker;
mod traits;

pub use error::ServiceError;
pub use geocoder::HttpGeocoder;
pub use http::build_client;
pub use location::{ConfiguredGeolocator, Coordinates, LocationResolver};
pub use tracker::HttpTracker;
pub use traits::{Geolocator, LeadTracker, ReverseGeocoder};

#[cfg(test)]
pub use geocoder::{GeocodeAddress, GeocodeReply};
#[cfg(test)]
pub use traits::{MockGeolocator, MockLeadTracker, MockReverseGeocoder};
