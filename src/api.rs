pub mod client;
pub mod error;
pub mod nominatim;
pub mod osrm;

use async_trait::async_trait;

use crate::{
    api::error::RouteError,
    core::route::{Coordinate, RouteSummary},
};

/// Free-text address to coordinate.
#[async_trait]
pub trait Geocoder: Sync {
    async fn geocode(&self, address: &str) -> Result<Coordinate, RouteError>;
}

/// Ordered stops to a driving route.
#[async_trait]
pub trait Router: Sync {
    async fn route(&self, stops: &[Coordinate]) -> Result<RouteSummary, RouteError>;
}
