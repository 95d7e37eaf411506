use chrono::{DateTime, Local};

use crate::{
    api::{Geocoder, Router, error::RouteError},
    core::{day_log::DayLog, route::RouteSummary},
    prelude::*,
    quantity::Hours,
};

/// Full plan for one trip: the route context plus the daily logs.
#[derive(serde::Serialize)]
pub struct TripPlan {
    pub planned_at: DateTime<Local>,
    pub cycle_hours_used: Hours,
    pub route: RouteSummary,
    pub logs: Vec<DayLog>,
}

/// Geocode the three stops and fetch one route visiting them in order.
#[instrument(skip_all)]
pub async fn resolve_route(
    geocoder: &dyn Geocoder,
    router: &dyn Router,
    current_location: &str,
    pickup_location: &str,
    dropoff_location: &str,
) -> Result<RouteSummary, RouteError> {
    let current = geocoder.geocode(current_location).await?;
    let pickup = geocoder.geocode(pickup_location).await?;
    let dropoff = geocoder.geocode(dropoff_location).await?;
    router.route(&[current, pickup, dropoff]).await
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{
        core::route::Coordinate,
        quantity::{Meters, Seconds},
    };

    struct FixedGeocoder;

    #[async_trait]
    impl Geocoder for FixedGeocoder {
        async fn geocode(&self, address: &str) -> Result<Coordinate, RouteError> {
            match address {
                "Chicago, IL" => Ok(Coordinate { longitude: -87.62, latitude: 41.88 }),
                "St Louis, MO" => Ok(Coordinate { longitude: -90.20, latitude: 38.63 }),
                "Houston, TX" => Ok(Coordinate { longitude: -95.37, latitude: 29.76 }),
                _ => Err(RouteError::AddressNotFound(address.to_string())),
            }
        }
    }

    struct StraightLineRouter;

    #[async_trait]
    impl Router for StraightLineRouter {
        async fn route(&self, stops: &[Coordinate]) -> Result<RouteSummary, RouteError> {
            Ok(RouteSummary {
                distance: Meters(1_930_000.0),
                duration: Seconds(64800.0),
                geometry: stops.iter().map(|stop| stop.lat_lon()).collect(),
                stops: stops.iter().map(|stop| stop.lat_lon()).collect(),
            })
        }
    }

    #[tokio::test]
    async fn test_resolve_route_ok() -> Result {
        let route = resolve_route(
            &FixedGeocoder,
            &StraightLineRouter,
            "Chicago, IL",
            "St Louis, MO",
            "Houston, TX",
        )
        .await?;
        assert_eq!(route.stops.len(), 3);
        // Stops come out latitude-first, in visiting order:
        assert_eq!(route.stops[0], [41.88, -87.62]);
        assert_eq!(route.stops[2], [29.76, -95.37]);
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_route_unknown_address() {
        let error = resolve_route(
            &FixedGeocoder,
            &StraightLineRouter,
            "Chicago, IL",
            "Atlantis",
            "Houston, TX",
        )
        .await
        .unwrap_err();
        assert!(matches!(error, RouteError::AddressNotFound(address) if address == "Atlantis"));
    }
}
