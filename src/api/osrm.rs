//! [OSRM](https://project-osrm.org/docs/v5.24.0/api/) routing client.

use async_trait::async_trait;
use itertools::Itertools;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    api::{Router, client, error::RouteError},
    core::route::{Coordinate, RouteSummary},
    prelude::*,
    quantity::{Meters, Seconds},
};

const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

pub struct Api {
    client: Client,
    base_url: String,
}

impl Api {
    pub fn try_new() -> Result<Self> {
        Ok(Self { client: client::try_new()?, base_url: DEFAULT_BASE_URL.to_string() })
    }
}

#[async_trait]
impl Router for Api {
    #[instrument(skip_all, fields(n_stops = stops.len()))]
    async fn route(&self, stops: &[Coordinate]) -> Result<RouteSummary, RouteError> {
        let waypoints =
            stops.iter().map(|stop| format!("{},{}", stop.longitude, stop.latitude)).join(";");
        let response: RouteResponse = self
            .client
            .get(format!("{}/route/v1/driving/{waypoints}", self.base_url))
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let route = response.routes.into_iter().next().ok_or(RouteError::NoRoute)?;
        debug!(distance = %route.distance, duration = %route.duration, "fetched the route");
        Ok(RouteSummary {
            distance: route.distance,
            duration: route.duration,
            // GeoJSON is longitude-first, the plan output latitude-first:
            geometry: route
                .geometry
                .coordinates
                .into_iter()
                .map(|[longitude, latitude]| [latitude, longitude])
                .collect(),
            stops: stops.iter().map(|stop| stop.lat_lon()).collect(),
        })
    }
}

#[derive(Deserialize)]
struct RouteResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Deserialize)]
struct Route {
    distance: Meters,
    duration: Seconds,
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}
