use std::fmt::{Display, Formatter};

use crate::quantity::{Meters, Seconds};

/// Geographic coordinate in the longitude-first order the routing backends use.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    /// Latitude-first pair, the order map overlays expect.
    #[must_use]
    pub const fn lat_lon(self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Driving route through the trip's stops, as returned by the router.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct RouteSummary {
    pub distance: Meters,
    pub duration: Seconds,

    /// Route polyline as latitude-first pairs.
    pub geometry: Vec<[f64; 2]>,

    /// The three stop coordinates, latitude-first.
    pub stops: Vec<[f64; 2]>,
}
