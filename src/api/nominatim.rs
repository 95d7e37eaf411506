//! [Nominatim](https://nominatim.org/release-docs/latest/api/Search/) geocoder client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_with::serde_as;

use crate::{
    api::{Geocoder, client, error::RouteError},
    core::route::Coordinate,
    prelude::*,
};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

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
impl Geocoder for Api {
    #[instrument(skip_all, fields(address = address))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, RouteError> {
        let matches: Vec<SearchResult> = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let top = matches
            .into_iter()
            .next()
            .ok_or_else(|| RouteError::AddressNotFound(address.to_string()))?;
        let coordinate = Coordinate { longitude: top.longitude, latitude: top.latitude };
        debug!(%coordinate, "geocoded");
        Ok(coordinate)
    }
}

#[serde_as]
#[derive(Deserialize)]
struct SearchResult {
    /// Nominatim encodes coordinates as decimal strings.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(rename = "lon")]
    longitude: f64,

    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(rename = "lat")]
    latitude: f64,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_parse_search_results() -> Result {
        // Trimmed real response.
        let matches: Vec<SearchResult> = serde_json::from_str(
            r#"[{"place_id": 35168628, "lat": "41.8755616", "lon": "-87.6244212", "class": "boundary", "display_name": "Chicago, Cook County, Illinois, United States"}]"#,
        )?;
        assert_eq!(matches.len(), 1);
        assert_abs_diff_eq!(matches[0].latitude, 41.875_561_6);
        assert_abs_diff_eq!(matches[0].longitude, -87.624_421_2);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "online test"]
    async fn test_geocode_ok() -> Result {
        let coordinate = Api::try_new()?.geocode("Chicago, IL").await?;
        assert!((41.0..43.0).contains(&coordinate.latitude));
        assert!((-89.0..-86.0).contains(&coordinate.longitude));
        Ok(())
    }

    #[tokio::test]
    #[ignore = "online test"]
    async fn test_geocode_not_found() -> Result {
        let error = Api::try_new()?.geocode("zzzzzzzz nowhere at all").await.unwrap_err();
        assert!(matches!(error, RouteError::AddressNotFound(_)));
        Ok(())
    }
}
