/// Route resolution failure.
///
/// Kept as a typed error so the caller can tell an unroutable trip apart
/// from a backend outage, instead of collapsing everything into an empty
/// route.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The geocoder returned no match for the address.
    #[error("no match for address `{0}`")]
    AddressNotFound(String),

    /// The stops geocoded fine, but no drivable route connects them.
    #[error("no drivable route through the requested stops")]
    NoRoute,

    #[error("routing backend request failed")]
    Backend(#[from] reqwest::Error),
}
