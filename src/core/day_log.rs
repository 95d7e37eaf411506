use crate::quantity::Hours;

/// One scheduling day of a trip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DayLog {
    /// 1-based, contiguous.
    pub day: u32,

    pub driving_hours: Hours,

    /// Remainder of the 24-hour day not spent driving or on the fixed
    /// pickup/dropoff overhead.
    pub rest_hours: Hours,

    pub fuel_stops: u32,
}
