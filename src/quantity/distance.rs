use std::fmt::{Debug, Display, Formatter};

pub const METERS_PER_MILE: f64 = 1609.344;

/// Route distance as reported by the router.
#[derive(
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Meters(pub f64);

impl Meters {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Meters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} m", self.0)
    }
}

impl Debug for Meters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}m", self.0)
    }
}

/// Statute miles, the unit the fuel-stop interval is expressed in.
#[derive(
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Miles(pub f64);

impl Miles {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Miles {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} mi", self.0)
    }
}

impl Debug for Miles {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}mi", self.0)
    }
}

impl From<Meters> for Miles {
    fn from(meters: Meters) -> Self {
        Self(meters.0 / METERS_PER_MILE)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_miles_from_meters() {
        assert_abs_diff_eq!(Miles::from(Meters(1_609_344.0)).0, 1000.0);
    }
}
