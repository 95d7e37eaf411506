use std::fmt::{Debug, Display, Formatter};

/// Driving or on-duty time in hours.
#[derive(
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Hours(pub f64);

impl Hours {
    pub const ZERO: Self = Self(0.0);

    /// Length of one calendar day.
    pub const FULL_DAY: Self = Self(24.0);

    #[must_use]
    pub fn min(mut self, rhs: Self) -> Self {
        if rhs < self {
            self = rhs;
        }
        self
    }

    #[must_use]
    pub fn max(mut self, rhs: Self) -> Self {
        if rhs > self {
            self = rhs;
        }
        self
    }

    /// Round to 2 decimal places, the resolution of an ELD log entry.
    #[must_use]
    pub fn round_centi(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} h", self.0)
    }
}

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}h", self.0)
    }
}

impl From<Seconds> for Hours {
    fn from(seconds: Seconds) -> Self {
        Self(seconds.0 / 3600.0)
    }
}

/// Route duration as reported by the router.
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
pub struct Seconds(pub f64);

impl Seconds {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Seconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} s", self.0)
    }
}

impl Debug for Seconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}s", self.0)
    }
}
