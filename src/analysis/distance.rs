use derive_more::Display;
use std::ops::Add;

/// A shortest-path distance under unit edge weights.
///
/// `Infinite` compares greater than every finite distance, and any sum involving it
/// stays `Infinite`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    #[display(fmt = "{}", _0)]
    Finite(u32),
    #[display(fmt = "inf")]
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<u32> {
        match *self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => {
                a.checked_add(b).map_or(Distance::Infinite, Distance::Finite)
            }
            _ => Distance::Infinite,
        }
    }
}
