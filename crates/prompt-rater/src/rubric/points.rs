use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Rubric score stored as a whole number of half points.
///
/// Every band and bonus in the rubric is a multiple of one half, so totals
/// stay exact and comparisons never depend on floating point rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(u8);

impl Points {
    pub const ZERO: Self = Self(0);
    pub const HALF: Self = Self(1);

    pub const fn whole(value: u8) -> Self {
        Self(value * 2)
    }

    pub const fn halves(count: u8) -> Self {
        Self(count)
    }

    pub const fn half_units(self) -> u8 {
        self.0
    }

    /// Whole-point band the score falls into, truncating any half point.
    pub const fn band(self) -> u8 {
        self.0 / 2
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        *self = *self + rhs;
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Points {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Points> for Points {
    fn sum<I: Iterator<Item = &'a Points>>(iter: I) -> Points {
        iter.copied().sum()
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

impl Serialize for Points {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Points {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        let halves = raw * 2.0;
        if !(0.0..=f64::from(u8::MAX)).contains(&halves) || halves.fract() != 0.0 {
            return Err(serde::de::Error::custom(format!(
                "{raw} is not a non-negative multiple of 0.5"
            )));
        }
        Ok(Points(halves as u8))
    }
}
