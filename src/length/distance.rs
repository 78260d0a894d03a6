use crate::length::error::ParseError;
use crate::length::formatter::{format_distance, UnitSystem};
use crate::length::parser::parse_distance;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A physical distance stored as a floating point nanometer count.
///
/// An `f64` caps the largest representable distance at roughly 1.9e283
/// light years, far beyond anything the parser will produce.
///
/// Treat the value as opaque and work through the unit constants:
/// multiply a number by a unit to build a distance, divide a distance by a
/// unit to count how many of that unit it holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    pub const fn from_nanometers(nanometers: f64) -> Self {
        Distance(nanometers)
    }

    pub const fn as_nanometers(self) -> f64 {
        self.0
    }

    /// Number of `unit`s in this distance, e.g. `d.in_unit(FOOT)`.
    pub fn in_unit(self, unit: Distance) -> f64 {
        self.0 / unit.0
    }

    pub fn abs(self) -> Self {
        Distance(self.0.abs())
    }

    /// True for both `+0.0` and `-0.0`.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        Distance(self.0 + rhs.0)
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Distance) {
        self.0 += rhs.0;
    }
}

impl Sub for Distance {
    type Output = Distance;

    fn sub(self, rhs: Distance) -> Distance {
        Distance(self.0 - rhs.0)
    }
}

impl SubAssign for Distance {
    fn sub_assign(&mut self, rhs: Distance) {
        self.0 -= rhs.0;
    }
}

impl Neg for Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        Distance(-self.0)
    }
}

impl Mul<f64> for Distance {
    type Output = Distance;

    fn mul(self, rhs: f64) -> Distance {
        Distance(self.0 * rhs)
    }
}

impl Mul<Distance> for f64 {
    type Output = Distance;

    fn mul(self, rhs: Distance) -> Distance {
        Distance(self * rhs.0)
    }
}

impl Div<f64> for Distance {
    type Output = Distance;

    fn div(self, rhs: f64) -> Distance {
        Distance(self.0 / rhs)
    }
}

impl Div for Distance {
    type Output = f64;

    fn div(self, rhs: Distance) -> f64 {
        self.0 / rhs.0
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Distance {
        iter.fold(Distance::ZERO, Add::add)
    }
}

impl FromStr for Distance {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_distance(s)
    }
}

/// Renders in metric. Use a `DistanceFormatter` to pick the unit system.
impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_distance(*self, UnitSystem::Metric))
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DistanceVisitor;

impl Visitor<'_> for DistanceVisitor {
    type Value = Distance;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a distance string such as \"5ft11in\" or a nanometer count")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Distance, E> {
        parse_distance(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Distance, E> {
        Ok(Distance(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Distance, E> {
        Ok(Distance(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Distance, E> {
        Ok(Distance(v as f64))
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DistanceVisitor)
    }
}
