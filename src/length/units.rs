use crate::length::distance::Distance;
use lazy_static::lazy_static;
use std::collections::HashMap;

// Common distances.
//
// To count the number of units in a Distance, divide:
//     let mm = METER / MILLIMETER; // 1000.0
//
// To turn a number of units into a Distance, multiply:
//     let d = 10.0 * METER;
//
// Values are written out in nanometers so every constant is exact.
pub const NANOMETER: Distance = Distance::from_nanometers(1.0);
pub const MICROMETER: Distance = Distance::from_nanometers(1e3);
pub const MILLIMETER: Distance = Distance::from_nanometers(1e6);
pub const CENTIMETER: Distance = Distance::from_nanometers(1e7);
pub const METER: Distance = Distance::from_nanometers(1e9);
pub const KILOMETER: Distance = Distance::from_nanometers(1e12);
pub const INCH: Distance = Distance::from_nanometers(25_400_000.0);
pub const FOOT: Distance = Distance::from_nanometers(304_800_000.0);
pub const FEET: Distance = FOOT;
pub const YARD: Distance = Distance::from_nanometers(914_400_000.0);
pub const MILE: Distance = Distance::from_nanometers(1_609_344_000_000.0);
pub const LIGHTYEAR: Distance = Distance::from_nanometers(9.461e24);

/// Suffix -> scale pairs accepted by the parser.
/// The micro prefix comes in three spellings: ASCII `u`, the micro sign
/// (U+00B5) and the Greek small letter mu (U+03BC).
const UNIT_SUFFIXES: &[(&str, Distance)] = &[
    ("nm", NANOMETER),
    ("um", MICROMETER),
    ("\u{00b5}m", MICROMETER),
    ("\u{03bc}m", MICROMETER),
    ("mm", MILLIMETER),
    ("cm", CENTIMETER),
    ("m", METER),
    ("km", KILOMETER),
    ("in", INCH),
    ("ft", FOOT),
    ("yd", YARD),
    ("mi", MILE),
    ("ly", LIGHTYEAR),
];

lazy_static! {
    static ref UNIT_MAP: HashMap<&'static str, Distance> =
        UNIT_SUFFIXES.iter().copied().collect();
}

/// Look up the scale of a unit suffix. Matching is exact and case-sensitive:
/// `"m"` is a meter, `"mm"` a millimeter, `"M"` nothing.
pub fn lookup_unit(suffix: &str) -> Option<Distance> {
    UNIT_MAP.get(suffix).copied()
}

/// Every suffix the parser accepts, in table order.
pub fn unit_suffixes() -> impl Iterator<Item = &'static str> {
    UNIT_SUFFIXES.iter().map(|(suffix, _)| *suffix)
}
