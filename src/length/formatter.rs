use crate::length::distance::Distance;
use crate::length::units::{
    CENTIMETER, FOOT, INCH, METER, MICROMETER, MILLIMETER, NANOMETER, YARD,
};
use serde::{Deserialize, Serialize};

/// Which family of units the formatter prefers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }
}

// Largest unit first. Anything below the last step falls to the smallest unit.
const METRIC_STEPS: &[(Distance, &str)] = &[
    (METER, "m"),
    (CENTIMETER, "cm"),
    (MILLIMETER, "mm"),
    (MICROMETER, "\u{00b5}m"),
];
const METRIC_SMALLEST: (Distance, &str) = (NANOMETER, "nm");

const IMPERIAL_STEPS: &[(Distance, &str)] = &[(YARD, "yd"), (FOOT, "ft")];
const IMPERIAL_SMALLEST: (Distance, &str) = (INCH, "in");

/// Render `distance` in the largest unit of `system` that keeps the leading
/// digit non-zero, with six fractional digits: `"2.000000cm"`, `"1.500000yd"`.
///
/// Zero renders without a fraction as `"0m"` or `"0yd"`.
pub fn format_distance(distance: Distance, system: UnitSystem) -> String {
    let (steps, smallest) = match system {
        UnitSystem::Metric => (METRIC_STEPS, METRIC_SMALLEST),
        UnitSystem::Imperial => (IMPERIAL_STEPS, IMPERIAL_SMALLEST),
    };

    let magnitude = distance.abs();
    let (unit, suffix) = match steps.iter().find(|(unit, _)| magnitude >= *unit) {
        Some(step) => *step,
        None if distance.is_zero() => return format!("0{}", steps[0].1),
        None => smallest,
    };

    format!("{:.6}{}", distance / unit, suffix)
}

/// Formats distances in a unit system that can be switched between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceFormatter {
    system: UnitSystem,
}

impl DistanceFormatter {
    pub fn new(system: UnitSystem) -> Self {
        Self { system }
    }

    pub fn system(&self) -> UnitSystem {
        self.system
    }

    pub fn set_metric(&mut self) {
        self.system = UnitSystem::Metric;
    }

    pub fn set_imperial(&mut self) {
        self.system = UnitSystem::Imperial;
    }

    pub fn toggle_units(&mut self) {
        self.system = self.system.toggled();
    }

    pub fn format(&self, distance: Distance) -> String {
        format_distance(distance, self.system)
    }
}
