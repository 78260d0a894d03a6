// Distance value type with a compact parse/format language
// Parsing: "5ft11in", "-1.5ly", "0" -> Distance (nanometers)
// Formatting: Distance -> "1.803400m" or "1.988889yd"

pub mod detector;
pub mod distance;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod processor;
pub mod units;

#[cfg(test)]
mod tests;

pub use detector::looks_like_distance;
pub use distance::Distance;
pub use error::{ParseError, ParseErrorKind};
pub use formatter::{format_distance, DistanceFormatter, UnitSystem};
pub use parser::parse_distance;
pub use processor::DistanceProcessor;
pub use units::*;
