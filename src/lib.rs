pub mod config;
pub mod length;

pub use length::{
    format_distance, parse_distance, Distance, DistanceFormatter, ParseError, ParseErrorKind,
    UnitSystem,
};
