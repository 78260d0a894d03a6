use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect distance strings
    /// Matches: optional sign + one or more (number + unit letters) terms
    /// Examples: "300m", "5ft11in", "-1.5ly", ".5mm", "7µm"
    static ref DISTANCE_PATTERN: Regex = Regex::new(
        r"^[+-]?(?:(?:\d+(?:\.\d*)?|\.\d+)[a-zµμ]+)+$"
    ).unwrap();
}

/// Check if a string looks like a distance expression
///
/// This is a cheap shape test; the parser still decides whether the units
/// are real. The bare `"0"` is deliberately not matched.
pub fn looks_like_distance(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    DISTANCE_PATTERN.is_match(trimmed)
}
