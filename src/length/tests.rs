#[cfg(test)]
mod tests {
    use super::super::formatter::{format_distance, DistanceFormatter, UnitSystem};
    use super::super::parser::parse_distance;
    use super::super::units::*;
    use super::super::Distance;

    fn assert_close(got: Distance, want: Distance) {
        let tolerance = want.abs().as_nanometers() * 1e-6;
        assert!(
            (got - want).abs().as_nanometers() <= tolerance,
            "Expected ~{:?}, got {:?}",
            want,
            got
        );
    }

    fn assert_round_trip(d: Distance, system: UnitSystem) {
        let formatted = format_distance(d, system);
        let parsed = parse_distance(&formatted)
            .unwrap_or_else(|e| panic!("failed to re-parse {}: {}", formatted, e));
        assert_close(parsed, d);
    }

    #[test]
    fn test_round_trip_every_unit() {
        for suffix in unit_suffixes() {
            let unit = lookup_unit(suffix).expect("listed suffix should resolve");
            assert_round_trip(unit, UnitSystem::Metric);
            // below an inch six decimals of an inch are too coarse
            if unit >= INCH {
                assert_round_trip(unit, UnitSystem::Imperial);
            }
        }
    }

    #[test]
    fn test_round_trip_compound_and_negative() {
        let formatter = DistanceFormatter::new(UnitSystem::Imperial);
        for input in ["5ft11in", "-1ft1in", "1mi", "-1.5ly", "3.25in"] {
            let d = parse_distance(input).unwrap();
            assert_close(parse_distance(&formatter.format(d)).unwrap(), d);
            assert_close(parse_distance(&d.to_string()).unwrap(), d);
        }
    }

    #[test]
    fn test_zero_round_trip() {
        assert_eq!(parse_distance("0").unwrap(), Distance::ZERO);
        for system in [UnitSystem::Metric, UnitSystem::Imperial] {
            let formatted = format_distance(Distance::ZERO, system);
            assert_eq!(parse_distance(&formatted).unwrap(), Distance::ZERO);
        }
    }

    #[test]
    fn test_sign_applies_to_whole_sum() {
        let negative = parse_distance("-1ft1in").unwrap();
        let positive = parse_distance("1ft1in").unwrap();
        assert_eq!(negative, -positive);
        assert_ne!(negative, -FOOT + INCH);
    }

    #[test]
    fn test_compound_matches_unit_arithmetic() {
        assert_eq!(parse_distance("5ft11in").unwrap(), 5.0 * FOOT + 11.0 * INCH);
        assert_eq!(parse_distance("1yd2ft").unwrap(), YARD + 2.0 * FOOT);
        assert_eq!(parse_distance("1m5mm").unwrap(), METER + 5.0 * MILLIMETER);
    }

    #[test]
    fn test_order_of_terms_does_not_matter() {
        assert_eq!(
            parse_distance("11in5ft").unwrap(),
            parse_distance("5ft11in").unwrap()
        );
    }
}
