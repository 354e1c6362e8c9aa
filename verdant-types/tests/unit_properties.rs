//! Property-based tests for unit conversion and comparison.
//!
//! These hold for every input:
//! - Conversion to feet always tags the result as feet and applies the fixed factor
//! - Temperature equality is exactly "Celsius difference below tolerance"
//! - Strict ordering never reports both directions for one pair

use proptest::prelude::*;
use verdant_types::{
    convert_distance_to_feet, to_celsius, Comparator, Distance, DistanceUnit, ScalarComparator,
    Temperature, TemperatureUnit, CELSIUS_TOLERANCE, TEMPERATURE_COMPARATOR,
};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn distance_unit_strategy() -> impl Strategy<Value = DistanceUnit> {
    prop::sample::select(DistanceUnit::ALL.to_vec())
}

fn temperature_strategy() -> impl Strategy<Value = Temperature> {
    (
        -200.0f64..400.0,
        prop::sample::select(TemperatureUnit::ALL.to_vec()),
    )
        .prop_map(|(value, unit)| Temperature::new(value, unit))
}

fn expected_feet(value: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Inches => value / 12.0,
        DistanceUnit::Feet => value,
        DistanceUnit::Yards => value * 3.0,
        DistanceUnit::Meters => value * 3.28084,
        DistanceUnit::Centimeters => value * 0.0328084,
    }
}

// =============================================================================
// DISTANCE PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn conversion_always_yields_feet(value in -1.0e6f64..1.0e6, unit in distance_unit_strategy()) {
        let converted = convert_distance_to_feet(Distance::new(value, unit));
        prop_assert_eq!(converted.unit, DistanceUnit::Feet);
        prop_assert_eq!(converted.value, expected_feet(value, unit));
    }

    #[test]
    fn converting_feet_twice_is_stable(value in -1.0e6f64..1.0e6, unit in distance_unit_strategy()) {
        let once = convert_distance_to_feet(Distance::new(value, unit));
        prop_assert_eq!(convert_distance_to_feet(once), once);
    }
}

// =============================================================================
// TEMPERATURE PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn equality_matches_celsius_tolerance(a in temperature_strategy(), b in temperature_strategy()) {
        let expected = (to_celsius(a) - to_celsius(b)).abs() < CELSIUS_TOLERANCE;
        prop_assert_eq!(TEMPERATURE_COMPARATOR.is_equal(&a, &b), expected);
    }

    #[test]
    fn less_and_greater_are_mutually_exclusive(a in temperature_strategy(), b in temperature_strategy()) {
        let lt = TEMPERATURE_COMPARATOR.is_less_than(&a, &b);
        let gt = TEMPERATURE_COMPARATOR.is_greater_than(&a, &b);
        prop_assert!(!(lt && gt));
        prop_assert_eq!(lt, TEMPERATURE_COMPARATOR.is_greater_than(&b, &a));
    }

    #[test]
    fn values_within_band_are_equal(base in -100.0f64..100.0, offset in 0.0f64..0.009) {
        let a = Temperature::celsius(base);
        let b = Temperature::celsius(base + offset);
        prop_assert!(TEMPERATURE_COMPARATOR.is_equal(&a, &b));
    }

    #[test]
    fn some_relation_always_holds(a in temperature_strategy(), b in temperature_strategy()) {
        let any = TEMPERATURE_COMPARATOR.is_equal(&a, &b)
            || TEMPERATURE_COMPARATOR.is_less_than(&a, &b)
            || TEMPERATURE_COMPARATOR.is_greater_than(&a, &b);
        prop_assert!(any);
    }
}
