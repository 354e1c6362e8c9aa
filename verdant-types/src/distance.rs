//! Lengths with an explicit unit tag.
//!
//! Every conversion goes through feet. The per-unit factors live in a single
//! exhaustive `match`, so adding a [`DistanceUnit`] variant fails to compile
//! until the factor table is updated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Unit of a [`Distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Inches,
    Feet,
    Yards,
    Meters,
    Centimeters,
}

impl DistanceUnit {
    /// Every supported unit, in declaration order.
    pub const ALL: [DistanceUnit; 5] = [
        DistanceUnit::Inches,
        DistanceUnit::Feet,
        DistanceUnit::Yards,
        DistanceUnit::Meters,
        DistanceUnit::Centimeters,
    ];

    /// The wire name of this unit (`"inches"`, `"feet"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Inches => "inches",
            DistanceUnit::Feet => "feet",
            DistanceUnit::Yards => "yards",
            DistanceUnit::Meters => "meters",
            DistanceUnit::Centimeters => "centimeters",
        }
    }

    /// How many feet one of this unit is.
    const fn feet_factor(self) -> FeetFactor {
        match self {
            DistanceUnit::Inches => FeetFactor::Divide(12.0),
            DistanceUnit::Feet => FeetFactor::Identity,
            DistanceUnit::Yards => FeetFactor::Multiply(3.0),
            DistanceUnit::Meters => FeetFactor::Multiply(3.28084),
            DistanceUnit::Centimeters => FeetFactor::Multiply(0.0328084),
        }
    }
}

// Inches divide by 12 rather than multiply by 1/12 so whole-foot values stay exact.
#[derive(Clone, Copy)]
enum FeetFactor {
    Identity,
    Multiply(f64),
    Divide(f64),
}

impl FeetFactor {
    fn to_feet(self, value: f64) -> f64 {
        match self {
            FeetFactor::Identity => value,
            FeetFactor::Multiply(f) => value * f,
            FeetFactor::Divide(d) => value / d,
        }
    }

    fn from_feet(self, feet: f64) -> f64 {
        match self {
            FeetFactor::Identity => feet,
            FeetFactor::Multiply(f) => feet / f,
            FeetFactor::Divide(d) => feet * d,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| Error::UnsupportedUnit {
                kind: "distance",
                unit: s.to_string(),
            })
    }
}

/// A length such as a planting distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Distance {
    #[must_use]
    pub const fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub const fn feet(value: f64) -> Self {
        Self::new(value, DistanceUnit::Feet)
    }

    /// Converts to any unit, routing through feet.
    #[must_use]
    pub fn to_unit(&self, target: DistanceUnit) -> Distance {
        let feet = convert_distance_to_feet(*self).value;
        Distance::new(target.feet_factor().from_feet(feet), target)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Converts a distance to feet. The result is always tagged [`DistanceUnit::Feet`].
#[must_use]
pub fn convert_distance_to_feet(distance: Distance) -> Distance {
    Distance::feet(distance.unit.feet_factor().to_feet(distance.value))
}

/// Converts a distance whose unit is still raw text, e.g. a persisted
/// column. Unknown unit text is reported as [`Error::UnsupportedUnit`]
/// instead of being coerced to a default.
pub fn convert_raw_distance_to_feet(value: f64, unit: &str) -> crate::Result<Distance> {
    let unit: DistanceUnit = unit.parse()?;
    Ok(convert_distance_to_feet(Distance::new(value, unit)))
}
