//! Temperatures in Celsius or Fahrenheit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::compare::ScalarComparator;
use crate::Error;

/// Unit of a [`Temperature`]. Serialized as `"C"` / `"F"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemperatureUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| Error::UnsupportedUnit {
                kind: "temperature",
                unit: s.to_string(),
            })
    }
}

/// A temperature reading.
///
/// Deserializes from either the record form `{"value": 50, "unit": "F"}` or
/// the pair form `[50, "F"]`; always serializes as the record form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "TemperatureRepr")]
pub struct Temperature {
    pub value: f64,
    pub unit: TemperatureUnit,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TemperatureRepr {
    Record(TemperatureRecord),
    Pair(f64, TemperatureUnit),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TemperatureRecord {
    value: f64,
    unit: TemperatureUnit,
}

impl From<TemperatureRepr> for Temperature {
    fn from(repr: TemperatureRepr) -> Self {
        match repr {
            TemperatureRepr::Record(TemperatureRecord { value, unit }) => Self { value, unit },
            TemperatureRepr::Pair(value, unit) => Self { value, unit },
        }
    }
}

impl From<(f64, TemperatureUnit)> for Temperature {
    fn from((value, unit): (f64, TemperatureUnit)) -> Self {
        Self { value, unit }
    }
}

impl Temperature {
    #[must_use]
    pub const fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub const fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    #[must_use]
    pub const fn fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    /// Returns the same reading expressed in Celsius.
    #[must_use]
    pub fn in_celsius(&self) -> Temperature {
        Temperature::celsius(to_celsius(*self))
    }

    /// Returns the reading's value in Fahrenheit.
    #[must_use]
    pub fn to_fahrenheit(&self) -> f64 {
        match self.unit {
            TemperatureUnit::Celsius => self.value * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Fahrenheit => self.value,
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}", self.value, self.unit)
    }
}

/// Normalizes a temperature (record or `(value, unit)` pair) to degrees Celsius.
#[must_use]
pub fn to_celsius(temperature: impl Into<Temperature>) -> f64 {
    let Temperature { value, unit } = temperature.into();
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}

/// An inclusive band of temperatures, e.g. a month's typical range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemperatureRange {
    pub min: Temperature,
    pub max: Temperature,
}

impl TemperatureRange {
    #[must_use]
    pub const fn new(min: Temperature, max: Temperature) -> Self {
        Self { min, max }
    }

    /// Whether `temperature` lies within the range. The bounds count as
    /// inside whenever the comparator reports them equal.
    pub fn contains<C>(&self, temperature: &Temperature, comparator: &C) -> bool
    where
        C: ScalarComparator<Temperature> + ?Sized,
    {
        let above_min = comparator.is_greater_than(temperature, &self.min)
            || comparator.is_equal(temperature, &self.min);
        let below_max = comparator.is_less_than(temperature, &self.max)
            || comparator.is_equal(temperature, &self.max);
        above_min && below_max
    }
}
