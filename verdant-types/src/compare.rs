//! Comparison contracts and the tolerant temperature comparator.

use crate::temperature::{to_celsius, Temperature};

/// Largest Celsius difference (exclusive) at which two temperatures are equal.
pub const CELSIUS_TOLERANCE: f64 = 0.01;

/// Equality over `T`.
pub trait Comparator<T: ?Sized> {
    fn is_equal(&self, a: &T, b: &T) -> bool;
}

/// Equality plus strict ordering over `T`.
///
/// Implementations are free to make equality tolerant while keeping ordering
/// exact, so `is_equal` and `is_less_than` may both hold for one pair.
pub trait ScalarComparator<T: ?Sized>: Comparator<T> {
    fn is_less_than(&self, a: &T, b: &T) -> bool;

    fn is_greater_than(&self, a: &T, b: &T) -> bool;
}

/// Compares temperatures after normalizing both sides to Celsius.
///
/// Equality allows a difference strictly below [`CELSIUS_TOLERANCE`] to absorb
/// conversion error. Ordering uses the normalized values as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemperatureComparator;

/// Shared instance of [`TemperatureComparator`].
pub static TEMPERATURE_COMPARATOR: TemperatureComparator = TemperatureComparator;

impl Comparator<Temperature> for TemperatureComparator {
    fn is_equal(&self, a: &Temperature, b: &Temperature) -> bool {
        (to_celsius(*a) - to_celsius(*b)).abs() < CELSIUS_TOLERANCE
    }
}

impl ScalarComparator<Temperature> for TemperatureComparator {
    fn is_less_than(&self, a: &Temperature, b: &Temperature) -> bool {
        to_celsius(*a) < to_celsius(*b)
    }

    fn is_greater_than(&self, a: &Temperature, b: &Temperature) -> bool {
        to_celsius(*a) > to_celsius(*b)
    }
}
