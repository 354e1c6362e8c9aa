//! Core value types for Verdant.
//!
//! This crate defines the plain, behavior-light types every other Verdant
//! crate builds on:
//! - Physical quantities ([`Distance`], [`Temperature`]) with unit conversion
//! - Geometric and presentation values ([`XyCoordinate`], [`RgbColor`])
//! - Comparison contracts ([`Comparator`], [`ScalarComparator`]) and the
//!   tolerant [`TemperatureComparator`]
//! - Prefixed entity identifiers (`plant_…`, `gbed_…`, `grdn_…`)
//!
//! Nothing here performs I/O or holds state between calls.

mod color;
mod compare;
mod coordinate;
mod distance;
mod ids;
mod temperature;

pub use color::RgbColor;
pub use compare::{
    Comparator, ScalarComparator, TemperatureComparator, CELSIUS_TOLERANCE,
    TEMPERATURE_COMPARATOR,
};
pub use coordinate::XyCoordinate;
pub use distance::{convert_distance_to_feet, convert_raw_distance_to_feet, Distance, DistanceUnit};
pub use ids::{EntityKind, PrefixedId};
pub use temperature::{to_celsius, Temperature, TemperatureRange, TemperatureUnit};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in value type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A unit outside the known set reached a conversion. This means a unit
    /// was introduced somewhere without updating the conversion tables.
    #[error("unsupported {kind} unit: {unit:?}")]
    UnsupportedUnit { kind: &'static str, unit: String },

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}
