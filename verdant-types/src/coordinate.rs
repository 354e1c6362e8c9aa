use serde::{Deserialize, Serialize};

/// A position inside a zone, in zone grid units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XyCoordinate {
    pub x: f64,
    pub y: f64,
}

impl XyCoordinate {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS transform placing an element at this position, one unit per pixel.
    #[must_use]
    pub fn to_css_translate(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}
