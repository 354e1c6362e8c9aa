use serde::{Deserialize, Serialize};

/// An sRGB color with optional alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl RgbColor {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }

    /// CSS functional notation: `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self.alpha {
            Some(alpha) => format!("rgba({}, {}, {}, {})", self.red, self.green, self.blue, alpha),
            None => format!("rgb({}, {}, {})", self.red, self.green, self.blue),
        }
    }

    /// CSS hex notation, ignoring alpha: `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
