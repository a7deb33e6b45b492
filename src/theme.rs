//! Theme values consumed by preview rendering.
//!
//! The preview only reads a text color and two spacing steps. Colors are kept
//! as `#rrggbb` strings so themes can be stored in the settings file as-is;
//! they are parsed into [`Color32`] at render time.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Icon and preview text color
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Padding above the preview row
    pub tiny: f32,
    /// Gap between icon and text
    pub micro: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewTheme {
    pub name: String,
    pub colors: ThemeColors,
    pub spacing: Spacing,
}

impl PreviewTheme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            colors: ThemeColors {
                text: "#b9bbbe".to_string(),
            },
            spacing: Spacing {
                tiny: 4.0,
                micro: 2.0,
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            colors: ThemeColors {
                text: "#4f5660".to_string(),
            },
            spacing: Spacing {
                tiny: 4.0,
                micro: 2.0,
            },
        }
    }

    /// Preset matching the host's current visuals
    pub fn for_visuals(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn named(name: &str) -> Result<Self, ThemeError> {
        match name.to_ascii_lowercase().as_str() {
            "dark" | "" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            _ => Err(ThemeError::UnknownTheme(name.to_string())),
        }
    }

    pub fn text_color(&self) -> Result<Color32, ThemeError> {
        parse_hex_color(&self.colors.text)
    }
}

impl Default for PreviewTheme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Parse `#rrggbb` (leading `#` optional) into an opaque color.
pub fn parse_hex_color(hex: &str) -> Result<Color32, ThemeError> {
    let invalid = || ThemeError::InvalidColor(hex.to_string());

    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}
