//! Hex color parsing and contrast helpers.

use thiserror::Error;

use crate::constants::LIGHT_LUMINANCE_THRESHOLD;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// One palette entry as supplied by the embedding page.
///
/// `hex` may arrive with or without a leading `#` and in any case; it is
/// canonicalized when bubbles are seeded. The `is_light` hint is independent
/// of computed luminance and only affects shadow/stroke weight.
#[derive(Clone, Debug)]
pub struct PaletteEntry {
    pub hex: String,
    pub group: String,
    pub description: Option<String>,
    pub is_light: bool,
}

impl PaletteEntry {
    pub fn new(hex: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            group: group.into(),
            description: None,
            is_light: false,
        }
    }

    pub fn light(mut self) -> Self {
        self.is_light = true;
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Normalizes a hex code to canonical `#RRGGBB` (uppercase) and parses its
/// channels. The leading `#` is optional on input.
pub fn canonicalize(input: &str) -> Result<(String, [u8; 3]), ColorError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() != 6 {
        return Err(ColorError::BadLength(input.to_owned()));
    }
    if !digits.is_ascii() {
        return Err(ColorError::BadDigit(input.to_owned()));
    }
    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| ColorError::BadDigit(input.to_owned()))?;
    }
    Ok((format!("#{}", digits.to_ascii_uppercase()), rgb))
}

/// Relative luminance in [0, 1], Rec. 709 weights.
#[inline]
pub fn luminance(rgb: [u8; 3]) -> f32 {
    (0.2126 * rgb[0] as f32 + 0.7152 * rgb[1] as f32 + 0.0722 * rgb[2] as f32) / 255.0
}

/// Whether a fill is bright enough to need dark text and a contrast stroke.
#[inline]
pub fn is_light_color(rgb: [u8; 3]) -> bool {
    luminance(rgb) > LIGHT_LUMINANCE_THRESHOLD
}
