use serde::{Deserialize, Serialize};

use crate::assets::fonts::FontChoice;
use crate::calibrate::scale::ScaleRatio;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{SignscaleError, SignscaleResult};

/// Everything the user chose about the sign itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignSpec {
    pub text: String,
    /// Target real-world letter height, in inches.
    pub height_in: f64,
    pub font: FontChoice,
    pub fill: Rgba8,
    /// Outline color; `None` draws no outline.
    pub outline: Option<Rgba8>,
    /// Extra advance added between glyphs, in pixels.
    pub letter_spacing_px: u32,
}

impl Default for SignSpec {
    fn default() -> Self {
        Self {
            text: "Your Sign Here".to_owned(),
            height_in: 48.0,
            font: FontChoice::Sans,
            fill: Rgba8::BLACK,
            outline: None,
            letter_spacing_px: 0,
        }
    }
}

impl SignSpec {
    pub fn new(text: impl Into<String>, height_in: f64) -> Self {
        Self {
            text: text.into(),
            height_in,
            ..Self::default()
        }
    }

    pub fn with_font(mut self, font: FontChoice) -> Self {
        self.font = font;
        self
    }

    pub fn with_fill(mut self, fill: Rgba8) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_outline(mut self, outline: Option<Rgba8>) -> Self {
        self.outline = outline;
        self
    }

    pub fn with_letter_spacing(mut self, px: u32) -> Self {
        self.letter_spacing_px = px;
        self
    }

    /// Check the spec is renderable. Empty text is reported as [`SignscaleError::EmptyText`].
    pub fn validate(&self) -> SignscaleResult<()> {
        if self.text.is_empty() {
            return Err(SignscaleError::EmptyText);
        }
        if !self.height_in.is_finite() || self.height_in <= 0.0 {
            return Err(SignscaleError::validation(
                "sign height must be finite and > 0 inches",
            ));
        }
        Ok(())
    }

    /// Integer font size in pixels: `floor(height_in * ratio)`.
    pub fn pixel_size(&self, ratio: ScaleRatio) -> SignscaleResult<u32> {
        if !self.height_in.is_finite() || self.height_in <= 0.0 {
            return Err(SignscaleError::validation(
                "sign height must be finite and > 0 inches",
            ));
        }
        let px = ratio.inches_to_px(self.height_in).floor();
        if px < 1.0 {
            return Err(SignscaleError::validation(format!(
                "sign height of {}\" is less than one pixel at {:.4} px/in",
                self.height_in,
                ratio.px_per_inch()
            )));
        }
        if px > f64::from(u16::MAX) {
            return Err(SignscaleError::validation(format!(
                "sign pixel height {px} is too large to rasterize"
            )));
        }
        Ok(px as u32)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sign/spec.rs"]
mod tests;
