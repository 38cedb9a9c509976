use serde::{Deserialize, Serialize};

use crate::foundation::error::{SignscaleError, SignscaleResult};

pub const MIN_SCALE_PCT: f64 = 50.0;
pub const MAX_SCALE_PCT: f64 = 200.0;

/// Where and how large the sign goes on the photo, in percentages.
///
/// `x_pct`/`y_pct` of 0 pin the sign to the left/top edge and 100 to the right/bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub x_pct: f64,
    pub y_pct: f64,
    pub scale_pct: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            x_pct: 50.0,
            y_pct: 50.0,
            scale_pct: 100.0,
        }
    }
}

impl Placement {
    pub fn new(x_pct: f64, y_pct: f64, scale_pct: f64) -> Self {
        Self {
            x_pct,
            y_pct,
            scale_pct,
        }
    }

    pub fn validate(&self) -> SignscaleResult<()> {
        for (name, v) in [("horizontal", self.x_pct), ("vertical", self.y_pct)] {
            if !v.is_finite() || !(0.0..=100.0).contains(&v) {
                return Err(SignscaleError::validation(format!(
                    "{name} position must be within 0..=100 %, got {v}"
                )));
            }
        }
        if !self.scale_pct.is_finite() || !(MIN_SCALE_PCT..=MAX_SCALE_PCT).contains(&self.scale_pct)
        {
            return Err(SignscaleError::validation(format!(
                "sign scale must be within {MIN_SCALE_PCT}..={MAX_SCALE_PCT} %, got {}",
                self.scale_pct
            )));
        }
        Ok(())
    }

    /// Sign dimensions after scaling: `floor(dim * scale_pct / 100)`, never below one pixel.
    pub fn scaled_size(&self, width: u32, height: u32) -> (u32, u32) {
        let k = self.scale_pct / 100.0;
        let scale = |d: u32| ((f64::from(d) * k).floor() as u32).max(1);
        (scale(width), scale(height))
    }

    /// Top-left offset of a `sign` sized overlay on a `base` sized photo.
    ///
    /// Negative when the sign is larger than the photo along that axis.
    pub fn offset(&self, base: (u32, u32), sign: (u32, u32)) -> (i64, i64) {
        let axis = |pct: f64, base: u32, sign: u32| -> i64 {
            let slack = i64::from(base) - i64::from(sign);
            (pct / 100.0 * slack as f64).trunc() as i64
        };
        (
            axis(self.x_pct, base.0, sign.0),
            axis(self.y_pct, base.1, sign.1),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/placement.rs"]
mod tests;
