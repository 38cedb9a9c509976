use serde::{Deserialize, Serialize};

use crate::foundation::core::Point;
use crate::foundation::error::{SignscaleError, SignscaleResult};

/// Pixels per real-world inch, derived from a [`ReferenceMeasurement`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ScaleRatio(f64);

impl ScaleRatio {
    /// Wrap an already known pixels-per-inch value. Must be finite and > 0.
    pub fn new(px_per_inch: f64) -> SignscaleResult<Self> {
        if !px_per_inch.is_finite() || px_per_inch <= 0.0 {
            return Err(SignscaleError::validation(
                "scale ratio must be finite and > 0 pixels per inch",
            ));
        }
        Ok(Self(px_per_inch))
    }

    pub fn px_per_inch(self) -> f64 {
        self.0
    }

    pub fn inches_to_px(self, inches: f64) -> f64 {
        inches * self.0
    }

    pub fn px_to_inches(self, px: f64) -> f64 {
        px / self.0
    }
}

impl TryFrom<f64> for ScaleRatio {
    type Error = SignscaleError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<ScaleRatio> for f64 {
    fn from(r: ScaleRatio) -> Self {
        r.0
    }
}

/// Two pixel points on the photo plus the known real-world length between them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMeasurement {
    pub p1: Point,
    pub p2: Point,
    /// Real-world length between `p1` and `p2`, in inches.
    pub real_length_in: f64,
}

impl Default for ReferenceMeasurement {
    fn default() -> Self {
        Self {
            p1: Point::new(0.0, 0.0),
            p2: Point::new(100.0, 100.0),
            real_length_in: 80.0,
        }
    }
}

impl ReferenceMeasurement {
    pub fn new(p1: Point, p2: Point, real_length_in: f64) -> Self {
        Self {
            p1,
            p2,
            real_length_in,
        }
    }

    pub fn pixel_distance(&self) -> f64 {
        self.p1.distance(self.p2)
    }

    pub fn ratio(&self) -> SignscaleResult<ScaleRatio> {
        calibrate(self.p1, self.p2, self.real_length_in)
    }
}

/// Derive the pixels-per-inch ratio from two reference points and their real-world distance.
///
/// Fails with [`SignscaleError::InvalidReference`] when the points coincide.
#[tracing::instrument]
pub fn calibrate(p1: Point, p2: Point, real_length_in: f64) -> SignscaleResult<ScaleRatio> {
    if !real_length_in.is_finite() || real_length_in <= 0.0 {
        return Err(SignscaleError::validation(
            "reference length must be finite and > 0 inches",
        ));
    }
    for p in [p1, p2] {
        if !p.x.is_finite() || !p.y.is_finite() || p.x < 0.0 || p.y < 0.0 {
            return Err(SignscaleError::validation(format!(
                "reference point ({}, {}) must be finite and non-negative",
                p.x, p.y
            )));
        }
    }

    let pixel_dist = (p2 - p1).hypot();
    if pixel_dist <= 0.0 {
        return Err(SignscaleError::invalid_reference("points must be different"));
    }

    let ratio = ScaleRatio::new(pixel_dist / real_length_in)?;
    tracing::debug!(pixel_dist, px_per_inch = ratio.px_per_inch(), "calibrated scale");
    Ok(ratio)
}

/// A reference line drawn over a display-resized copy of the photo.
///
/// Drawn coordinates are mapped back to photo pixels by `original_width / displayed_width`, applied
/// to both axes. The display is assumed to scale uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawnLine {
    pub start: Point,
    pub end: Point,
    /// Width of the image as displayed while drawing, in display pixels.
    pub displayed_width: f64,
    /// Width of the original photo, in pixels.
    pub original_width: f64,
}

impl DrawnLine {
    pub fn display_to_image_factor(&self) -> SignscaleResult<f64> {
        if !self.displayed_width.is_finite() || self.displayed_width <= 0.0 {
            return Err(SignscaleError::validation("displayed width must be > 0"));
        }
        if !self.original_width.is_finite() || self.original_width <= 0.0 {
            return Err(SignscaleError::validation("original width must be > 0"));
        }
        Ok(self.original_width / self.displayed_width)
    }

    /// The line's endpoints in original photo pixel space.
    pub fn to_image_space(&self) -> SignscaleResult<(Point, Point)> {
        let k = self.display_to_image_factor()?;
        let map = |p: Point| Point::new(p.x * k, p.y * k);
        Ok((map(self.start), map(self.end)))
    }

    pub fn measurement(&self, real_length_in: f64) -> SignscaleResult<ReferenceMeasurement> {
        let (p1, p2) = self.to_image_space()?;
        Ok(ReferenceMeasurement::new(p1, p2, real_length_in))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calibrate/scale.rs"]
mod tests;
