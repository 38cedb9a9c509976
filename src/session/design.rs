use image::RgbaImage;

use crate::assets::decode::decode_photo;
use crate::assets::fonts::FontTable;
use crate::calibrate::scale::{DrawnLine, ReferenceMeasurement, ScaleRatio};
use crate::composite::placement::Placement;
use crate::composite::{Composite, composite};
use crate::foundation::core::Point;
use crate::foundation::error::{SignscaleError, SignscaleResult};
use crate::sign::render::{RenderedSign, SignRenderer};
use crate::sign::spec::SignSpec;

/// State of one interactive design session: the loaded photo and the current calibration.
///
/// Every action either succeeds and updates the session, or fails and leaves it exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct DesignSession {
    renderer: SignRenderer,
    photo: Option<RgbaImage>,
    reference: Option<ReferenceMeasurement>,
    ratio: Option<ScaleRatio>,
}

impl DesignSession {
    pub fn new(fonts: FontTable) -> Self {
        Self {
            renderer: SignRenderer::new(fonts),
            ..Self::default()
        }
    }

    pub fn fonts(&self) -> &FontTable {
        self.renderer.fonts()
    }

    /// Decode and keep an uploaded photo. Replaces any earlier photo; calibration is kept.
    #[tracing::instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn load_photo(&mut self, bytes: &[u8]) -> SignscaleResult<(u32, u32)> {
        let img = decode_photo(bytes)?;
        let dims = img.dimensions();
        tracing::debug!(width = dims.0, height = dims.1, "photo loaded");
        self.photo = Some(img);
        Ok(dims)
    }

    pub fn set_photo(&mut self, photo: RgbaImage) {
        self.photo = Some(photo);
    }

    pub fn photo(&self) -> Option<&RgbaImage> {
        self.photo.as_ref()
    }

    /// Calibrate from a reference measurement, overwriting any previous ratio on success.
    #[tracing::instrument(skip(self))]
    pub fn calibrate(&mut self, reference: ReferenceMeasurement) -> SignscaleResult<ScaleRatio> {
        let ratio = reference.ratio()?;
        self.reference = Some(reference);
        self.ratio = Some(ratio);
        Ok(ratio)
    }

    /// Calibrate from a line drawn over the displayed photo.
    pub fn calibrate_drawn_line(
        &mut self,
        line: DrawnLine,
        real_length_in: f64,
    ) -> SignscaleResult<ScaleRatio> {
        let reference = line.measurement(real_length_in)?;
        self.calibrate(reference)
    }

    /// Calibrate from a line drawn over a `displayed_width`-wide preview of the loaded photo.
    ///
    /// The original width comes from the photo itself.
    pub fn calibrate_on_preview(
        &mut self,
        start: Point,
        end: Point,
        displayed_width: f64,
        real_length_in: f64,
    ) -> SignscaleResult<ScaleRatio> {
        let photo = self
            .photo
            .as_ref()
            .ok_or_else(|| SignscaleError::validation("load a photo before drawing on it"))?;
        let line = DrawnLine {
            start,
            end,
            displayed_width,
            original_width: f64::from(photo.width()),
        };
        self.calibrate_drawn_line(line, real_length_in)
    }

    /// Use a ratio that was measured elsewhere.
    pub fn set_ratio(&mut self, ratio: ScaleRatio) {
        self.reference = None;
        self.ratio = Some(ratio);
    }

    pub fn reference(&self) -> Option<&ReferenceMeasurement> {
        self.reference.as_ref()
    }

    pub fn ratio(&self) -> SignscaleResult<ScaleRatio> {
        self.ratio.ok_or(SignscaleError::MissingCalibration)
    }

    /// Render the sign at the calibrated scale.
    pub fn render_sign(&self, spec: &SignSpec) -> SignscaleResult<RenderedSign> {
        let ratio = self.ratio()?;
        spec.validate()?;
        self.renderer.render(spec, ratio)
    }

    /// Paste a rendered sign onto the loaded photo.
    pub fn composite(
        &self,
        sign: &RenderedSign,
        placement: Placement,
    ) -> SignscaleResult<Composite> {
        self.ratio()?;
        let photo = self
            .photo
            .as_ref()
            .ok_or_else(|| SignscaleError::validation("load a photo before compositing"))?;
        composite(photo, &sign.image, placement)
    }
}

/// User-facing confirmation after a successful calibration.
pub fn calibration_message(ratio: ScaleRatio) -> String {
    format!(
        "Scale calculated: {:.2} pixels per inch",
        ratio.px_per_inch()
    )
}

#[cfg(test)]
#[path = "../../tests/unit/session/design.rs"]
mod tests;
