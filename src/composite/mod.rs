pub(crate) mod paste;
pub(crate) mod placement;

use image::RgbaImage;

use crate::assets::decode::encode_png;
use crate::composite::paste::{paste_masked, resize_rgba};
use crate::composite::placement::Placement;
use crate::foundation::error::{SignscaleError, SignscaleResult};

/// The photo with the sign pasted in.
#[derive(Clone, Debug, PartialEq)]
pub struct Composite {
    /// Same dimensions as the base photo.
    pub image: RgbaImage,
    /// Top-left of the pasted sign in photo pixels; may be negative for oversized signs.
    pub offset: (i64, i64),
    /// Sign dimensions after scaling.
    pub sign_size: (u32, u32),
}

impl Composite {
    pub fn to_png(&self) -> SignscaleResult<Vec<u8>> {
        encode_png(&self.image)
    }
}

/// Scale `sign` by `placement.scale_pct` and paste it onto a copy of `base`.
///
/// Parts of the sign that fall outside the photo are clipped.
#[tracing::instrument(skip(base, sign), fields(base_w = base.width(), base_h = base.height()))]
pub fn composite(
    base: &RgbaImage,
    sign: &RgbaImage,
    placement: Placement,
) -> SignscaleResult<Composite> {
    placement.validate()?;
    if base.width() == 0 || base.height() == 0 {
        return Err(SignscaleError::validation("base photo has no pixels"));
    }

    let (sw, sh) = placement.scaled_size(sign.width(), sign.height());
    let scaled = resize_rgba(sign, sw, sh);
    let offset = placement.offset(base.dimensions(), (sw, sh));
    tracing::debug!(sw, sh, x = offset.0, y = offset.1, "placing sign");

    let mut image = base.clone();
    paste_masked(&mut image, &scaled, offset.0, offset.1);

    Ok(Composite {
        image,
        offset,
        sign_size: (sw, sh),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/composite/composite.rs"]
mod tests;
